//! Collection plumbing shared by posts and comments.
//!
//! A [`Resource`] names its REST collection, exposes its identifier, and
//! knows how to fold a replacement body into a local copy. [`RecordList`] is
//! the in-memory list the view patches after each successful server call.

use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::{Comment, CommentId, Post, PostId},
    protocol::{comments_route, posts_route, CommentUpdateBody, NewCommentBody, PostBody},
};

pub trait Resource: Clone + DeserializeOwned + Send + Sync + 'static {
    type Id: Copy + Eq + Display + Send + Sync;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    /// Singular name used in logs and messages.
    const KIND: &'static str;

    fn route() -> &'static str;
    fn id(&self) -> Self::Id;
    fn apply(&mut self, update: &Self::Update);
}

impl Resource for Post {
    type Id = PostId;
    type Create = PostBody;
    type Update = PostBody;

    const KIND: &'static str = "post";

    fn route() -> &'static str {
        posts_route()
    }

    fn id(&self) -> PostId {
        self.id
    }

    fn apply(&mut self, update: &PostBody) {
        self.title.clone_from(&update.title);
        self.content.clone_from(&update.content);
        self.author_id = update.author_id;
    }
}

impl Resource for Comment {
    type Id = CommentId;
    type Create = NewCommentBody;
    type Update = CommentUpdateBody;

    const KIND: &'static str = "comment";

    fn route() -> &'static str {
        comments_route()
    }

    fn id(&self) -> CommentId {
        self.id
    }

    fn apply(&mut self, update: &CommentUpdateBody) {
        self.name.clone_from(&update.name);
        self.body.clone_from(&update.body);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordList<R> {
    items: Vec<R>,
}

impl<R> Default for RecordList<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: Resource> RecordList<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self { items }
    }

    pub fn replace_all(&mut self, items: Vec<R>) {
        self.items = items;
    }

    pub fn append(&mut self, record: R) {
        self.items.push(record);
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.items.iter().find(|record| record.id() == id)
    }

    /// Fold `update` into the record with `id`. Returns false when absent.
    pub fn patch(&mut self, id: R::Id, update: &R::Update) -> bool {
        match self.items.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                record.apply(update);
                true
            }
            None => false,
        }
    }

    /// Drop every record with `id`. Returns the number removed.
    pub fn remove(&mut self, id: R::Id) -> usize {
        let before = self.items.len();
        self.items.retain(|record| record.id() != id);
        before - self.items.len()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/resource_tests.rs"]
mod resource_tests;
