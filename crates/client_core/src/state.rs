//! Plain view state: loaded lists, form drafts, edit sessions and the
//! status line. Front ends mutate the drafts directly and call the
//! handlers on [`crate::PostsView`].

use shared::{
    domain::{Comment, CommentId, Post, PostId, UserId},
    protocol::{CommentUpdateBody, NewCommentBody, PostBody},
};

use crate::resource::RecordList;

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub posts: RecordList<Post>,
    pub comments: RecordList<Comment>,
    pub post_form: PostDraft,
    pub comment_form: CommentForm,
    pub post_edit: Option<EditSession<PostId, PostDraft>>,
    pub comment_edit: Option<EditSession<CommentId, CommentDraft>>,
    pub message: Option<StatusMessage>,
}

/// The record currently under edit and its working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession<I, D> {
    pub id: I,
    pub draft: D,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn to_body(&self, author_id: UserId) -> PostBody {
        PostBody {
            title: self.title.clone(),
            content: self.content.clone(),
            author_id,
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self::new(post.title.clone(), post.content.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub name: String,
    pub body: String,
}

impl CommentDraft {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.body.trim().is_empty()
    }

    pub fn to_update(&self) -> CommentUpdateBody {
        CommentUpdateBody {
            name: self.name.clone(),
            body: self.body.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.body.clear();
    }
}

impl From<&Comment> for CommentDraft {
    fn from(comment: &Comment) -> Self {
        Self::new(comment.name.clone(), comment.body.clone())
    }
}

/// The "new comment" form: a target post plus the comment fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub post_id: Option<PostId>,
    pub draft: CommentDraft,
}

impl CommentForm {
    pub fn new(post_id: PostId, name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            post_id: Some(post_id),
            draft: CommentDraft::new(name, body),
        }
    }

    pub fn to_body(&self) -> Option<NewCommentBody> {
        let post_id = self.post_id?;
        if !self.draft.is_complete() {
            return None;
        }
        Some(NewCommentBody {
            post_id,
            name: self.draft.name.clone(),
            body: self.draft.body.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.post_id = None;
        self.draft.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: &'static str,
}

impl StatusMessage {
    pub fn success(text: &'static str) -> Self {
        Self {
            kind: MessageKind::Success,
            text,
        }
    }

    pub fn error(text: &'static str) -> Self {
        Self {
            kind: MessageKind::Error,
            text,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;
