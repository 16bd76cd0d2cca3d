//! Client for the posts API: a backend seam, its HTTP implementation, and
//! the [`PostsView`] state holder whose handlers keep a local copy of one
//! user's posts and all comments in step with the server.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    domain::{Comment, CommentId, Post, PostId},
    protocol::{CommentUpdateBody, NewCommentBody, PostBody},
};

pub mod error;
pub mod http;
pub mod render;
pub mod resource;
pub mod state;
pub mod view;

pub use error::{BackendError, ViewError};
pub use http::HttpBackend;
pub use state::{CommentDraft, CommentForm, MessageKind, PostDraft, StatusMessage, ViewState};
pub use view::PostsView;

#[async_trait]
pub trait PostsBackend: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError>;
    async fn list_comments(&self) -> Result<Vec<Comment>, BackendError>;
    async fn create_post(&self, body: &PostBody) -> Result<Post, BackendError>;
    async fn replace_post(&self, id: PostId, body: &PostBody) -> Result<(), BackendError>;
    async fn delete_post(&self, id: PostId) -> Result<(), BackendError>;
    async fn create_comment(&self, body: &NewCommentBody) -> Result<Comment, BackendError>;
    async fn replace_comment(
        &self,
        id: CommentId,
        body: &CommentUpdateBody,
    ) -> Result<(), BackendError>;
    async fn delete_comment(&self, id: CommentId) -> Result<(), BackendError>;
}

#[async_trait]
impl<T> PostsBackend for Arc<T>
where
    T: PostsBackend + ?Sized,
{
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        (**self).list_posts().await
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, BackendError> {
        (**self).list_comments().await
    }

    async fn create_post(&self, body: &PostBody) -> Result<Post, BackendError> {
        (**self).create_post(body).await
    }

    async fn replace_post(&self, id: PostId, body: &PostBody) -> Result<(), BackendError> {
        (**self).replace_post(id, body).await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), BackendError> {
        (**self).delete_post(id).await
    }

    async fn create_comment(&self, body: &NewCommentBody) -> Result<Comment, BackendError> {
        (**self).create_comment(body).await
    }

    async fn replace_comment(
        &self,
        id: CommentId,
        body: &CommentUpdateBody,
    ) -> Result<(), BackendError> {
        (**self).replace_comment(id, body).await
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), BackendError> {
        (**self).delete_comment(id).await
    }
}
