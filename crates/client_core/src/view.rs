//! The posts view: one user's posts, every comment, and the handlers that
//! create, edit and delete them.
//!
//! SYNCHRONIZATION
//! ===============
//! Every mutation issues exactly one request and only touches the local
//! lists once that request succeeds. A failed request leaves the lists as
//! they were. There is no retry and no reconciliation with changes made by
//! other clients; the last write wins.

use shared::domain::{Comment, CommentId, Post, PostId, UserId};
use tracing::{error, info, warn};

use crate::{
    error::{BackendError, ViewError},
    render::Rendered,
    resource::{RecordList, Resource},
    state::{CommentDraft, EditSession, PostDraft, StatusMessage, ViewState},
    PostsBackend,
};

pub const POST_FIELDS_REQUIRED: &str = "Title and content cannot be empty.";
pub const COMMENT_FIELDS_REQUIRED: &str = "Comment fields are required.";
pub const COMMENT_EDIT_FIELDS_REQUIRED: &str = "Name and comment cannot be empty.";

/// User-visible outcomes of create and update for one record kind.
struct Feedback {
    created: &'static str,
    create_failed: &'static str,
    updated: &'static str,
    update_failed: &'static str,
}

const POST_FEEDBACK: Feedback = Feedback {
    created: "Post created successfully!",
    create_failed: "Error creating post. Please try again.",
    updated: "Post updated successfully!",
    update_failed: "Error updating post. Please try again.",
};

const COMMENT_FEEDBACK: Feedback = Feedback {
    created: "Comment added successfully!",
    create_failed: "Error creating comment. Please try again.",
    updated: "Comment updated successfully!",
    update_failed: "Error updating comment. Please try again.",
};

pub struct PostsView<B: PostsBackend> {
    backend: B,
    user_id: UserId,
    pub state: ViewState,
}

impl<B: PostsBackend> PostsView<B> {
    /// Build an empty view. Call [`PostsView::load`] to populate it.
    pub fn new(backend: B, user_id: UserId) -> Self {
        Self {
            backend,
            user_id,
            state: ViewState::default(),
        }
    }

    /// Build a view and load it.
    pub async fn open(backend: B, user_id: UserId) -> Self {
        let mut view = Self::new(backend, user_id);
        view.load().await;
        view
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn posts(&self) -> &[Post] {
        self.state.posts.as_slice()
    }

    pub fn comments(&self) -> &[Comment] {
        self.state.comments.as_slice()
    }

    pub fn comments_for(&self, post_id: PostId) -> impl Iterator<Item = &Comment> + '_ {
        self.state
            .comments
            .iter()
            .filter(move |comment| comment.post_id == post_id)
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.state.message.as_ref()
    }

    pub fn render(&self) -> Rendered<'_> {
        Rendered::new(self.user_id, &self.state)
    }

    /// Fetch all posts and comments and keep this user's posts.
    ///
    /// Failures are logged and otherwise ignored: a list whose fetch failed
    /// keeps its previous contents, and comments are not fetched when posts
    /// could not be.
    pub async fn load(&mut self) {
        let user_id = self.user_id;
        match self.backend.list_posts().await {
            Ok(all) => {
                let mine: Vec<Post> = all
                    .into_iter()
                    .filter(|post| post.author_id == user_id)
                    .collect();
                info!(%user_id, count = mine.len(), "loaded posts");
                self.state.posts.replace_all(mine);
            }
            Err(err) => {
                error!(%user_id, code = ?err.code(), error = %err, "error fetching posts");
                return;
            }
        }

        match self.backend.list_comments().await {
            Ok(all) => {
                info!(count = all.len(), "loaded comments");
                self.state.comments.replace_all(all);
            }
            Err(err) => {
                error!(code = ?err.code(), error = %err, "error fetching comments");
            }
        }
    }

    /// Point the view at another user and reload. Open edit sessions are
    /// dropped. Switching to the current user is a no-op.
    pub async fn switch_user(&mut self, user_id: UserId) {
        if user_id == self.user_id {
            return;
        }
        self.user_id = user_id;
        self.state.post_edit = None;
        self.state.comment_edit = None;
        self.load().await;
    }

    // =============================================================
    // Posts
    // =============================================================

    pub async fn create_post(&mut self) -> Result<PostId, ViewError> {
        if !self.state.post_form.is_complete() {
            return Err(self.reject(POST_FIELDS_REQUIRED));
        }

        let body = self.state.post_form.to_body(self.user_id);
        let result = self.backend.create_post(&body).await;
        let id = settle_create(
            &mut self.state.posts,
            &mut self.state.message,
            &POST_FEEDBACK,
            result,
        )?;
        self.state.post_form.clear();
        Ok(id)
    }

    pub fn begin_post_edit(&mut self, id: PostId) -> Result<(), ViewError> {
        let post = self
            .state
            .posts
            .get(id)
            .ok_or(ViewError::UnknownRecord {
                kind: Post::KIND,
                id: id.0,
            })?;
        self.state.post_edit = Some(EditSession {
            id,
            draft: PostDraft::from(post),
        });
        Ok(())
    }

    pub fn post_edit_draft_mut(&mut self) -> Option<&mut PostDraft> {
        self.state.post_edit.as_mut().map(|edit| &mut edit.draft)
    }

    pub fn cancel_post_edit(&mut self) {
        self.state.post_edit = None;
    }

    pub async fn save_post_edit(&mut self) -> Result<(), ViewError> {
        let Some(edit) = self.state.post_edit.clone() else {
            return Err(ViewError::NotEditing(Post::KIND));
        };
        if !edit.draft.is_complete() {
            return Err(self.reject(POST_FIELDS_REQUIRED));
        }

        let body = edit.draft.to_body(self.user_id);
        let result = self.backend.replace_post(edit.id, &body).await;
        settle_update(
            &mut self.state.posts,
            &mut self.state.message,
            &POST_FEEDBACK,
            edit.id,
            &body,
            result,
        )?;
        self.state.post_edit = None;
        Ok(())
    }

    pub async fn delete_post(&mut self, id: PostId) -> Result<(), ViewError> {
        let result = self.backend.delete_post(id).await;
        settle_delete(&mut self.state.posts, id, result)?;
        if self.state.post_edit.as_ref().is_some_and(|edit| edit.id == id) {
            self.state.post_edit = None;
        }
        Ok(())
    }

    // =============================================================
    // Comments
    // =============================================================

    pub async fn create_comment(&mut self) -> Result<CommentId, ViewError> {
        let Some(body) = self.state.comment_form.to_body() else {
            return Err(self.reject(COMMENT_FIELDS_REQUIRED));
        };

        let result = self.backend.create_comment(&body).await;
        let id = settle_create(
            &mut self.state.comments,
            &mut self.state.message,
            &COMMENT_FEEDBACK,
            result,
        )?;
        self.state.comment_form.clear();
        Ok(id)
    }

    pub fn begin_comment_edit(&mut self, id: CommentId) -> Result<(), ViewError> {
        let comment = self
            .state
            .comments
            .get(id)
            .ok_or(ViewError::UnknownRecord {
                kind: Comment::KIND,
                id: id.0,
            })?;
        self.state.comment_edit = Some(EditSession {
            id,
            draft: CommentDraft::from(comment),
        });
        Ok(())
    }

    pub fn comment_edit_draft_mut(&mut self) -> Option<&mut CommentDraft> {
        self.state.comment_edit.as_mut().map(|edit| &mut edit.draft)
    }

    pub fn cancel_comment_edit(&mut self) {
        self.state.comment_edit = None;
    }

    pub async fn save_comment_edit(&mut self) -> Result<(), ViewError> {
        let Some(edit) = self.state.comment_edit.clone() else {
            return Err(ViewError::NotEditing(Comment::KIND));
        };
        if !edit.draft.is_complete() {
            return Err(self.reject(COMMENT_EDIT_FIELDS_REQUIRED));
        }

        let body = edit.draft.to_update();
        let result = self.backend.replace_comment(edit.id, &body).await;
        settle_update(
            &mut self.state.comments,
            &mut self.state.message,
            &COMMENT_FEEDBACK,
            edit.id,
            &body,
            result,
        )?;
        self.state.comment_edit = None;
        Ok(())
    }

    pub async fn delete_comment(&mut self, id: CommentId) -> Result<(), ViewError> {
        let result = self.backend.delete_comment(id).await;
        settle_delete(&mut self.state.comments, id, result)?;
        if self
            .state
            .comment_edit
            .as_ref()
            .is_some_and(|edit| edit.id == id)
        {
            self.state.comment_edit = None;
        }
        Ok(())
    }

    fn reject(&mut self, text: &'static str) -> ViewError {
        self.state.message = Some(StatusMessage::error(text));
        ViewError::Validation(text)
    }
}

fn settle_create<R: Resource>(
    list: &mut RecordList<R>,
    message: &mut Option<StatusMessage>,
    feedback: &Feedback,
    result: Result<R, BackendError>,
) -> Result<R::Id, ViewError> {
    match result {
        Ok(record) => {
            let id = record.id();
            info!(kind = R::KIND, %id, "created");
            list.append(record);
            *message = Some(StatusMessage::success(feedback.created));
            Ok(id)
        }
        Err(err) => {
            error!(kind = R::KIND, code = ?err.code(), error = %err, "error creating record");
            *message = Some(StatusMessage::error(feedback.create_failed));
            Err(err.into())
        }
    }
}

fn settle_update<R: Resource>(
    list: &mut RecordList<R>,
    message: &mut Option<StatusMessage>,
    feedback: &Feedback,
    id: R::Id,
    update: &R::Update,
    result: Result<(), BackendError>,
) -> Result<(), ViewError> {
    match result {
        Ok(()) => {
            if list.patch(id, update) {
                info!(kind = R::KIND, %id, "updated");
            } else {
                warn!(kind = R::KIND, %id, "updated record is no longer in the view");
            }
            *message = Some(StatusMessage::success(feedback.updated));
            Ok(())
        }
        Err(err) => {
            error!(kind = R::KIND, %id, code = ?err.code(), error = %err, "error updating record");
            *message = Some(StatusMessage::error(feedback.update_failed));
            Err(err.into())
        }
    }
}

fn settle_delete<R: Resource>(
    list: &mut RecordList<R>,
    id: R::Id,
    result: Result<(), BackendError>,
) -> Result<(), ViewError> {
    match result {
        Ok(()) => {
            let removed = list.remove(id);
            info!(kind = R::KIND, %id, removed, "deleted");
            Ok(())
        }
        Err(err) => {
            error!(kind = R::KIND, %id, code = ?err.code(), error = %err, "error deleting record");
            Err(err.into())
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod view_tests;
