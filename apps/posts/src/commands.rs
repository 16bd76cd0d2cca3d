//! Subcommands and how each one drives the view handlers.

use clap::Subcommand;
use client_core::{CommentForm, PostDraft, PostsBackend, PostsView, ViewError};
use shared::domain::{CommentId, PostId};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the user's posts and their comments.
    Show,
    CreatePost {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Replace a post; omitted fields keep their current value.
    EditPost {
        post_id: PostId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    DeletePost {
        post_id: PostId,
    },
    CreateComment {
        post_id: PostId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        body: String,
    },
    /// Replace a comment; omitted fields keep their current value.
    EditComment {
        comment_id: CommentId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    DeleteComment {
        comment_id: CommentId,
    },
}

pub async fn run<B: PostsBackend>(
    view: &mut PostsView<B>,
    command: Command,
) -> Result<(), ViewError> {
    match command {
        Command::Show => Ok(()),
        Command::CreatePost { title, content } => {
            view.state.post_form = PostDraft::new(title, content);
            view.create_post().await.map(|_| ())
        }
        Command::EditPost {
            post_id,
            title,
            content,
        } => {
            view.begin_post_edit(post_id)?;
            if let Some(draft) = view.post_edit_draft_mut() {
                if let Some(title) = title {
                    draft.title = title;
                }
                if let Some(content) = content {
                    draft.content = content;
                }
            }
            view.save_post_edit().await
        }
        Command::DeletePost { post_id } => view.delete_post(post_id).await,
        Command::CreateComment {
            post_id,
            name,
            body,
        } => {
            view.state.comment_form = CommentForm::new(post_id, name, body);
            view.create_comment().await.map(|_| ())
        }
        Command::EditComment {
            comment_id,
            name,
            body,
        } => {
            view.begin_comment_edit(comment_id)?;
            if let Some(draft) = view.comment_edit_draft_mut() {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(body) = body {
                    draft.body = body;
                }
            }
            view.save_comment_edit().await
        }
        Command::DeleteComment { comment_id } => view.delete_comment(comment_id).await,
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod commands_tests;
