//! Plain-text rendering of a [`ViewState`].

use std::fmt;

use shared::domain::UserId;

use crate::state::{MessageKind, ViewState};

pub fn total_label(count: usize) -> String {
    let noun = if count > 1 { "Posts" } else { "Post" };
    format!("Total {count} {noun}")
}

pub struct Rendered<'a> {
    user_id: UserId,
    state: &'a ViewState,
}

impl<'a> Rendered<'a> {
    pub fn new(user_id: UserId, state: &'a ViewState) -> Self {
        Self { user_id, state }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        writeln!(f, "User {}'s Posts", self.user_id)?;
        writeln!(f, "{}", total_label(state.posts.len()))?;

        for post in state.posts.iter() {
            writeln!(f)?;
            match &state.post_edit {
                Some(edit) if edit.id == post.id => {
                    writeln!(f, "Editing post {}", post.id)?;
                    writeln!(f, "  Title: {}", edit.draft.title)?;
                    writeln!(f, "  Content: {}", edit.draft.content)?;
                }
                _ => {
                    writeln!(f, "Post ID: {}", post.id)?;
                    writeln!(f, "TITLE: {}", post.title)?;
                    writeln!(f, "DESCRIPTION: {}", post.content)?;
                }
            }

            writeln!(f, "  Comments")?;
            for comment in state.comments.iter().filter(|c| c.post_id == post.id) {
                match &state.comment_edit {
                    Some(edit) if edit.id == comment.id => {
                        writeln!(
                            f,
                            "  * editing comment {}: {}: {}",
                            comment.id, edit.draft.name, edit.draft.body
                        )?;
                    }
                    _ => writeln!(f, "  - [{}] {}: {}", comment.id, comment.name, comment.body)?,
                }
            }
        }

        if let Some(message) = &state.message {
            let tag = match message.kind {
                MessageKind::Success => "success",
                MessageKind::Error => "error",
            };
            writeln!(f)?;
            writeln!(f, "[{tag}] {}", message.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod render_tests;
