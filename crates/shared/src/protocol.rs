//! Request bodies sent to the posts API.

use serde::{Deserialize, Serialize};

use crate::domain::{PostId, UserId};

/// Body of `POST /posts` and `PUT /posts/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
    pub title: String,
    pub content: String,
    pub author_id: UserId,
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentBody {
    pub post_id: PostId,
    pub name: String,
    pub body: String,
}

/// Body of `PUT /comments/:id`. The post link is not resent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUpdateBody {
    pub name: String,
    pub body: String,
}

pub fn posts_route() -> &'static str {
    "posts"
}

pub fn comments_route() -> &'static str {
    "comments"
}
