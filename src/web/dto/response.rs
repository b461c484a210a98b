//! Response DTOs for the opine API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Comment, Post};

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Post representation returned by the API.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub text: String,
    /// Whether comments can be created on this post.
    pub allow_comments: bool,
    /// Author name.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            text: post.text,
            allow_comments: post.allow_comments,
            author: post.author,
            created_at: post.created_at,
        }
    }
}

/// Comment representation returned by the API.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub id: i64,
    /// ID of the post this comment belongs to.
    pub post_id: i64,
    /// Optional parent comment.
    pub parent_comment_id: Option<i64>,
    /// Comment text.
    pub text: String,
    /// Author name.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            parent_comment_id: comment.parent_comment_id,
            text: comment.text,
            author: comment.author,
            created_at: comment.created_at,
        }
    }
}
