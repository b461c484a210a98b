//! Comment model for opine.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Comment entity attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID, assigned by the store.
    pub id: i64,
    /// ID of the post this comment belongs to.
    pub post_id: i64,
    /// Optional parent comment for reply threading.
    ///
    /// This is a plain lookup key. It is not validated against the comment
    /// store, neither for existence nor for same-post membership.
    pub parent_comment_id: Option<i64>,
    /// Comment text, bounded at [`MAX_COMMENT_LENGTH`] characters by the
    /// comment service.
    ///
    /// [`MAX_COMMENT_LENGTH`]: crate::service::MAX_COMMENT_LENGTH
    pub text: String,
    /// Author name.
    pub author: String,
    /// Creation timestamp, set once at creation.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new comment.
///
/// The ID is assigned by the store when the record is persisted.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// ID of the post this comment belongs to.
    pub post_id: i64,
    /// Optional parent comment for reply threading.
    pub parent_comment_id: Option<i64>,
    /// Comment text.
    pub text: String,
    /// Author name.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// Create a new comment payload stamped with the current time.
    pub fn new(
        post_id: i64,
        parent_comment_id: Option<i64>,
        text: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            post_id,
            parent_comment_id,
            text: text.into(),
            author: author.into(),
            created_at: Utc::now(),
        }
    }
}
