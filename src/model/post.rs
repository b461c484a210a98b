//! Post model for opine.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Post entity representing a top-level content item.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID, assigned by the store.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub text: String,
    /// Whether comments can be created on this post.
    ///
    /// Defaults to true at creation. The only mutation the service layer
    /// performs is the one-way true-to-false toggle; nothing sets it back.
    pub allow_comments: bool,
    /// Author name.
    pub author: String,
    /// Creation timestamp, set once at creation.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new post.
///
/// The ID is assigned by the store when the record is persisted.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body text.
    pub text: String,
    /// Whether comments are allowed (defaults to true).
    pub allow_comments: bool,
    /// Author name.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post payload with comments enabled and the current time.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            allow_comments: true,
            author: author.into(),
            created_at: Utc::now(),
        }
    }
}
