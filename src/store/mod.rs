//! Storage abstraction for opine.
//!
//! Each entity type has its own store trait with two interchangeable
//! implementations: an in-process store ([`MemoryPostStore`],
//! [`MemoryCommentStore`]) and a SQL store ([`SqlPostStore`],
//! [`SqlCommentStore`]). The backend is selected once at startup; callers
//! only ever see the trait objects.

mod memory;
mod sql;

pub use memory::{MemoryCommentStore, MemoryPostStore};
pub use sql::{SqlCommentStore, SqlPostStore};

use async_trait::async_trait;

use crate::model::{Comment, NewComment, NewPost, Post};
use crate::Result;

/// Pagination window for listing comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination {
    /// Number of items to skip (zero-based).
    pub offset: i64,
    /// Maximum number of items to return.
    pub limit: i64,
}

impl Pagination {
    /// Create new pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Create pagination for the first page with the given limit.
    pub fn first(limit: i64) -> Self {
        Self { offset: 0, limit }
    }
}

/// Store for post persistence, polymorphic over backends.
///
/// IDs are assigned by the store: positive, unique, strictly increasing in
/// assignment order, starting at 1, never reused.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post and return it with its assigned ID.
    async fn create(&self, new_post: NewPost) -> Result<Post>;

    /// Get a post by ID, or fail with `NotFound`.
    async fn get_by_id(&self, id: i64) -> Result<Post>;

    /// List all posts in creation order.
    async fn list_all(&self) -> Result<Vec<Post>>;

    /// Replace the stored post with the matching ID with the given full
    /// record, or fail with `NotFound`.
    ///
    /// This is a whole-record replace, not a patch. Callers read, modify,
    /// and write back the full post.
    async fn update(&self, post: &Post) -> Result<()>;
}

/// Store for comment persistence, polymorphic over backends.
///
/// No referential check against the post store happens here; the comment
/// service owns that responsibility.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Persist a new comment and return it with its assigned ID.
    async fn create(&self, new_comment: NewComment) -> Result<Comment>;

    /// List a page of comments for a post, in creation order.
    ///
    /// The offset is zero-based. An offset at or past the number of matching
    /// comments yields an empty vec, not an error; otherwise up to `limit`
    /// comments are returned starting at `offset`, truncated if fewer remain.
    async fn list_by_post(&self, post_id: i64, page: Pagination) -> Result<Vec<Comment>>;
}
