//! Post service for opine.

use std::sync::Arc;

use tracing::debug;

use crate::model::{NewPost, Post};
use crate::store::PostStore;
use crate::Result;

/// Service for post operations.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    /// Create a new PostService over the given store.
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Create a post with comments enabled and the current timestamp.
    ///
    /// Returns the persisted post with its assigned ID.
    pub async fn create_post(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Post> {
        let post = self.store.create(NewPost::new(title, text, author)).await?;
        debug!(post_id = post.id, "post created");
        Ok(post)
    }

    /// List all posts in creation order.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.store.list_all().await
    }

    /// Turn comments off for a post. The flag is one-way; nothing re-enables it.
    ///
    /// This is a read-modify-write over two store calls with no atomicity
    /// across them. A comment whose allowed-check raced this call may still
    /// land after the flag flips; the outcome depends on timing.
    pub async fn disable_comments(&self, post_id: i64) -> Result<()> {
        let mut post = self.store.get_by_id(post_id).await?;
        post.allow_comments = false;
        self.store.update(&post).await?;
        debug!(post_id, "comments disabled");
        Ok(())
    }
}
