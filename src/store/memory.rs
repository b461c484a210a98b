//! In-process store backend for opine.
//!
//! Each store guards its records with a single mutex held for the full
//! duration of every operation, giving linearizable single-operation
//! semantics per store. There is no cross-store atomicity. The store
//! instance itself is the unit of shared state; there are no process-wide
//! singletons.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::model::{Comment, NewComment, NewPost, Post};
use crate::{OpineError, Result};

use super::{CommentStore, Pagination, PostStore};

/// Records plus the monotonic ID counter, guarded together.
///
/// A `BTreeMap` keyed by ID gives creation-order iteration, since IDs are
/// assigned in strictly increasing order.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn assign_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-process post store.
pub struct MemoryPostStore {
    inner: Mutex<Table<Post>>,
}

impl MemoryPostStore {
    /// Create an empty post store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Table::new()),
        }
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create(&self, new_post: NewPost) -> Result<Post> {
        let mut table = self.inner.lock().await;
        let id = table.assign_id();
        let post = Post {
            id,
            title: new_post.title,
            text: new_post.text,
            allow_comments: new_post.allow_comments,
            author: new_post.author,
            created_at: new_post.created_at,
        };
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn get_by_id(&self, id: i64) -> Result<Post> {
        let table = self.inner.lock().await;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| OpineError::NotFound("post".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Post>> {
        let table = self.inner.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, post: &Post) -> Result<()> {
        let mut table = self.inner.lock().await;
        if !table.rows.contains_key(&post.id) {
            return Err(OpineError::NotFound("post".to_string()));
        }
        table.rows.insert(post.id, post.clone());
        Ok(())
    }
}

/// In-process comment store.
pub struct MemoryCommentStore {
    inner: Mutex<Table<Comment>>,
}

impl MemoryCommentStore {
    /// Create an empty comment store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Table::new()),
        }
    }
}

impl Default for MemoryCommentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn create(&self, new_comment: NewComment) -> Result<Comment> {
        let mut table = self.inner.lock().await;
        let id = table.assign_id();
        let comment = Comment {
            id,
            post_id: new_comment.post_id,
            parent_comment_id: new_comment.parent_comment_id,
            text: new_comment.text,
            author: new_comment.author,
            created_at: new_comment.created_at,
        };
        table.rows.insert(id, comment.clone());
        Ok(comment)
    }

    async fn list_by_post(&self, post_id: i64, page: Pagination) -> Result<Vec<Comment>> {
        let table = self.inner.lock().await;
        let comments = table
            .rows
            .values()
            .filter(|c| c.post_id == post_id)
            .skip(page.offset.max(0) as usize)
            .take(page.limit.max(0) as usize)
            .cloned()
            .collect();
        Ok(comments)
    }
}
