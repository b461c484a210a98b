//! SQL store backend for opine.
//!
//! Both stores share one connection pool. Atomicity of a single statement is
//! delegated to the database engine; no multi-statement transaction wraps the
//! store operations.

use async_trait::async_trait;

use crate::db::DbPool;
use crate::model::{Comment, NewComment, NewPost, Post};
use crate::{OpineError, Result};

use super::{CommentStore, Pagination, PostStore};

/// SQL-backed post store.
pub struct SqlPostStore {
    pool: DbPool,
}

impl SqlPostStore {
    /// Create a new store over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for SqlPostStore {
    async fn create(&self, new_post: NewPost) -> Result<Post> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (title, text, allow_comments, author, created_at)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&new_post.title)
        .bind(&new_post.text)
        .bind(new_post.allow_comments)
        .bind(&new_post.author)
        .bind(new_post.created_at)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, text, allow_comments, author, created_at
             FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        post.ok_or_else(|| OpineError::NotFound("post".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, text, allow_comments, author, created_at
             FROM posts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn update(&self, post: &Post) -> Result<()> {
        let result = sqlx::query(
            "UPDATE posts
             SET title = $1, text = $2, allow_comments = $3, author = $4, created_at = $5
             WHERE id = $6",
        )
        .bind(&post.title)
        .bind(&post.text)
        .bind(post.allow_comments)
        .bind(&post.author)
        .bind(post.created_at)
        .bind(post.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(OpineError::NotFound("post".to_string()));
        }
        Ok(())
    }
}

/// SQL-backed comment store.
pub struct SqlCommentStore {
    pool: DbPool,
}

impl SqlCommentStore {
    /// Create a new store over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn get_by_id(&self, id: i64) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, parent_comment_id, text, author, created_at
             FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        comment.ok_or_else(|| OpineError::NotFound("comment".to_string()))
    }
}

#[async_trait]
impl CommentStore for SqlCommentStore {
    async fn create(&self, new_comment: NewComment) -> Result<Comment> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (post_id, parent_comment_id, text, author, created_at)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(new_comment.post_id)
        .bind(new_comment.parent_comment_id)
        .bind(&new_comment.text)
        .bind(&new_comment.author)
        .bind(new_comment.created_at)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    async fn list_by_post(&self, post_id: i64, page: Pagination) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, parent_comment_id, text, author, created_at
             FROM comments WHERE post_id = $1
             ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(post_id)
        .bind(page.limit.max(0))
        .bind(page.offset.max(0))
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
