//! Comment service for opine.

use std::sync::Arc;

use tracing::debug;

use crate::model::{Comment, NewComment};
use crate::store::{CommentStore, Pagination, PostStore};
use crate::{OpineError, Result};

/// Maximum length for comment text (in characters).
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Validate a comment text string.
fn validate_text(text: &str) -> Result<()> {
    let char_count = text.chars().count();
    if char_count > MAX_COMMENT_LENGTH {
        return Err(OpineError::Validation(format!(
            "comment text exceeds {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Service for comment operations.
///
/// Consults the post store for the comments-enabled gate before persisting
/// anything through the comment store.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    posts: Arc<dyn PostStore>,
}

impl CommentService {
    /// Create a new CommentService over the given stores.
    pub fn new(comments: Arc<dyn CommentStore>, posts: Arc<dyn PostStore>) -> Self {
        Self { comments, posts }
    }

    /// Create a comment on a post.
    ///
    /// Fails with `Validation` when the text exceeds [`MAX_COMMENT_LENGTH`]
    /// characters, `NotFound` when the post does not exist, and
    /// `CommentsNotAllowed` when the post has comments disabled. The parent
    /// reference is carried as-is; it is not checked against the comment
    /// store.
    pub async fn create_comment(
        &self,
        post_id: i64,
        parent_comment_id: Option<i64>,
        text: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Comment> {
        let text = text.into();
        validate_text(&text)?;

        let post = self.posts.get_by_id(post_id).await?;
        if !post.allow_comments {
            return Err(OpineError::CommentsNotAllowed);
        }

        let comment = self
            .comments
            .create(NewComment::new(post_id, parent_comment_id, text, author))
            .await?;
        debug!(comment_id = comment.id, post_id, "comment created");
        Ok(comment)
    }

    /// List a page of comments for a post, in creation order.
    ///
    /// Pass-through to the comment store. Defaulting of the pagination window
    /// (limit 10 when unspecified or zero, offset 0) is the caller's job at
    /// the request boundary.
    pub async fn comments_for_post(&self, post_id: i64, page: Pagination) -> Result<Vec<Comment>> {
        self.comments.list_by_post(post_id, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::PostService;
    use crate::store::{MemoryCommentStore, MemoryPostStore};

    fn services() -> (PostService, CommentService, Arc<MemoryCommentStore>) {
        let posts: Arc<MemoryPostStore> = Arc::new(MemoryPostStore::new());
        let comments = Arc::new(MemoryCommentStore::new());
        (
            PostService::new(posts.clone()),
            CommentService::new(comments.clone(), posts),
            comments,
        )
    }

    #[tokio::test]
    async fn test_create_comment() {
        let (post_service, comment_service, _) = services();
        let post = post_service
            .create_post("Test", "Text", "Author")
            .await
            .unwrap();

        let comment = comment_service
            .create_comment(post.id, None, "Test comment", "User")
            .await
            .unwrap();

        assert_eq!(comment.id, 1);
        assert_eq!(comment.post_id, post.id);
        assert_eq!(comment.text, "Test comment");
        assert_eq!(comment.parent_comment_id, None);
    }

    #[tokio::test]
    async fn test_create_comment_text_at_limit() {
        let (post_service, comment_service, _) = services();
        let post = post_service
            .create_post("Test", "Text", "Author")
            .await
            .unwrap();

        let text = "a".repeat(MAX_COMMENT_LENGTH);
        let comment = comment_service
            .create_comment(post.id, None, text, "User")
            .await
            .unwrap();
        assert_eq!(comment.text.len(), MAX_COMMENT_LENGTH);
    }

    #[tokio::test]
    async fn test_create_comment_exceeds_limit() {
        let (post_service, comment_service, comments) = services();
        let post = post_service
            .create_post("Test", "Text", "Author")
            .await
            .unwrap();

        let text = "a".repeat(MAX_COMMENT_LENGTH + 1);
        let err = comment_service
            .create_comment(post.id, None, text, "User")
            .await
            .unwrap_err();
        assert!(matches!(err, OpineError::Validation(_)));

        // Nothing was persisted
        let page = comments
            .list_by_post(post.id, Pagination::first(10))
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_length_limit_counts_characters_not_bytes() {
        let (post_service, comment_service, _) = services();
        let post = post_service
            .create_post("Test", "Text", "Author")
            .await
            .unwrap();

        // 2000 multibyte characters are within the limit
        let text = "й".repeat(MAX_COMMENT_LENGTH);
        assert!(text.len() > MAX_COMMENT_LENGTH);

        let result = comment_service
            .create_comment(post.id, None, text, "User")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_comment_missing_post() {
        let (_, comment_service, _) = services();
        let err = comment_service
            .create_comment(42, None, "hello", "User")
            .await
            .unwrap_err();
        assert!(matches!(err, OpineError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_comment_when_comments_disabled() {
        let (post_service, comment_service, _) = services();
        let post = post_service
            .create_post("Test", "Text", "Author")
            .await
            .unwrap();
        post_service.disable_comments(post.id).await.unwrap();

        let err = comment_service
            .create_comment(post.id, None, "Test comment", "User")
            .await
            .unwrap_err();
        assert!(matches!(err, OpineError::CommentsNotAllowed));
    }

    #[tokio::test]
    async fn test_parent_reference_is_not_validated() {
        let (post_service, comment_service, _) = services();
        let post = post_service
            .create_post("Test", "Text", "Author")
            .await
            .unwrap();

        // A parent that does not exist is accepted as-is
        let comment = comment_service
            .create_comment(post.id, Some(9999), "reply to nothing", "User")
            .await
            .unwrap();
        assert_eq!(comment.parent_comment_id, Some(9999));
    }

    #[tokio::test]
    async fn test_comments_for_post_passthrough() {
        let (post_service, comment_service, _) = services();
        let post = post_service
            .create_post("Test", "Text", "Author")
            .await
            .unwrap();
        for i in 0..3 {
            comment_service
                .create_comment(post.id, None, format!("comment {i}"), "User")
                .await
                .unwrap();
        }

        let page = comment_service
            .comments_for_post(post.id, Pagination::new(1, 10))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].text, "comment 1");
    }
}
