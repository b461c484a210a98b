//! Service-level scenario tests.
//!
//! Exercises the post and comment services together over the in-process
//! backend, covering the full lifecycle and the pagination contract.

use std::sync::Arc;

use opine::store::{MemoryCommentStore, MemoryPostStore, Pagination};
use opine::{CommentService, OpineError, PostService};

fn services() -> (PostService, CommentService) {
    let posts = Arc::new(MemoryPostStore::new());
    let comments = Arc::new(MemoryCommentStore::new());
    (
        PostService::new(posts.clone()),
        CommentService::new(comments, posts),
    )
}

#[tokio::test]
async fn test_post_and_comment_lifecycle() {
    let (post_service, comment_service) = services();

    let post = post_service
        .create_post("Title", "Text", "Author")
        .await
        .unwrap();
    assert!(post.allow_comments);

    let comment = comment_service
        .create_comment(post.id, None, "hello", "User")
        .await
        .unwrap();
    assert_eq!(comment.post_id, post.id);

    post_service.disable_comments(post.id).await.unwrap();

    let err = comment_service
        .create_comment(post.id, None, "too late", "User")
        .await
        .unwrap_err();
    assert!(matches!(err, OpineError::CommentsNotAllowed));

    let page = comment_service
        .comments_for_post(post.id, Pagination::new(0, 10))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, comment.id);
}

#[tokio::test]
async fn test_pagination_over_fifteen_comments() {
    let (post_service, comment_service) = services();
    let post = post_service
        .create_post("Title", "Text", "Author")
        .await
        .unwrap();

    for i in 0..15 {
        comment_service
            .create_comment(post.id, None, format!("comment {i}"), "User")
            .await
            .unwrap();
    }

    let first = comment_service
        .comments_for_post(post.id, Pagination::new(0, 10))
        .await
        .unwrap();
    assert_eq!(first.len(), 10);

    let second = comment_service
        .comments_for_post(post.id, Pagination::new(10, 10))
        .await
        .unwrap();
    assert_eq!(second.len(), 5);

    let third = comment_service
        .comments_for_post(post.id, Pagination::new(20, 10))
        .await
        .unwrap();
    assert!(third.is_empty());
}

#[tokio::test]
async fn test_ids_are_strictly_increasing_per_entity() {
    let (post_service, comment_service) = services();

    let mut last_post_id = 0;
    for i in 0..5 {
        let post = post_service
            .create_post(format!("post {i}"), "text", "Author")
            .await
            .unwrap();
        assert!(post.id > last_post_id);
        last_post_id = post.id;
    }

    // Comment IDs count independently of post IDs
    let comment = comment_service
        .create_comment(1, None, "first comment", "User")
        .await
        .unwrap();
    assert_eq!(comment.id, 1);
}

#[tokio::test]
async fn test_failed_create_leaves_no_state() {
    let (post_service, comment_service) = services();
    let post = post_service
        .create_post("Title", "Text", "Author")
        .await
        .unwrap();

    let err = comment_service
        .create_comment(post.id, None, "a".repeat(2001), "User")
        .await
        .unwrap_err();
    assert!(matches!(err, OpineError::Validation(_)));

    let page = comment_service
        .comments_for_post(post.id, Pagination::new(0, 10))
        .await
        .unwrap();
    assert!(page.is_empty());

    // The next successful comment still gets the first ID
    let comment = comment_service
        .create_comment(post.id, None, "ok", "User")
        .await
        .unwrap();
    assert_eq!(comment.id, 1);
}

#[tokio::test]
async fn test_concurrent_comments_on_one_post() {
    let (post_service, comment_service) = services();
    let post = post_service
        .create_post("Title", "Text", "Author")
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..10 {
        let service = comment_service.clone();
        let post_id = post.id;
        handles.push(tokio::spawn(async move {
            service
                .create_comment(post_id, None, format!("comment {i}"), "User")
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let page = comment_service
        .comments_for_post(post.id, Pagination::new(0, 20))
        .await
        .unwrap();
    assert_eq!(page.len(), 10);

    // All IDs are unique
    let mut ids: Vec<i64> = page.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}
