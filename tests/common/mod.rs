//! Test helpers for API integration tests.

// Each integration test binary compiles its own copy of this module and
// uses a different subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use opine::store::{CommentStore, MemoryCommentStore, MemoryPostStore, PostStore};
use opine::web::{create_router, AppState};

/// Create a test server over the in-process store backend.
pub fn create_test_server() -> TestServer {
    let post_store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
    let comment_store: Arc<dyn CommentStore> = Arc::new(MemoryCommentStore::new());
    create_test_server_with(post_store, comment_store)
}

/// Create a test server over the given stores.
pub fn create_test_server_with(
    post_store: Arc<dyn PostStore>,
    comment_store: Arc<dyn CommentStore>,
) -> TestServer {
    let app_state = Arc::new(AppState::new(post_store, comment_store));
    let router = create_router(app_state);
    TestServer::new(router).expect("Failed to create test server")
}

/// Create a post through the API and return its ID.
pub async fn create_test_post(server: &TestServer, title: &str) -> i64 {
    let response = server
        .post("/api/posts")
        .json(&json!({
            "title": title,
            "text": "Test text",
            "author": "Author"
        }))
        .await;

    let body = response.json::<Value>();
    body["data"]["id"].as_i64().expect("post id in response")
}

/// Create a comment on a post through the API and return its ID.
pub async fn create_test_comment(server: &TestServer, post_id: i64, text: &str) -> i64 {
    let response = server
        .post(&format!("/api/posts/{post_id}/comments"))
        .json(&json!({
            "text": text,
            "author": "User"
        }))
        .await;

    let body = response.json::<Value>();
    body["data"]["id"].as_i64().expect("comment id in response")
}
