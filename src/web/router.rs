//! Router configuration for the opine API.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_comment, create_post, disable_comments, list_comments, list_posts, AppState,
};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id/disable-comments", post(disable_comments))
        .route(
            "/posts/:id/comments",
            get(list_comments).post(create_comment),
        );

    Router::new()
        .nest("/api", api_routes)
        .merge(create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryCommentStore, MemoryPostStore};

    #[test]
    fn test_create_router() {
        let state = Arc::new(AppState::new(
            Arc::new(MemoryPostStore::new()),
            Arc::new(MemoryCommentStore::new()),
        ));
        let _router = create_router(state);
        // Should not panic
    }
}
