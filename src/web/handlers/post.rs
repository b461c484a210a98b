//! Post handlers for the opine API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::web::dto::{ApiResponse, CreatePostRequest, PostResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/posts - Create a post.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), ApiError> {
    let post = state
        .posts
        .create_post(req.title, req.text, req.author)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(PostResponse::from(post))),
    ))
}

/// GET /api/posts - List all posts.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    let posts = state.posts.list_posts().await?;

    let responses: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// POST /api/posts/:id/disable-comments - Turn comments off for a post.
pub async fn disable_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.posts.disable_comments(post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
