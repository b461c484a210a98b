//! Comment handlers for the opine API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::web::dto::{ApiResponse, CommentResponse, CreateCommentRequest, PaginationQuery};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/posts/:id/comments - Create a comment on a post.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponse>>), ApiError> {
    let comment = state
        .comments
        .create_comment(post_id, req.parent_comment_id, req.text, req.author)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(CommentResponse::from(comment))),
    ))
}

/// GET /api/posts/:id/comments - List a page of comments for a post.
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<CommentResponse>>>, ApiError> {
    let comments = state
        .comments
        .comments_for_post(post_id, pagination.to_pagination())
        .await?;

    let responses: Vec<CommentResponse> =
        comments.into_iter().map(CommentResponse::from).collect();
    Ok(Json(ApiResponse::new(responses)))
}
