//! Request and response DTOs for the opine API.

mod request;
mod response;

pub use request::{CreateCommentRequest, CreatePostRequest, PaginationQuery, DEFAULT_COMMENT_LIMIT};
pub use response::{ApiResponse, CommentResponse, PostResponse};
