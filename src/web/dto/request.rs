//! Request DTOs for the opine API.

use serde::Deserialize;

use crate::store::Pagination;

/// Default page size when the client omits a limit or sends zero.
pub const DEFAULT_COMMENT_LIMIT: i64 = 10;

/// Post creation request.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    /// Post title.
    pub title: String,
    /// Post body text.
    pub text: String,
    /// Author name.
    pub author: String,
}

/// Comment creation request.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    /// Optional parent comment for reply threading.
    #[serde(default)]
    pub parent_comment_id: Option<i64>,
    /// Comment text.
    pub text: String,
    /// Author name.
    pub author: String,
}

/// Pagination query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    /// Maximum number of items to return.
    pub limit: Option<i64>,
    /// Number of items to skip.
    pub offset: Option<i64>,
}

impl PaginationQuery {
    /// Resolve the query into a pagination window.
    ///
    /// A missing, zero, or negative limit becomes the default of 10; a
    /// missing or negative offset becomes 0.
    pub fn to_pagination(&self) -> Pagination {
        let limit = match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_COMMENT_LIMIT,
        };
        let offset = self.offset.unwrap_or(0).max(0);
        Pagination::new(offset, limit)
    }
}
