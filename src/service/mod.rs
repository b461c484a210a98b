//! Service layer for opine.
//!
//! Services sit between the HTTP boundary and the stores. They own the
//! business rules (creation defaults, the comments-enabled gate, comment
//! length validation) and delegate persistence to whichever store backend
//! was selected at startup.

mod comment;
mod post;

pub use comment::{CommentService, MAX_COMMENT_LENGTH};
pub use post::PostService;
