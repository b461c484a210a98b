//! Request handlers for the opine API.

mod comment;
mod post;

pub use comment::{create_comment, list_comments};
pub use post::{create_post, disable_comments, list_posts};

use std::sync::Arc;

use crate::service::{CommentService, PostService};
use crate::store::{CommentStore, PostStore};

/// Shared application state for the web handlers.
pub struct AppState {
    /// Post service.
    pub posts: PostService,
    /// Comment service.
    pub comments: CommentService,
}

impl AppState {
    /// Create the application state over the selected store backends.
    ///
    /// The comment service shares the post store so it can enforce the
    /// comments-enabled gate.
    pub fn new(post_store: Arc<dyn PostStore>, comment_store: Arc<dyn CommentStore>) -> Self {
        Self {
            posts: PostService::new(post_store.clone()),
            comments: CommentService::new(comment_store, post_store),
        }
    }
}
