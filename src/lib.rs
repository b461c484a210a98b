//! opine - a small posts-and-comments service.
//!
//! Posts and threaded comments exposed through a service layer over an
//! interchangeable storage abstraction: an in-process store and a SQL store
//! (SQLite by default, PostgreSQL behind a feature flag).

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod web;

pub use config::{Config, StorageBackend};
pub use db::Database;
pub use error::{OpineError, Result};
pub use model::{Comment, NewComment, NewPost, Post};
pub use service::{CommentService, PostService, MAX_COMMENT_LENGTH};
pub use store::{
    CommentStore, MemoryCommentStore, MemoryPostStore, Pagination, PostStore, SqlCommentStore,
    SqlPostStore,
};
pub use web::{AppState, WebServer};
