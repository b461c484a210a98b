//! Domain models for opine.

mod comment;
mod post;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post};
