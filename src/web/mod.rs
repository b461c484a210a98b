//! HTTP boundary for opine.
//!
//! A thin axum layer over the service layer: request parsing, route
//! dispatch, and mapping of domain errors to response codes. No business
//! rules live here beyond pagination defaulting.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorCode};
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
