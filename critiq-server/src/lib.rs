//! HTTP server and embedded web UI for critiq
//!
//! Exposes the review workflow over a small JSON API and serves the
//! single-page UI at the root path.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::Server;
pub use state::AppState;
