//! postboard-server: HTTP server for the post store
//!
//! Exposes list, sorted list, create, update, delete, and search over
//! posts as a JSON API, with permissive CORS by default.

pub mod config;
pub mod http;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use http::{build_router, run_server, ApiError, ServerError};
pub use state::AppState;
