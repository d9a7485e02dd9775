//! HTTP server for the planner daemon.
//!
//! Provides the REST API for:
//! - Student accounts (create, login, update)
//! - Course catalog browsing and search
//! - Academic plan CRUD
//! - Prerequisite graph construction

mod error;
mod http;
mod state;

pub use error::ApiError;
pub use http::create_router;
pub use state::AppState;
