//! Shared application state for the server.

use std::path::PathBuf;

/// Shared application state.
///
/// Carries only the store path: each handler opens its own connection,
/// scoped to the request and released on every exit path when dropped.
#[derive(Clone)]
pub struct AppState {
    /// Path to the SQLite store file
    pub db_path: PathBuf,
}
