use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only store handle in the process: it is constructed at
/// startup and passed in, never reached through a global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bookit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
