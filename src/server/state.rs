//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds the database pool and the request-time settings
//! that services need.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::config::NameMatching;

/// Application state containing shared resources.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// token is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Bearer token required on mutating endpoints, if configured.
    pub api_token: Option<Arc<str>>,

    /// Name comparison mode used by the uniqueness checks.
    pub name_matching: NameMatching,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        api_token: Option<String>,
        name_matching: NameMatching,
    ) -> Self {
        Self {
            db,
            api_token: api_token.map(Arc::from),
            name_matching,
        }
    }
}
