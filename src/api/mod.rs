//! HTTP API layer.
//!
//! Axum router, typed request/response bodies and the mapping from [`crate::errors::Error`]
//! to JSON error responses. Handlers are thin: each one parses its body, calls one
//! function from [`crate::core`] and serializes the result.

/// Error to HTTP response mapping
pub mod error;
/// JSON body extractor with JSON rejections
pub mod extract;
/// Route handlers
pub mod handlers;
/// Router construction
pub mod routes;
/// Listener and serve loop
pub mod server;
/// Request and response bodies
pub mod types;

use crate::core::AdminPolicy;
use sea_orm::DatabaseConnection;

pub use routes::build_router;

/// Shared state handed to every handler.
///
/// Cloning is cheap: the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Datastore pool shared by all requests
    pub db: DatabaseConnection,
    /// Gate for admin-only routes
    pub admin: AdminPolicy,
}

impl AppState {
    /// Creates the state from an open pool and the admin policy.
    #[must_use]
    pub fn new(db: DatabaseConnection, admin: AdminPolicy) -> Self {
        Self { db, admin }
    }
}
