//! HTTP API Route Definitions
//!
//! Paths and methods are fixed by the bot frontend and admin panel that call them.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::AppState;
use super::handlers;

/// Create the API router with all routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(handlers::banner))
        // Users
        .route("/api/user", post(handlers::touch_user))
        .route("/api/user/save", post(handlers::save_user))
        .route("/api/user/balance", post(handlers::set_balance))
        .route("/api/users", get(handlers::list_users))
        // Catalog
        .route("/api/cases", get(handlers::list_cases))
        .route("/api/cases/save", post(handlers::save_cases))
        .route("/api/items", get(handlers::list_items))
        // Stats
        .route("/api/stats", get(handlers::get_stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
