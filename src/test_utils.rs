//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test users with sensible defaults.

use crate::{
    core::user::{self, UserProfile},
    entities::{self, InventoryItem},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all datastore tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a profile with only a username.
pub fn profile(user_id: i64, username: Option<&str>) -> UserProfile {
    UserProfile {
        user_id,
        username: username.map(str::to_string),
        ..Default::default()
    }
}

/// Creates a test user named `user<id>`.
pub async fn create_test_user(db: &DatabaseConnection, user_id: i64) -> Result<entities::UserModel> {
    user::touch_user(db, profile(user_id, Some(&format!("user{user_id}")))).await
}

/// Builds an inventory item with only id, name and price set.
pub fn sample_inventory_item(id: &str, name: &str, price: f64) -> InventoryItem {
    InventoryItem {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        price: Some(price),
        ..Default::default()
    }
}
