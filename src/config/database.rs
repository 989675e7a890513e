//! Database configuration module.
//!
//! This module handles the datastore connection pool and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.

use crate::config::parse_var;
use crate::entities::{Case, Item, User};
use crate::errors::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

/// Datastore used when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/case_bot.sqlite?mode=rwc";

/// Connection pool settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Connection URI
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// Timeout for establishing a new connection
    pub connect_timeout: Duration,
    /// Idle connections above the minimum are closed after this long
    pub idle_timeout: Duration,
    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Reads `DATABASE_URL` and the `DB_*` pool variables.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_var(lookup, "DB_MAX_CONNECTIONS", 10)?,
            min_connections: parse_var(lookup, "DB_MIN_CONNECTIONS", 5)?,
            connect_timeout: Duration::from_secs(parse_var(lookup, "DB_CONNECT_TIMEOUT_SECS", 30)?),
            idle_timeout: Duration::from_secs(parse_var(lookup, "DB_IDLE_TIMEOUT_SECS", 30)?),
            acquire_timeout: Duration::from_secs(parse_var(lookup, "DB_ACQUIRE_TIMEOUT_SECS", 30)?),
        })
    }

    /// Translates the settings into `SeaORM` connect options.
    #[must_use]
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .connect_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(false);
        options
    }
}

/// Opens the shared connection pool.
#[instrument(skip(config), fields(max = config.max_connections))]
pub async fn create_connection(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    ensure_sqlite_parent_dir(&config.url)?;
    let db = Database::connect(config.connect_options()).await?;
    info!("Database pool opened");
    Ok(db)
}

/// `SQLite` creates the file but not its directory.
fn ensure_sqlite_parent_dir(url: &str) -> Result<()> {
    let Some(rest) = url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let file = rest.split('?').next().unwrap_or_default();
    if let Some(parent) = Path::new(file).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Creates the `users`, `cases` and `items` tables if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    create_table_for(db, &schema, User).await?;
    create_table_for(db, &schema, Case).await?;
    create_table_for(db, &schema, Item).await?;

    Ok(())
}

async fn create_table_for<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(db.get_database_backend().build(&statement))
        .await?;
    Ok(())
}
