use case_bot_server::{
    api::{self, AppState},
    config,
    core::{AdminPolicy, item},
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env file first so RUST_LOG from it applies
    let dotenv_result = dotenv();

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = dotenv_result {
        info!("No .env file loaded ({}), using process environment", e);
    }

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Open the datastore pool and ensure the schema
    let db = config::database::create_connection(&app_config.database)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ensured."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed the item catalog, if one is present
    if let Some(catalog) = config::catalog::load_optional_catalog(&app_config.catalog_path)? {
        item::seed_items(&db, &catalog.items)
            .await
            .inspect_err(|e| error!("Failed to seed item catalog: {}", e))?;
    }

    // 6. Serve
    let state = AppState::new(db, AdminPolicy::new(app_config.server.admin_id));
    api::server::run(&app_config.server, state).await
}
