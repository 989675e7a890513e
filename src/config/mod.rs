//! Application configuration assembled from environment variables.
//!
//! Every setting has a default, so an empty environment yields a runnable server.
//! Values are read through a lookup function, which lets tests supply their own
//! variables without touching the process environment.

/// Item catalog loading from a TOML file
pub mod catalog;
/// Datastore connection settings, pool setup and schema creation
pub mod database;
/// HTTP listener and admin settings
pub mod server;

use crate::errors::{Error, Result};
use std::{fmt::Display, path::PathBuf, str::FromStr};
use tracing::{debug, info};

pub use catalog::{CatalogConfig, ItemConfig};
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Default location of the optional item catalog
pub const DEFAULT_CATALOG_PATH: &str = "items.toml";

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Datastore connection settings
    pub database: DatabaseConfig,
    /// Listener and admin settings
    pub server: ServerConfig,
    /// Where to look for the item catalog
    pub catalog_path: PathBuf,
}

impl AppConfig {
    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database: DatabaseConfig::from_lookup(&lookup)?,
            server: ServerConfig::from_lookup(&lookup)?,
            catalog_path: lookup("ITEMS_CATALOG_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from),
        })
    }
}

/// Loads the application configuration from the process environment.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config = AppConfig::from_lookup(|key| std::env::var(key).ok())?;
    info!(
        port = config.server.port,
        max_connections = config.database.max_connections,
        catalog = %config.catalog_path.display(),
        "Loaded application configuration"
    );
    Ok(config)
}

/// Reads `key` through `lookup` and parses it, falling back to `default` when unset.
pub(crate) fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| Error::Config {
            message: format!("{key}={raw:?} is invalid: {e}"),
        }),
        None => {
            debug!("{} not set, using default", key);
            Ok(default)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    /// Builds a lookup over a fixed set of variables.
    pub(crate) fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.admin_id, 123_456_789);
        assert_eq!(config.catalog_path, PathBuf::from("items.toml"));
    }

    #[test]
    fn test_parse_var_reports_key_on_failure() {
        let lookup = lookup_from(&[("PORT", "eighty")]);
        let err = parse_var::<u16, _>(&lookup, "PORT", 3000).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_catalog_path_override() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("ITEMS_CATALOG_PATH", "/etc/cases/items.toml")]))
                .unwrap();
        assert_eq!(
            config.catalog_path,
            PathBuf::from("/etc/cases/items.toml")
        );
    }
}
