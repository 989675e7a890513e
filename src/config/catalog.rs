//! Item catalog loading from a TOML file.
//!
//! The catalog is the out-of-band source of the standalone `items` collection. Each
//! `[[items]]` table becomes one item document, upserted by `item_id` at startup.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Structure of the whole catalog file
#[derive(Debug, Deserialize, Default)]
pub struct CatalogConfig {
    /// Items to seed
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Configuration for a single catalog item
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ItemConfig {
    /// Unique catalog key
    pub item_id: String,
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub chance: Option<f64>,
}

/// Loads the item catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - An item is missing its `item_id`
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let path = path.as_ref();
    debug!("Loading item catalog from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog file {}: {e}", path.display()),
    })
}

/// Loads the catalog if the file exists, returning `None` otherwise.
pub fn load_optional_catalog<P: AsRef<Path>>(path: P) -> Result<Option<CatalogConfig>> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No item catalog at {}, skipping seed", path.display());
        return Ok(None);
    }
    load_catalog(path).map(Some)
}
