//! User entity - A bot user with balance, counters and an inventory snapshot.
//!
//! Users are keyed by their external messaging-platform account id. The inventory is
//! stored as a single JSON column and is always replaced as a whole, never merged.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// External account id, unique per user
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    /// Display fields copied from the messaging platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// In-game currency
    pub balance: f64,
    /// Number of cases this user has opened
    pub opened_cases: i64,
    /// Items won so far, in the order the client saved them
    #[sea_orm(column_type = "Json")]
    pub inventory: Inventory,
    /// Set once on creation
    pub first_seen: DateTimeUtc,
    /// Refreshed on every touch and save
    pub last_seen: DateTimeUtc,
}

/// `User` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Ordered inventory snapshot, stored as one JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Inventory(pub Vec<InventoryItem>);

impl From<Vec<InventoryItem>> for Inventory {
    fn from(items: Vec<InventoryItem>) -> Self {
        Self(items)
    }
}

/// A single won item. Contents are not validated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// When the item was won. Accepts RFC 3339 or epoch milliseconds.
    #[serde(
        default,
        with = "flexible_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

mod flexible_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(DateTime<Utc>),
    }

    #[allow(clippy::ref_option)] // signature required by `#[serde(with)]`
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => {
                serializer.serialize_some(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Text(ts)) => Ok(Some(ts)),
            Some(Raw::Millis(ms)) => DateTime::from_timestamp_millis(ms)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp {ms} is out of range"))),
        }
    }
}
