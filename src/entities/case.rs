//! Case entity - A catalog case with its reward pool.
//!
//! Cases are keyed by a client-chosen string id and are written only through the
//! admin bulk save, which replaces every field. Drop chances are stored as plain data;
//! nothing here checks that they sum to one.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Case database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cases")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Catalog key
    #[sea_orm(primary_key, auto_increment = false)]
    pub case_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Price to open the case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display color used by the frontend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Reward pool
    #[sea_orm(column_type = "Json")]
    pub items: CaseItems,
    /// Refreshed on every write
    pub updated_at: DateTimeUtc,
}

/// `Case` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Ordered reward pool of a case, stored as one JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct CaseItems(pub Vec<CaseItem>);

/// One entry of a case's reward pool
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseItem {
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
    /// Drop weight, stored as given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<f64>,
}
