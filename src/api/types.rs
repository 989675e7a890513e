//! HTTP API request/response types.
//!
//! JSON bodies use camelCase field names. Required fields are plain types and a
//! missing one rejects the request with 400; optional fields are `Option`.
//! Admin bodies carry no `adminId` field here: it is checked on the raw body first,
//! see [`crate::api::extract::admin_body`].

use crate::core::user::{UserProfile, UserProgress};
use crate::core::case::CaseData;
use crate::entities::InventoryItem;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `POST /api/user` body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchUserRequest {
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl From<TouchUserRequest> for UserProfile {
    fn from(req: TouchUserRequest) -> Self {
        Self {
            user_id: req.user_id,
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// `POST /api/user/save` body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserRequest {
    pub user_id: i64,
    pub balance: f64,
    pub opened_cases: i64,
    pub inventory: Vec<InventoryItem>,
}

impl SaveUserRequest {
    /// Splits the body into the target id and the state to write.
    #[must_use]
    pub fn into_parts(self) -> (i64, UserProgress) {
        (
            self.user_id,
            UserProgress {
                balance: self.balance,
                opened_cases: self.opened_cases,
                inventory: self.inventory,
            },
        )
    }
}

/// `POST /api/user/balance` body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBalanceRequest {
    pub user_id: i64,
    pub new_balance: f64,
}

/// `POST /api/cases/save` body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCasesRequest {
    /// Case contents keyed by case id, in the order the client sent them
    #[serde(deserialize_with = "ordered_entries")]
    pub cases: Vec<(String, CaseData)>,
}

/// Reads a JSON object as its `(key, value)` pairs without reordering them.
fn ordered_entries<'de, D>(deserializer: D) -> Result<Vec<(String, CaseData)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, CaseData)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of cases keyed by case id")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, CaseData>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

/// Body of successful mutations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    /// `{"success": true}`
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// `GET /` banner
#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub endpoints: &'static [&'static str],
}
