//! Aggregate statistics over all users.

use crate::{
    entities::{User, user},
    errors::Result,
};
use sea_orm::{
    FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect, prelude::*,
};
use serde::Serialize;
use tracing::instrument;

/// How many users the leaderboard shows
pub const TOP_USERS_LIMIT: u64 = 10;

/// Leaderboard row: a user projected to its public fields.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    pub opened_cases: i64,
    pub balance: f64,
}

/// Totals across every user plus the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_users: u64,
    pub total_opened_cases: i64,
    /// Sum of all balances
    pub total_stars: f64,
    pub top_users: Vec<TopUser>,
}

/// Computes user count, summed counters and the top users by opened cases.
///
/// Sums over an empty table come back as `NULL` and are reported as zero.
#[instrument(skip(db))]
pub async fn compute_stats(db: &DatabaseConnection) -> Result<Stats> {
    let total_users = User::find().count(db).await?;

    let total_opened_cases: Option<i64> = User::find()
        .select_only()
        .column_as(user::Column::OpenedCases.sum(), "total")
        .into_tuple::<Option<i64>>()
        .one(db)
        .await?
        .flatten();

    let total_stars: Option<f64> = User::find()
        .select_only()
        .column_as(user::Column::Balance.sum(), "total")
        .into_tuple::<Option<f64>>()
        .one(db)
        .await?
        .flatten();

    let top_users = User::find()
        .select_only()
        .columns([
            user::Column::Username,
            user::Column::FirstName,
            user::Column::OpenedCases,
            user::Column::Balance,
        ])
        .order_by_desc(user::Column::OpenedCases)
        .limit(TOP_USERS_LIMIT)
        .into_model::<TopUser>()
        .all(db)
        .await?;

    Ok(Stats {
        total_users,
        total_opened_cases: total_opened_cases.unwrap_or(0),
        total_stars: total_stars.unwrap_or(0.0),
        top_users,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::user::{UserProgress, save_progress};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_stats_empty() -> Result<()> {
        let db = setup_test_db().await?;

        let stats = compute_stats(&db).await?;
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.total_opened_cases, 0);
        assert_eq!(stats.total_stars, 0.0);
        assert!(stats.top_users.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_stats_totals_and_leaderboard() -> Result<()> {
        let db = setup_test_db().await?;

        // Twelve users; user n has opened n cases and holds n * 1.5 stars
        for n in 1..=12_i64 {
            create_test_user(&db, n).await?;
            #[allow(clippy::cast_precision_loss)]
            let balance = n as f64 * 1.5;
            save_progress(
                &db,
                n,
                UserProgress {
                    balance,
                    opened_cases: n,
                    inventory: Vec::new(),
                },
            )
            .await?;
        }

        let stats = compute_stats(&db).await?;
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.total_opened_cases, 78);
        assert_eq!(stats.total_stars, 117.0);
        assert_eq!(stats.top_users.len(), 10);
        assert_eq!(stats.top_users[0].opened_cases, 12);
        assert_eq!(stats.top_users[0].username.as_deref(), Some("user12"));
        assert_eq!(stats.top_users[9].opened_cases, 3);
        assert!(
            stats
                .top_users
                .windows(2)
                .all(|pair| pair[0].opened_cases >= pair[1].opened_cases)
        );
        Ok(())
    }

    #[test]
    fn test_top_user_projection_shape() {
        let row = TopUser {
            username: Some("a".to_string()),
            first_name: None,
            opened_cases: 2,
            balance: 50.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["username", "openedCases", "balance"]);

        let anonymous = TopUser {
            username: None,
            ..row
        };
        let json = serde_json::to_value(&anonymous).unwrap();
        assert!(json.get("username").is_none());
        assert!(json.get("firstName").is_none());
    }
}
