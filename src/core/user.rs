//! User business logic - touch, save, balance adjustment and listing.
//!
//! All functions take the shared connection and return `Result` types. None of them
//! hold state between calls; each is one lookup followed by at most one write.

use crate::{
    entities::{Inventory, InventoryItem, User, user},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Identity fields sent by the bot each time it sees a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Full client-side state written by a save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProgress {
    pub balance: f64,
    pub opened_cases: i64,
    pub inventory: Vec<InventoryItem>,
}

/// Returns the incoming value only if it should replace the stored one.
///
/// Missing, `null` and empty strings all keep the stored value.
fn non_empty(incoming: Option<String>) -> Option<String> {
    incoming.filter(|value| !value.is_empty())
}

/// Finds a user by id.
pub async fn get_user(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Creates the user on first sight, otherwise refreshes `last_seen` and display fields.
///
/// New users start with zero balance, zero opened cases and an empty inventory; their
/// display fields are stored as given. For existing users each display field is only
/// overwritten when the incoming value is non-empty.
#[instrument(skip(db, profile), fields(user_id = profile.user_id))]
pub async fn touch_user(db: &DatabaseConnection, profile: UserProfile) -> Result<user::Model> {
    let now = Utc::now();

    let Some(existing) = get_user(db, profile.user_id).await? else {
        let user = user::ActiveModel {
            user_id: Set(profile.user_id),
            username: Set(profile.username),
            first_name: Set(profile.first_name),
            last_name: Set(profile.last_name),
            balance: Set(0.0),
            opened_cases: Set(0),
            inventory: Set(Inventory::default()),
            first_seen: Set(now),
            last_seen: Set(now),
        };
        let created = user.insert(db).await?;
        info!("Created new user");
        return Ok(created);
    };

    let mut user: user::ActiveModel = existing.into();
    user.last_seen = Set(now);
    if let Some(username) = non_empty(profile.username) {
        user.username = Set(Some(username));
    }
    if let Some(first_name) = non_empty(profile.first_name) {
        user.first_name = Set(Some(first_name));
    }
    if let Some(last_name) = non_empty(profile.last_name) {
        user.last_name = Set(Some(last_name));
    }

    let updated = user.update(db).await?;
    debug!("Refreshed existing user");
    Ok(updated)
}

/// Overwrites balance, opened-case counter and inventory of an existing user.
///
/// The inventory is replaced as a whole. Fails with [`Error::UserNotFound`] and
/// writes nothing when the user does not exist.
#[instrument(skip(db, progress), fields(balance = progress.balance, opened_cases = progress.opened_cases))]
pub async fn save_progress(
    db: &DatabaseConnection,
    user_id: i64,
    progress: UserProgress,
) -> Result<()> {
    let existing = get_user(db, user_id)
        .await?
        .ok_or(Error::UserNotFound { user_id })?;

    let mut user: user::ActiveModel = existing.into();
    user.balance = Set(progress.balance);
    user.opened_cases = Set(progress.opened_cases);
    user.inventory = Set(Inventory(progress.inventory));
    user.last_seen = Set(Utc::now());
    user.update(db).await?;

    debug!("Saved user progress");
    Ok(())
}

/// Sets the balance of an existing user. Does not touch `last_seen`.
#[instrument(skip(db))]
pub async fn set_balance(db: &DatabaseConnection, user_id: i64, new_balance: f64) -> Result<()> {
    let existing = get_user(db, user_id)
        .await?
        .ok_or(Error::UserNotFound { user_id })?;

    let mut user: user::ActiveModel = existing.into();
    user.balance = Set(new_balance);
    user.update(db).await?;

    info!("Balance updated by admin");
    Ok(())
}

/// Lists every user, most recently seen first.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_desc(user::Column::LastSeen)
        .all(db)
        .await
        .map_err(Into::into)
}
