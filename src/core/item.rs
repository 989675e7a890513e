//! Item catalog logic - listing and startup seeding.

use crate::{
    config::ItemConfig,
    entities::{Item, item},
    errors::Result,
};
use sea_orm::{Set, prelude::*, sea_query::OnConflict};
use tracing::{info, instrument};

/// Lists every standalone item.
pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<item::Model>> {
    Item::find().all(db).await.map_err(Into::into)
}

/// Upserts each catalog item by `item_id`, replacing all fields.
///
/// Returns the number of items written.
#[instrument(skip(db, items), fields(count = items.len()))]
pub async fn seed_items(db: &DatabaseConnection, items: &[ItemConfig]) -> Result<usize> {
    for config in items {
        let model = item::ActiveModel {
            item_id: Set(config.item_id.clone()),
            name: Set(config.name.clone()),
            emoji: Set(config.emoji.clone()),
            image: Set(config.image.clone()),
            price: Set(config.price),
            chance: Set(config.chance),
        };

        Item::insert(model)
            .on_conflict(
                OnConflict::column(item::Column::ItemId)
                    .update_columns([
                        item::Column::Name,
                        item::Column::Emoji,
                        item::Column::Image,
                        item::Column::Price,
                        item::Column::Chance,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }

    info!("Seeded {} catalog items", items.len());
    Ok(items.len())
}
