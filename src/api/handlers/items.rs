//! Item handlers

use axum::{Json, extract::State};

use crate::api::AppState;
use crate::core::item;
use crate::entities::ItemModel;
use crate::errors::Result;

/// All standalone items.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemModel>>> {
    Ok(Json(item::list_items(&state.db).await?))
}
