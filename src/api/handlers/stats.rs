//! Stats handler

use axum::{Json, extract::State};

use crate::api::AppState;
use crate::core::stats::{self, Stats};
use crate::errors::Result;

/// User count, summed counters and the top ten users by opened cases.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>> {
    Ok(Json(stats::compute_stats(&state.db).await?))
}
