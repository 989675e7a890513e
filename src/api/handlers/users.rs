//! User handlers: touch, save, list, admin balance

use axum::{Json, extract::State};
use serde_json::Value;
use tracing::{Span, field, instrument};

use crate::api::AppState;
use crate::api::extract::{ApiJson, admin_body};
use crate::api::types::{SaveUserRequest, SetBalanceRequest, SuccessResponse, TouchUserRequest};
use crate::core::user;
use crate::entities::UserModel;
use crate::errors::Result;

/// Creates the user on first sight, otherwise refreshes it; returns the full document.
#[instrument(skip_all, fields(user_id = req.user_id))]
pub async fn touch_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TouchUserRequest>,
) -> Result<Json<UserModel>> {
    let user = user::touch_user(&state.db, req.into()).await?;
    Ok(Json(user))
}

/// Overwrites balance, opened cases and inventory.
#[instrument(skip_all, fields(user_id = req.user_id))]
pub async fn save_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SaveUserRequest>,
) -> Result<Json<SuccessResponse>> {
    let (user_id, progress) = req.into_parts();
    user::save_progress(&state.db, user_id, progress).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// All users, most recently seen first.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserModel>>> {
    Ok(Json(user::list_users(&state.db).await?))
}

/// Admin-only: set a user's balance.
#[instrument(skip_all, fields(user_id = field::Empty))]
pub async fn set_balance(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<SuccessResponse>> {
    let req: SetBalanceRequest = admin_body(&state.admin, body)?;
    Span::current().record("user_id", req.user_id);
    user::set_balance(&state.db, req.user_id, req.new_balance).await?;
    Ok(Json(SuccessResponse::ok()))
}
