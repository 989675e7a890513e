//! Case handlers: list, admin bulk save

use axum::{Json, extract::State};
use serde_json::Value;
use tracing::{Span, field, instrument};

use crate::api::AppState;
use crate::api::extract::{ApiJson, admin_body};
use crate::api::types::{SaveCasesRequest, SuccessResponse};
use crate::core::case;
use crate::entities::CaseModel;
use crate::errors::Result;

/// All cases in the catalog.
pub async fn list_cases(State(state): State<AppState>) -> Result<Json<Vec<CaseModel>>> {
    Ok(Json(case::list_cases(&state.db).await?))
}

/// Admin-only: upsert every case in the request.
#[instrument(skip_all, fields(count = field::Empty))]
pub async fn save_cases(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<SuccessResponse>> {
    let req: SaveCasesRequest = admin_body(&state.admin, body)?;
    Span::current().record("count", req.cases.len());
    case::save_cases(&state.db, req.cases).await?;
    Ok(Json(SuccessResponse::ok()))
}
