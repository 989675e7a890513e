//! System handlers: health banner

use axum::Json;

use crate::api::types::BannerResponse;

const ENDPOINTS: &[&str] = &[
    "POST /api/user",
    "POST /api/user/save",
    "GET /api/users",
    "POST /api/user/balance",
    "GET /api/cases",
    "POST /api/cases/save",
    "GET /api/items",
    "GET /api/stats",
];

/// Health banner with the list of routes
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        status: "✅ Server is running",
        message: "Case Bot Server is online",
        endpoints: ENDPOINTS,
    })
}
