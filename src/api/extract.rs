//! JSON body extraction whose failures use the API error format.

use crate::core::AdminPolicy;
use crate::errors::{Error, Result};
use axum::extract::FromRequest;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Like [`axum::Json`], but a malformed body becomes a 400 with `{"error": ...}`
/// instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Checks `adminId` on a raw admin body, then reads the rest of it as `T`.
///
/// A caller who is not the admin gets 403 no matter what else the body holds,
/// so field errors are only reported to the admin.
pub fn admin_body<T: DeserializeOwned>(policy: &AdminPolicy, body: Value) -> Result<T> {
    policy.authorize(body.get("adminId"))?;
    serde_json::from_value(body).map_err(|e| Error::InvalidRequest {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    use super::*;
    use crate::api::types::SetBalanceRequest;
    use serde_json::json;

    const POLICY: AdminPolicy = AdminPolicy::new(42);

    #[test]
    fn test_non_admin_is_forbidden_before_fields_are_read() {
        for body in [
            json!({"adminId": 1}),
            json!({"userId": 1, "adminId": 1}),
            json!({"userId": 1, "newBalance": "5", "adminId": 1}),
            json!({"userId": 1, "newBalance": 5}),
            json!([42]),
        ] {
            let result = admin_body::<SetBalanceRequest>(&POLICY, body);
            assert!(matches!(result, Err(Error::Forbidden)));
        }
    }

    #[test]
    fn test_admin_with_bad_fields_is_invalid_request() {
        let result = admin_body::<SetBalanceRequest>(&POLICY, json!({"userId": 1, "adminId": 42}));
        match result {
            Err(Error::InvalidRequest { message }) => assert!(message.contains("newBalance")),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_admin_with_full_body_passes() {
        let req = admin_body::<SetBalanceRequest>(
            &POLICY,
            json!({"userId": 7, "newBalance": 12.5, "adminId": 42}),
        );
        assert!(matches!(req, Ok(SetBalanceRequest { user_id: 7, .. })));
    }
}
