//! Admin gate for catalog and balance mutations.
//!
//! This is not authentication: the caller simply states an admin id in the request
//! body and it is compared with the configured one.

use crate::errors::{Error, Result};
use serde_json::Value;

/// Holds the one admin id allowed to call admin routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminPolicy {
    admin_id: i64,
}

impl AdminPolicy {
    /// Creates a policy for the given admin id.
    #[must_use]
    pub const fn new(admin_id: i64) -> Self {
        Self { admin_id }
    }

    /// The configured admin id
    #[must_use]
    pub const fn admin_id(&self) -> i64 {
        self.admin_id
    }

    /// Passes only when `claimed` is a JSON number equal to the admin id.
    ///
    /// Missing values, strings, and any other JSON type are rejected with
    /// [`Error::Forbidden`].
    pub fn authorize(&self, claimed: Option<&Value>) -> Result<()> {
        let matches = match claimed {
            Some(Value::Number(number)) => {
                // 123456789.0 is the same number as 123456789 to a JSON client
                #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
                let same_float = number.as_f64() == Some(self.admin_id as f64);
                number.as_i64() == Some(self.admin_id) || same_float
            }
            _ => false,
        };

        if matches {
            Ok(())
        } else {
            tracing::warn!(claimed = ?claimed, "Rejected admin request");
            Err(Error::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const POLICY: AdminPolicy = AdminPolicy::new(123_456_789);

    #[test]
    fn test_matching_id_passes() {
        assert!(POLICY.authorize(Some(&json!(123_456_789))).is_ok());
        assert!(POLICY.authorize(Some(&json!(123_456_789.0))).is_ok());
    }

    #[test]
    fn test_everything_else_is_forbidden() {
        for claimed in [
            json!(1),
            json!("123456789"),
            json!(null),
            json!(true),
            json!([123_456_789]),
            json!(123_456_789.5),
        ] {
            assert!(
                matches!(POLICY.authorize(Some(&claimed)), Err(Error::Forbidden)),
                "{claimed} should be rejected"
            );
        }
        assert!(matches!(POLICY.authorize(None), Err(Error::Forbidden)));
    }
}
