use thiserror::Error;

/// Unified error type for the case bot server.
///
/// Variants are framework-agnostic; the HTTP status mapping lives in
/// [`crate::api::error`].
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong, including the offending key or path
        message: String,
    },

    /// Datastore failure. The message is echoed to clients verbatim.
    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),

    /// No user document exists for the requested id
    #[error("User not found")]
    UserNotFound {
        /// The id that was looked up
        user_id: i64,
    },

    /// The caller is not the configured admin
    #[error("Forbidden")]
    Forbidden,

    /// Request body could not be parsed into the expected shape
    #[error("{message}")]
    InvalidRequest {
        /// Parser or validation message
        message: String,
    },

    /// I/O error (listener bind, catalog file read)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::UserNotFound { user_id: 7 }.to_string(), "User not found");
        assert_eq!(Error::Forbidden.to_string(), "Forbidden");
        assert_eq!(
            Error::Config {
                message: "PORT is not a number".to_string()
            }
            .to_string(),
            "Configuration error: PORT is not a number"
        );
    }

    #[test]
    fn test_database_error_is_verbatim() {
        let err = Error::from(sea_orm::DbErr::Custom("disk full".to_string()));
        assert_eq!(err.to_string(), sea_orm::DbErr::Custom("disk full".to_string()).to_string());
    }
}
