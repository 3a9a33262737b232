use thiserror::Error;

/// Store-level errors for menu data access.
///
/// There is exactly one failure kind: the menu could not be read. Connection
/// failures, authentication failures, and query failures all collapse into
/// it; callers never see cause-level detail beyond the logged message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("menu data unavailable: {message}")]
    DataUnavailable { message: String },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::DataUnavailable {
            message: err.to_string(),
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
