use axum::http::StatusCode;
use thiserror::Error;

/// Failure of the key-value storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access storage file: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to encode storage payload: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Failure to produce a streak record from storage.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("stored streak record is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
