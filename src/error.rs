use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use thiserror::Error;

// Failure inside a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no todo ids left to assign")]
    IdsExhausted,
}

// Outcome of a todo operation that did not succeed
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo with ID: {0} not found")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TodoError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        TodoError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for TodoError {
    fn from(rejection: PathRejection) -> Self {
        TodoError::Validation(rejection.body_text())
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let error_response = match &self {
            TodoError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                json!({
                    "status": "error",
                    "message": "Something bad happened while accessing todo items",
                })
            }
            _ => json!({
                "status": "fail",
                "message": self.to_string(),
            }),
        };
        (status, Json(error_response)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
