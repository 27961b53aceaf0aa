use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::storage::StorageError;
use crate::shared::types::{ErrorResponse, FieldError};

/// Message returned to clients when a write path fails
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// `message` is what the client sees; `source` is only logged
    #[error("Storage error: {source}")]
    Storage {
        message: String,
        #[source]
        source: StorageError,
    },
}

impl AppError {
    /// Wrap a storage failure with the message the caller should see
    pub fn storage(message: impl Into<String>) -> impl FnOnce(StorageError) -> AppError {
        let message = message.into();
        move |source| AppError::Storage { message, source }
    }
}

impl From<StorageError> for AppError {
    fn from(source: StorageError) -> Self {
        AppError::Storage {
            message: GENERIC_ERROR_MESSAGE.to_string(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Storage { message, source } => {
                tracing::error!("Storage error: {:?}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
        };

        let body = Json(ErrorResponse::new(message, errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let error = AppError::Validation(vec![
            FieldError::new("name", "Name must be at least 2 characters"),
            FieldError::new("phone", "Enter a valid 10-digit mobile number"),
        ]);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
        assert_eq!(body["errors"][1]["field"], "phone");
    }

    #[tokio::test]
    async fn test_storage_error_hides_internal_detail() {
        let source = StorageError::Io {
            path: PathBuf::from("/srv/secret/farmer-leads.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let response = AppError::from(source).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], GENERIC_ERROR_MESSAGE);
        assert!(body.get("errors").is_none());
        assert!(!body.to_string().contains("/srv/secret"));
    }

    #[tokio::test]
    async fn test_storage_error_with_custom_message() {
        let source = StorageError::Io {
            path: PathBuf::from("farmer-leads.json"),
            source: std::io::Error::other("disk gone"),
        };

        let response = AppError::storage("Failed to fetch leads")(source).into_response();
        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to fetch leads");
        assert!(!body.to_string().contains("disk gone"));
    }
}
