use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::RedundancyError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request failures of the upload endpoint, rendered as `{"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No file provided")]
    MissingFile,
    #[error("Empty filename")]
    EmptyFilename,
    #[error("Failed to read multipart: {message}")]
    Multipart { status: StatusCode, message: String },
    #[error(transparent)]
    Redundancy(#[from] RedundancyError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::EmptyFilename => StatusCode::BAD_REQUEST,
            ApiError::Multipart { status, .. } => *status,
            ApiError::Redundancy(RedundancyError::Embedding(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Redundancy(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn public_message(&self) -> String {
        if self.status().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Multipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Redundancy check failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Rejected upload");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
