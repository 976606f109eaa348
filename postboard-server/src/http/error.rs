//! API error types with IntoResponse
//!
//! Store errors become JSON bodies of the form `{"error": ...}`; missing
//! creation fields additionally carry `"fields": [...]`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use postboard_core::{InvalidParameter, StoreError};
use serde_json::json;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required creation fields missing (400)
    MissingFields { fields: Vec<&'static str> },

    /// Unsupported sort field or direction (400)
    InvalidParameter(InvalidParameter),

    /// No post with this id (404)
    NotFound { id: Option<u64> },

    /// Body could not be read or parsed (400)
    BadRequest { message: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MissingFields { .. } | Self::InvalidParameter(_) | Self::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::MissingFields { fields } => json!({
                "error": "Missing fields",
                "fields": fields
            }),
            Self::InvalidParameter(InvalidParameter::SortField { value }) => {
                tracing::debug!(%value, "rejected sort field");
                json!({ "error": "Invalid sort field. Use \"title\" or \"content\"." })
            }
            Self::InvalidParameter(InvalidParameter::Direction { value }) => {
                tracing::debug!(%value, "rejected sort direction");
                json!({ "error": "Invalid direction. Use \"asc\" or \"desc\"." })
            }
            Self::NotFound { id } => {
                tracing::warn!(?id, "post not found");
                json!({ "error": "Post not found" })
            }
            Self::BadRequest { message } => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation { missing } => Self::MissingFields { fields: missing },
            StoreError::InvalidParameter(param) => Self::InvalidParameter(param),
            StoreError::NotFound { id } => Self::NotFound { id: Some(id) },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::BadRequest {
            message: format!("Invalid JSON body: {}", e),
        }
    }
}
