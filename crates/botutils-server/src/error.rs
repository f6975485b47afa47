//! Rejections of `/relative-time` and their JSON body.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relative_time::RelativeTimeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const INVALID_DATE_FORMAT: &str =
    "Invalid date format. Use YYYY-MM-DD, YYYY-MM-DD HH:mm, or YYYY-MM-DD HH:mm:ss";
pub const INVALID_DATE_OR_TIMEZONE: &str = "Invalid date format or timezone.";

/// Rejections of the relative-time endpoint. All of them are `400 Bad Request`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The query string did not deserialize; the message is passed through.
    #[error("{0}")]
    InvalidQuery(String),
    #[error("{}", INVALID_DATE_FORMAT)]
    InvalidDateFormat,
    /// Anything else the computation refused. Detail is logged, not returned.
    #[error("{}", INVALID_DATE_OR_TIMEZONE)]
    InvalidInput(#[source] RelativeTimeError),
}

/// Body of every `400` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Invalid date format or timezone.")]
    pub error: String,
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl From<RelativeTimeError> for ApiError {
    fn from(err: RelativeTimeError) -> Self {
        if err.is_format() {
            ApiError::InvalidDateFormat
        } else {
            ApiError::InvalidInput(err)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;

        match &self {
            ApiError::InvalidInput(source) => tracing::warn!(
                error = %self,
                source = %source,
                status = status.as_u16(),
                "request rejected"
            ),
            other => tracing::warn!(
                error = %other,
                status = status.as_u16(),
                "request rejected"
            ),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
