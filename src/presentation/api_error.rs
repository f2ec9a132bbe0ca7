// Errors surfaced to HTTP clients
use crate::domain::filter::FilterError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    BadFilter(#[from] FilterError),
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    #[error("no data for metric {0} under the selected filter")]
    NoData(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadFilter(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownMetric(_) | ApiError::NoData(_) => StatusCode::NOT_FOUND,
        };
        tracing::debug!("Rejecting request with {}: {}", status, self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
