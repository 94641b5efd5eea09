use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use crate::upstream::UpstreamError;
use log::error;
use serde_json::json;

/// Gateway failure as the client sees it: a status and a JSON `error` message.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl ApiError {
    pub fn missing(parameter: &str) -> Self {
        ApiError::BadRequest(format!("missing {parameter} parameter"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::InternalError(msg) | ApiError::BadRequest(msg) => msg,
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Query parameter that must be present and non-empty.
pub fn required(value: Option<String>, parameter: &str) -> ApiResult<String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::missing(parameter))
}

impl From<UpstreamError> for ApiError {
    fn from(error: UpstreamError) -> Self {
        error!("upstream request failed: {error}");
        ApiError::InternalError(String::from("failed to fetch data from upstream"))
    }
}
