use crate::ApiError;
use axum::http::Uri;

/// Unknown paths answer with the same JSON error shape as the handlers.
pub async fn default_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
