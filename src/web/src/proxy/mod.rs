pub mod routes;

use crate::error::required;
use crate::{ApiError, ApiResult, GatewayAppData};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use log::error;
use serde::Deserialize;

pub const DEFAULT_IMAGE_TYPE: &str = "image/png";
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=86400";

#[derive(Deserialize)]
pub struct ProxyRequest {
    url: Option<String>,
}

pub async fn proxy_image_action(
    State(state): State<GatewayAppData>,
    Query(request): Query<ProxyRequest>,
) -> ApiResult<Response> {
    let url = required(request.url, "url")?;

    let image = state.images.fetch_image(&url).await.map_err(|e| {
        error!("image relay failed for {url}: {e}");
        ApiError::InternalError(String::from("failed to fetch image"))
    })?;

    let content_type = image
        .content_type
        .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, IMAGE_CACHE_CONTROL.to_string()),
        ],
        image.bytes,
    )
        .into_response())
}
