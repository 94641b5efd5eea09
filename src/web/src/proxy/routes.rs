use crate::GatewayAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<GatewayAppData> {
    Router::new().route("/api/proxy", get(super::proxy_image_action))
}
