use crate::GatewayAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<GatewayAppData> {
    Router::new().route("/api/football/match", get(super::match_get_action))
}
