use crate::GatewayAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<GatewayAppData> {
    Router::new().route("/api/football/rounds", get(super::rounds_list_action))
}
