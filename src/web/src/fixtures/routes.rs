use crate::GatewayAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<GatewayAppData> {
    Router::new().route("/api/football/fixtures", get(super::fixtures_list_action))
}
