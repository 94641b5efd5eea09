pub mod routes;

use crate::upstream::UpstreamQuery;
use crate::{ApiResult, GatewayAppData};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct RoundsRequest {
    current: Option<String>,
}

impl RoundsRequest {
    fn current_only(&self) -> bool {
        self.current.as_deref() == Some("true")
    }
}

pub async fn rounds_list_action(
    State(state): State<GatewayAppData>,
    Query(request): Query<RoundsRequest>,
) -> ApiResult<Json<Value>> {
    let query = UpstreamQuery::rounds(
        state.config.league_id,
        state.config.season,
        request.current_only(),
    );

    Ok(Json(state.api.get_json(&query).await?))
}
