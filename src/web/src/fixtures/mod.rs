pub mod routes;

use crate::error::required;
use crate::upstream::UpstreamQuery;
use crate::{ApiResult, GatewayAppData};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct FixturesRequest {
    round: Option<String>,
}

pub async fn fixtures_list_action(
    State(state): State<GatewayAppData>,
    Query(request): Query<FixturesRequest>,
) -> ApiResult<Json<Value>> {
    let round = required(request.round, "round")?;

    let query = UpstreamQuery::fixtures_by_round(state.config.league_id, state.config.season, &round);

    Ok(Json(state.api.get_json(&query).await?))
}
