pub mod routes;

use crate::error::required;
use crate::upstream::UpstreamQuery;
use crate::{ApiResult, GatewayAppData};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
pub struct MatchRequest {
    #[serde(rename = "fixtureId")]
    fixture_id: Option<String>,
}

pub async fn match_get_action(
    State(state): State<GatewayAppData>,
    Query(request): Query<MatchRequest>,
) -> ApiResult<Json<Value>> {
    let fixture_id = required(request.fixture_id, "fixtureId")?;

    let lineups_query = UpstreamQuery::lineups(&fixture_id);
    let events_query = UpstreamQuery::events(&fixture_id);

    let (lineups, events) = tokio::try_join!(
        state.api.get_json(&lineups_query),
        state.api.get_json(&events_query)
    )?;

    Ok(Json(json!({
        "lineups": response_field(lineups),
        "events": response_field(events),
    })))
}

fn response_field(body: Value) -> Value {
    match body {
        Value::Object(mut fields) => fields.remove("response").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
