mod event;
mod fixture;
mod lineup;

pub use event::*;
pub use fixture::*;
pub use lineup::*;

use serde::Deserialize;

/// api-football wraps every payload in `{ "response": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}

/// Body of the gateway's `/api/football/match` route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchDetail {
    #[serde(default)]
    pub lineups: Option<Vec<Lineup>>,
    #[serde(default)]
    pub events: Option<Vec<MatchEvent>>,
}

impl MatchDetail {
    pub fn lineups(&self) -> &[Lineup] {
        self.lineups.as_deref().unwrap_or_default()
    }

    pub fn events(&self) -> &[MatchEvent] {
        self.events.as_deref().unwrap_or_default()
    }
}
