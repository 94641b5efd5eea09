use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../../data/teams.json");

#[derive(Deserialize)]
pub struct TeamColorEntity {
    pub id: u64,
    pub name: String,
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    pub number: String,
}

pub struct TeamColorLoader;

impl TeamColorLoader {
    pub fn load() -> serde_json::Result<Vec<TeamColorEntity>> {
        serde_json::from_str(STATIC_TEAMS_JSON)
    }
}
