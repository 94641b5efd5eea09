use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Lineup {
    pub team: LineupTeam,
    #[serde(default)]
    pub formation: Option<String>,
    #[serde(rename = "startXI", default)]
    pub start_xi: Vec<LineupEntry>,
    #[serde(default)]
    pub substitutes: Vec<LineupEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineupTeam {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineupEntry {
    pub player: LineupPlayer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineupPlayer {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub number: Option<u32>,
    pub pos: Option<String>,
    pub grid: Option<String>,
}

impl Lineup {
    pub fn formation(&self) -> &str {
        self.formation.as_deref().unwrap_or_default()
    }
}
