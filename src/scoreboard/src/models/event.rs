use serde::Deserialize;

pub const EVENT_GOAL: &str = "Goal";
pub const EVENT_CARD: &str = "Card";
pub const EVENT_SUBSTITUTION: &str = "subst";

pub const DETAIL_OWN_GOAL: &str = "Own Goal";
pub const DETAIL_YELLOW_CARD: &str = "Yellow Card";

#[derive(Debug, Clone, Deserialize)]
pub struct MatchEvent {
    #[serde(default)]
    pub time: EventTime,
    pub team: EventTeam,
    #[serde(default)]
    pub player: EventPlayer,
    #[serde(default)]
    pub assist: EventPlayer,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventTime {
    pub elapsed: Option<u32>,
    pub extra: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventTeam {
    pub id: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPlayer {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Goal,
    OwnGoal,
    YellowCard,
    /// Straight red or second yellow; `second_yellow` distinguishes them.
    RedCard { second_yellow: bool },
    Substitution,
    Other,
}

impl MatchEvent {
    pub fn classify(&self) -> EventKind {
        match self.kind.as_str() {
            EVENT_GOAL if self.detail == DETAIL_OWN_GOAL => EventKind::OwnGoal,
            EVENT_GOAL => EventKind::Goal,
            EVENT_CARD if self.detail == DETAIL_YELLOW_CARD => EventKind::YellowCard,
            EVENT_CARD => EventKind::RedCard {
                second_yellow: self.detail.contains("Second"),
            },
            EVENT_SUBSTITUTION => EventKind::Substitution,
            _ => EventKind::Other,
        }
    }
}
