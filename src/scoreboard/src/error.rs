use crate::scene::{SceneError, Side};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gateway returned {status} for {path}")]
    Status { status: u16, path: String },

    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("data source failure: {0}")]
    Source(String),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("round name '{0}' carries no week of the season")]
    RoundName(String),

    #[error("invalid lineup grid '{0}'")]
    Grid(String),

    #[error("{side} lineup has {count} starters, expected 11")]
    IncompleteLineup { side: Side, count: usize },

    #[error("no current round reported")]
    NoCurrentRound,
}

pub type BoardResult<T> = Result<T, BoardError>;
