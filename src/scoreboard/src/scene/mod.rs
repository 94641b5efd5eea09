mod image;
mod memory;

pub use image::*;
pub use memory::*;

use crate::player::PlayerCard;
use std::fmt;
use thiserror::Error;

/// Pitch node slots per side, one per starter.
pub const PITCH_SLOTS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    pub fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }

    pub fn is_home(self) -> bool {
        self == Side::Home
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// Text and numeric fields of one score card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreCardView {
    pub fixture_id: String,
    pub venue_name: String,
    pub date: String,
    pub time: String,
    pub match_status: String,
    pub is_live: bool,
    pub live_display: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchFlags {
    pub data_loaded: bool,
    pub data_available: bool,
}

/// One positional slot on the formation pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchNode {
    pub row: String,
    pub x: f32,
    pub y: f32,
    pub player_id: u64,
    pub player_number: u32,
    pub player_name: String,
    pub primary_color: u32,
    pub border_color: u32,
    pub number_color: u32,
    pub goals: u32,
    pub yellow_cards: u32,
    pub is_red: bool,
    pub is_substituted: bool,
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("{0} does not exist")]
    MissingCard(CardId),

    #[error("{card} has no {side} pitch slot {slot}")]
    MissingSlot { card: CardId, side: Side, slot: usize },

    #[error("{card} has no '{property}' property")]
    MissingProperty { card: CardId, property: &'static str },

    #[error("list index {0} is out of range")]
    IndexOutOfRange(usize),

    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("renderer rejected the operation: {0}")]
    Rejected(String),
}

/// Data-binding surface of the rendering runtime.
///
/// Calls are made from a single task; implementations need no locking.
pub trait Scene {
    fn set_subtitle(&mut self, subtitle: &str);

    fn set_board_loaded(&mut self, loaded: bool);

    /// Instantiates a score card that is not yet part of the card list.
    fn create_card(&mut self) -> Result<CardId, SceneError>;

    fn write_card(&mut self, card: CardId, view: &ScoreCardView) -> Result<(), SceneError>;

    /// Hands a decoded badge to the card. The scene owns it afterwards.
    fn attach_badge(&mut self, card: CardId, side: Side, image: DecodedImage) -> Result<(), SceneError>;

    fn register_card(&mut self, card: CardId) -> Result<(), SceneError>;

    /// Drops a card that never made it into the list.
    fn discard_card(&mut self, card: CardId);

    fn remove_card_at(&mut self, index: usize) -> Result<(), SceneError>;

    fn card_count(&self) -> usize;

    fn write_match_flags(&mut self, card: CardId, flags: MatchFlags) -> Result<(), SceneError>;

    fn write_formations(&mut self, card: CardId, home: &str, away: &str) -> Result<(), SceneError>;

    fn clear_players(&mut self, card: CardId, side: Side) -> Result<(), SceneError>;

    fn register_player(&mut self, card: CardId, side: Side, player: &PlayerCard) -> Result<(), SceneError>;

    fn write_pitch_node(
        &mut self,
        card: CardId,
        side: Side,
        slot: usize,
        node: &PitchNode,
    ) -> Result<(), SceneError>;
}
