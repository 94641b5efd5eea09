use super::{
    CardId, DecodedImage, MatchFlags, PITCH_SLOTS, PitchNode, Scene, SceneError, ScoreCardView, Side,
};
use crate::player::PlayerCard;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct MemoryCard {
    pub view: ScoreCardView,
    pub home_badge: Option<DecodedImage>,
    pub away_badge: Option<DecodedImage>,
    pub flags: MatchFlags,
    pub home_formation: String,
    pub away_formation: String,
    pub players: [Vec<PlayerCard>; 2],
    pub pitch: [[Option<PitchNode>; PITCH_SLOTS]; 2],
}

impl MemoryCard {
    pub fn badge(&self, side: Side) -> Option<&DecodedImage> {
        match side {
            Side::Home => self.home_badge.as_ref(),
            Side::Away => self.away_badge.as_ref(),
        }
    }

    pub fn players(&self, side: Side) -> &[PlayerCard] {
        &self.players[side.index()]
    }

    pub fn pitch_node(&self, side: Side, slot: usize) -> Option<&PitchNode> {
        self.pitch[side.index()].get(slot).and_then(Option::as_ref)
    }
}

/// Scene graph kept in memory, with switches to make individual calls fail.
#[derive(Debug, Default)]
pub struct MemoryScene {
    subtitle: String,
    board_loaded: bool,
    next_card: u64,
    cards: HashMap<CardId, MemoryCard>,
    list: Vec<CardId>,
    rejected_fixtures: HashSet<String>,
    failing_removals: usize,
    badgeless: bool,
}

impl MemoryScene {
    pub fn new() -> Self {
        MemoryScene::default()
    }

    /// Registration of cards showing this fixture id will fail.
    pub fn reject_fixture(&mut self, fixture_id: u64) {
        self.rejected_fixtures.insert(fixture_id.to_string());
    }

    /// The next `count` removals fail without removing anything.
    pub fn fail_next_removals(&mut self, count: usize) {
        self.failing_removals = count;
    }

    /// Cards are created without badge properties.
    pub fn without_badges(&mut self) {
        self.badgeless = true;
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn is_board_loaded(&self) -> bool {
        self.board_loaded
    }

    pub fn listed(&self) -> impl Iterator<Item = (CardId, &MemoryCard)> {
        self.list
            .iter()
            .filter_map(|id| self.cards.get(id).map(|card| (*id, card)))
    }

    pub fn card(&self, id: CardId) -> Option<&MemoryCard> {
        self.cards.get(&id)
    }

    /// Instances alive in the scene, listed or not.
    pub fn instance_count(&self) -> usize {
        self.cards.len()
    }

    fn card_mut(&mut self, id: CardId) -> Result<&mut MemoryCard, SceneError> {
        self.cards.get_mut(&id).ok_or(SceneError::MissingCard(id))
    }

    /// Renders the listed cards as plain text lines.
    pub fn describe(&self) -> Vec<String> {
        self.listed()
            .map(|(_, card)| {
                let view = &card.view;
                let live = if view.is_live {
                    format!(" [{}]", view.live_display)
                } else {
                    String::new()
                };
                format!(
                    "{} {} {} - {} {} ({} {} @ {}){}",
                    view.home_team,
                    view.home_score,
                    view.away_score,
                    view.away_team,
                    view.match_status,
                    view.date,
                    view.time,
                    view.venue_name,
                    live
                )
            })
            .collect()
    }
}

impl Scene for MemoryScene {
    fn set_subtitle(&mut self, subtitle: &str) {
        self.subtitle = subtitle.to_string();
    }

    fn set_board_loaded(&mut self, loaded: bool) {
        self.board_loaded = loaded;
    }

    fn create_card(&mut self) -> Result<CardId, SceneError> {
        self.next_card += 1;
        let id = CardId(self.next_card);
        self.cards.insert(id, MemoryCard::default());
        Ok(id)
    }

    fn write_card(&mut self, card: CardId, view: &ScoreCardView) -> Result<(), SceneError> {
        self.card_mut(card)?.view = view.clone();
        Ok(())
    }

    fn attach_badge(&mut self, card: CardId, side: Side, image: DecodedImage) -> Result<(), SceneError> {
        let property = match side {
            Side::Home => "homeTeamBadge",
            Side::Away => "awayTeamBadge",
        };
        if self.badgeless {
            return Err(SceneError::MissingProperty { card, property });
        }

        let target = self.card_mut(card)?;
        match side {
            Side::Home => target.home_badge = Some(image),
            Side::Away => target.away_badge = Some(image),
        }
        Ok(())
    }

    fn register_card(&mut self, card: CardId) -> Result<(), SceneError> {
        let fixture_id = &self
            .cards
            .get(&card)
            .ok_or(SceneError::MissingCard(card))?
            .view
            .fixture_id;

        if self.rejected_fixtures.contains(fixture_id) {
            return Err(SceneError::Rejected(format!("fixture {fixture_id} refused")));
        }

        self.list.push(card);
        Ok(())
    }

    fn discard_card(&mut self, card: CardId) {
        if !self.list.contains(&card) {
            self.cards.remove(&card);
        }
    }

    fn remove_card_at(&mut self, index: usize) -> Result<(), SceneError> {
        if self.failing_removals > 0 {
            self.failing_removals -= 1;
            return Err(SceneError::Rejected(String::from("removal refused")));
        }
        if index >= self.list.len() {
            return Err(SceneError::IndexOutOfRange(index));
        }

        let id = self.list.remove(index);
        self.cards.remove(&id);
        Ok(())
    }

    fn card_count(&self) -> usize {
        self.list.len()
    }

    fn write_match_flags(&mut self, card: CardId, flags: MatchFlags) -> Result<(), SceneError> {
        self.card_mut(card)?.flags = flags;
        Ok(())
    }

    fn write_formations(&mut self, card: CardId, home: &str, away: &str) -> Result<(), SceneError> {
        let target = self.card_mut(card)?;
        target.home_formation = home.to_string();
        target.away_formation = away.to_string();
        Ok(())
    }

    fn clear_players(&mut self, card: CardId, side: Side) -> Result<(), SceneError> {
        self.card_mut(card)?.players[side.index()].clear();
        Ok(())
    }

    fn register_player(&mut self, card: CardId, side: Side, player: &PlayerCard) -> Result<(), SceneError> {
        self.card_mut(card)?.players[side.index()].push(player.clone());
        Ok(())
    }

    fn write_pitch_node(
        &mut self,
        card: CardId,
        side: Side,
        slot: usize,
        node: &PitchNode,
    ) -> Result<(), SceneError> {
        let target = self
            .card_mut(card)?
            .pitch[side.index()]
            .get_mut(slot)
            .ok_or(SceneError::MissingSlot { card, side, slot })?;

        *target = Some(node.clone());
        Ok(())
    }
}
