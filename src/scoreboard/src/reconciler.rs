use crate::layout::{FormationRows, GridPosition};
use crate::models::Lineup;
use crate::palette::TeamPalette;
use crate::player::{PlayerCard, format_player_name};
use crate::scene::{CardId, MatchFlags, PITCH_SLOTS, PitchNode, Scene, Side};
use crate::source::BoardDataSource;
use crate::squad::MatchSquads;
use crate::BoardResult;
use log::{debug, error, warn};
use std::sync::Arc;

/// Match-detail progress of one score card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchDetailState {
    pub data_loaded: bool,
    pub data_available: bool,
}

impl MatchDetailState {
    pub fn flags(&self) -> MatchFlags {
        MatchFlags {
            data_loaded: self.data_loaded,
            data_available: self.data_available,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    AlreadyLoaded,
    Unavailable,
    Reconciled,
    Failed,
}

/// Fills a score card's player lists and formation pitch from lineups and events.
pub struct MatchDetailReconciler {
    source: Arc<dyn BoardDataSource>,
    palette: Arc<TeamPalette>,
}

impl MatchDetailReconciler {
    pub fn new(source: Arc<dyn BoardDataSource>, palette: Arc<TeamPalette>) -> Self {
        MatchDetailReconciler { source, palette }
    }

    pub async fn reconcile<S: Scene>(
        &self,
        scene: &mut S,
        card: CardId,
        fixture_id: u64,
        state: &mut MatchDetailState,
    ) -> ReconcileOutcome {
        if state.data_loaded {
            return ReconcileOutcome::AlreadyLoaded;
        }

        for side in Side::ALL {
            if let Err(e) = scene.clear_players(card, side) {
                warn!("clearing {side} players of {card} failed: {e}");
            }
        }

        match self.fill(scene, card, fixture_id, state).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("match detail for fixture {fixture_id} failed: {e}");
                state.data_loaded = false;
                if let Err(e) = scene.write_match_flags(card, state.flags()) {
                    warn!("resetting flags of {card} failed: {e}");
                }
                ReconcileOutcome::Failed
            }
        }
    }

    async fn fill<S: Scene>(
        &self,
        scene: &mut S,
        card: CardId,
        fixture_id: u64,
        state: &mut MatchDetailState,
    ) -> BoardResult<ReconcileOutcome> {
        let detail = self.source.match_detail(fixture_id).await?;

        state.data_loaded = true;

        let [home, away, ..] = detail.lineups() else {
            debug!("fixture {fixture_id} has no lineups yet");
            state.data_available = false;
            scene.write_match_flags(card, state.flags())?;
            return Ok(ReconcileOutcome::Unavailable);
        };

        state.data_available = true;
        scene.write_match_flags(card, state.flags())?;
        scene.write_formations(card, home.formation(), away.formation())?;

        let mut squads = MatchSquads::build(home, away)?;
        squads.apply_events(detail.events());

        for (side, lineup) in [(Side::Home, home), (Side::Away, away)] {
            self.place_starters(scene, card, side, lineup, squads.cards(side))?;
        }

        squads.align_substitutions();

        for slot in 0..PITCH_SLOTS {
            for side in Side::ALL {
                scene.register_player(card, side, &squads.cards(side)[slot])?;
            }
        }

        Ok(ReconcileOutcome::Reconciled)
    }

    fn place_starters<S: Scene>(
        &self,
        scene: &mut S,
        card: CardId,
        side: Side,
        lineup: &Lineup,
        players: &[PlayerCard],
    ) -> BoardResult<()> {
        let positions = lineup
            .start_xi
            .iter()
            .map(|entry| {
                let grid = entry.player.grid.as_deref().unwrap_or_default();
                GridPosition::parse(grid)
            })
            .collect::<BoardResult<Vec<_>>>()?;

        let rows = FormationRows::new(&positions);
        let kit = self.palette.colors(lineup.team.id).kit();

        for (slot, ((entry, position), player)) in lineup
            .start_xi
            .iter()
            .zip(&positions)
            .zip(players)
            .enumerate()
        {
            let point = rows.place(*position, side);

            let node = PitchNode {
                row: position.row.to_string(),
                x: point.x,
                y: point.y,
                player_id: entry.player.id,
                player_number: entry.player.number.unwrap_or(0),
                player_name: format_player_name(&entry.player.name),
                primary_color: kit.primary,
                border_color: kit.border,
                number_color: kit.number,
                goals: player.starter_stats.goals,
                yellow_cards: player.starter_stats.yellow_cards,
                is_red: player.starter_stats.is_red,
                is_substituted: player.substituted,
            };

            scene.write_pitch_node(card, side, slot, &node)?;
        }

        Ok(())
    }
}
