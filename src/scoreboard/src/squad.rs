use crate::models::{EventKind, Lineup, MatchEvent};
use crate::player::{PlayerCard, PlayerIdentity};
use crate::scene::{PITCH_SLOTS, Side};
use crate::{BoardError, BoardResult};
use log::{debug, warn};
use std::collections::HashMap;

/// The 22 player cards of one fixture and the shirt numbers of everyone named.
#[derive(Debug, Clone)]
pub struct MatchSquads {
    home_team_id: u64,
    sides: [Vec<PlayerCard>; 2],
    numbers: HashMap<u64, u32>,
}

impl MatchSquads {
    pub fn build(home: &Lineup, away: &Lineup) -> BoardResult<Self> {
        let mut numbers = HashMap::new();
        let mut sides: [Vec<PlayerCard>; 2] = Default::default();

        for (side, lineup) in [(Side::Home, home), (Side::Away, away)] {
            if lineup.start_xi.len() != PITCH_SLOTS {
                return Err(BoardError::IncompleteLineup {
                    side,
                    count: lineup.start_xi.len(),
                });
            }

            for entry in &lineup.start_xi {
                numbers.insert(entry.player.id, entry.player.number.unwrap_or(0));
                sides[side.index()].push(PlayerCard::starter(side, &entry.player));
            }

            for entry in &lineup.substitutes {
                numbers.insert(entry.player.id, entry.player.number.unwrap_or(0));
            }
        }

        Ok(MatchSquads {
            home_team_id: home.team.id,
            sides,
            numbers,
        })
    }

    pub fn cards(&self, side: Side) -> &[PlayerCard] {
        &self.sides[side.index()]
    }

    pub fn number_of(&self, player_id: u64) -> Option<u32> {
        self.numbers.get(&player_id).copied()
    }

    /// Replays goals, cards and substitutions in arrival order.
    pub fn apply_events(&mut self, events: &[MatchEvent]) {
        for event in events {
            let side = if event.team.id == self.home_team_id {
                Side::Home
            } else {
                Side::Away
            };

            let Some(player_id) = event.player.id else {
                debug!("skipping {} event without a player", event.kind);
                continue;
            };

            match event.classify() {
                EventKind::Substitution => self.substitute(side, player_id, event),
                EventKind::Goal => {
                    if let Some(stats) = self.stats_for_mut(side, player_id) {
                        stats.add_goal();
                    }
                }
                EventKind::YellowCard => {
                    if let Some(stats) = self.stats_for_mut(side, player_id) {
                        stats.add_yellow();
                    }
                }
                EventKind::RedCard { second_yellow } => {
                    if let Some(stats) = self.stats_for_mut(side, player_id) {
                        stats.send_off(second_yellow);
                    }
                }
                EventKind::OwnGoal | EventKind::Other => {}
            }
        }
    }

    /// Keeps the two substitution columns level: when either side changed
    /// the player at an index, both show the flag, only the real one the detail.
    pub fn align_substitutions(&mut self) {
        let [home, away] = &mut self.sides;

        for (home_card, away_card) in home.iter_mut().zip(away.iter_mut()) {
            let home_changed = home_card.substituted;
            let away_changed = away_card.substituted;

            if home_changed || away_changed {
                home_card.substituted = true;
                away_card.substituted = true;
                home_card.show_substitution = home_changed;
                away_card.show_substitution = away_changed;
            }
        }
    }

    fn substitute(&mut self, side: Side, outgoing: u64, event: &MatchEvent) {
        let Some(incoming) = event.assist.id else {
            warn!("substitution of player {outgoing} names no incoming player");
            return;
        };

        let replacement = PlayerIdentity {
            id: incoming,
            number: self.number_of(incoming).unwrap_or(0),
            name: event.assist.name.clone().unwrap_or_default(),
        };

        match self.sides[side.index()]
            .iter_mut()
            .find(|card| card.starter.id == outgoing)
        {
            Some(card) => card.substitute(replacement),
            None => debug!("substituted player {outgoing} did not start"),
        }
    }

    fn stats_for_mut(&mut self, side: Side, player_id: u64) -> Option<&mut crate::player::PlayerStats> {
        self.sides[side.index()]
            .iter_mut()
            .find(|card| card.matches(player_id))
            .and_then(|card| card.stats_for_mut(player_id))
    }
}
