use crate::models::LineupPlayer;
use crate::scene::Side;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerIdentity {
    pub id: u64,
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub goals: u32,
    pub yellow_cards: u32,
    pub is_red: bool,
}

impl PlayerStats {
    pub fn add_goal(&mut self) {
        self.goals += 1;
    }

    pub fn add_yellow(&mut self) {
        self.yellow_cards += 1;
    }

    pub fn send_off(&mut self, second_yellow: bool) {
        self.is_red = true;
        if second_yellow {
            self.yellow_cards = 2;
        }
    }
}

/// Player list entry: the starter, and whoever replaced them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerCard {
    pub is_home: bool,
    pub starter: PlayerIdentity,
    pub starter_stats: PlayerStats,
    pub substituted: bool,
    pub show_substitution: bool,
    pub replacement: Option<PlayerIdentity>,
    pub replacement_stats: PlayerStats,
}

impl PlayerCard {
    pub fn starter(side: Side, player: &LineupPlayer) -> Self {
        PlayerCard {
            is_home: side.is_home(),
            starter: PlayerIdentity {
                id: player.id,
                number: player.number.unwrap_or(0),
                name: player.name.clone(),
            },
            ..PlayerCard::default()
        }
    }

    pub fn substitute(&mut self, replacement: PlayerIdentity) {
        self.substituted = true;
        self.replacement = Some(replacement);
    }

    pub fn is_replaced_by(&self, player_id: u64) -> bool {
        self.substituted
            && self
                .replacement
                .as_ref()
                .is_some_and(|replacement| replacement.id == player_id)
    }

    pub fn matches(&self, player_id: u64) -> bool {
        self.starter.id == player_id || self.is_replaced_by(player_id)
    }

    /// Stats of whichever identity on this card carries `player_id`.
    pub fn stats_for_mut(&mut self, player_id: u64) -> Option<&mut PlayerStats> {
        if self.starter.id == player_id {
            Some(&mut self.starter_stats)
        } else if self.is_replaced_by(player_id) {
            Some(&mut self.replacement_stats)
        } else {
            None
        }
    }
}

/// Pitch label: drops the first given name when there is more than one word.
pub fn format_player_name(full_name: &str) -> String {
    let words: Vec<&str> = full_name.split_whitespace().collect();

    match words.as_slice() {
        [] => String::new(),
        [single] => (*single).to_string(),
        [_, rest @ ..] => rest.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_player_name() {
        assert_eq!(format_player_name("Bruno Fernandes"), "Fernandes");
        assert_eq!(format_player_name("Virgil van Dijk"), "van Dijk");
        assert_eq!(format_player_name("Alisson"), "Alisson");
        assert_eq!(format_player_name("  "), "");
    }

    #[test]
    fn test_stats_follow_replacement_identity() {
        let mut card = PlayerCard {
            starter: PlayerIdentity { id: 10, number: 7, name: "A".into() },
            ..PlayerCard::default()
        };

        assert!(card.stats_for_mut(20).is_none());

        card.substitute(PlayerIdentity { id: 20, number: 19, name: "B".into() });
        card.stats_for_mut(20).unwrap().add_goal();
        card.stats_for_mut(10).unwrap().add_yellow();

        assert_eq!(card.replacement_stats.goals, 1);
        assert_eq!(card.starter_stats.yellow_cards, 1);
        assert!(card.matches(20));
    }

    #[test]
    fn test_second_yellow_sets_both_counters() {
        let mut stats = PlayerStats::default();
        stats.add_yellow();
        stats.send_off(true);

        assert_eq!(stats.yellow_cards, 2);
        assert!(stats.is_red);
    }
}
