use crate::BoardError;

pub const FIRST_WEEK: u32 = 1;
pub const LAST_WEEK: u32 = 38;
pub const ROUND_PREFIX: &str = "Regular Season";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub name: String,
    pub week: u32,
}

impl Round {
    pub fn for_week(week: u32) -> Self {
        Round {
            name: format!("{ROUND_PREFIX} - {week}"),
            week,
        }
    }

    /// Parses `"Regular Season - 24"` style names. Weeks outside the season are rejected.
    pub fn parse(name: &str) -> Result<Self, BoardError> {
        let week = name
            .split(" - ")
            .nth(1)
            .and_then(|week| week.trim().parse::<u32>().ok())
            .filter(|week| (FIRST_WEEK..=LAST_WEEK).contains(week))
            .ok_or_else(|| BoardError::RoundName(name.to_string()))?;

        Ok(Round {
            name: name.to_string(),
            week,
        })
    }

    pub fn previous(&self) -> Option<Round> {
        self.week
            .checked_sub(1)
            .filter(|&week| week >= FIRST_WEEK)
            .map(Round::for_week)
    }

    pub fn next(&self) -> Option<Round> {
        self.week
            .checked_add(1)
            .filter(|&week| week <= LAST_WEEK)
            .map(Round::for_week)
    }

    pub fn subtitle(&self) -> String {
        format!("Matchweek {}", self.week)
    }
}
