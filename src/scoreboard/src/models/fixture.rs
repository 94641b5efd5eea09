use crate::status::LiveStatus;
use chrono::DateTime;
use serde::Deserialize;

pub const UNKNOWN_VENUE: &str = "Unknown Venue";

#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub fixture: FixtureInfo,
    pub teams: FixtureTeams,
    #[serde(default)]
    pub goals: FixtureGoals,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureInfo {
    pub id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub venue: Venue,
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Venue {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureStatus {
    #[serde(default)]
    pub long: String,
    #[serde(default)]
    pub short: String,
    pub elapsed: Option<u32>,
    pub extra: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureTeams {
    pub home: FixtureTeam,
    pub away: FixtureTeam,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureTeam {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureGoals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

impl Fixture {
    pub fn id(&self) -> u64 {
        self.fixture.id
    }

    pub fn venue_name(&self) -> &str {
        match self.fixture.venue.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_VENUE,
        }
    }

    pub fn live_status(&self) -> LiveStatus {
        let status = &self.fixture.status;
        LiveStatus::classify(&status.short, status.elapsed, status.extra)
    }

    /// Kick-off date as `YYYY-MM-DD`, in the offset the upstream wrote.
    pub fn kickoff_date(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.fixture.date) {
            Ok(date) => date.format("%Y-%m-%d").to_string(),
            Err(_) => self
                .fixture
                .date
                .split('T')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Kick-off time as `HH:MM`, empty when the timestamp carries none.
    pub fn kickoff_time(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.fixture.date) {
            Ok(date) => date.format("%H:%M").to_string(),
            Err(_) => self
                .fixture
                .date
                .split_once('T')
                .and_then(|(_, time)| time.get(..5))
                .filter(|time| time.as_bytes().get(2) == Some(&b':'))
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn home_score(&self) -> u32 {
        self.goals.home.unwrap_or(0)
    }

    pub fn away_score(&self) -> u32 {
        self.goals.away.unwrap_or(0)
    }
}
