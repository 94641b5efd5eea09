mod loaders;

pub use loaders::*;

use log::debug;
use scoreboard::{TeamColors, TeamPalette};
use std::collections::HashMap;

pub struct DatabaseEntity {
    pub teams: Vec<TeamColorEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> serde_json::Result<DatabaseEntity> {
        Ok(DatabaseEntity {
            teams: TeamColorLoader::load()?,
        })
    }
}

impl DatabaseEntity {
    /// Freezes the color table into the lookup the board reads from.
    pub fn palette(&self) -> TeamPalette {
        let teams: HashMap<u64, TeamColors> = self
            .teams
            .iter()
            .map(|team| {
                debug!("team colors: {} ({})", team.name, team.id);
                (
                    team.id,
                    TeamColors {
                        primary: team.primary.clone(),
                        secondary: team.secondary.clone(),
                        number: team.number.clone(),
                    },
                )
            })
            .collect();

        TeamPalette::new(teams)
    }
}
