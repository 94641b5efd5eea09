use serde::Deserialize;
use std::collections::HashMap;

const OPAQUE_ALPHA: u32 = 0xFF00_0000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamColors {
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    pub number: String,
}

impl Default for TeamColors {
    fn default() -> Self {
        TeamColors {
            primary: String::from("FFFFFF"),
            secondary: String::from("CCCCCC"),
            number: String::from("000000"),
        }
    }
}

/// Opaque ARGB colors as the renderer expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KitColors {
    pub primary: u32,
    pub border: u32,
    pub number: u32,
}

impl TeamColors {
    pub fn kit(&self) -> KitColors {
        let primary = parse_rgb(&self.primary).unwrap_or(0x00FF_FFFF);
        // Clubs without a secondary get a border in their primary color.
        let border = parse_rgb(&self.secondary).unwrap_or(primary);
        let number = parse_rgb(&self.number).unwrap_or(0x0000_0000);

        KitColors {
            primary: OPAQUE_ALPHA | primary,
            border: OPAQUE_ALPHA | border,
            number: OPAQUE_ALPHA | number,
        }
    }
}

fn parse_rgb(hex: &str) -> Option<u32> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// Immutable team id → colors lookup, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct TeamPalette {
    teams: HashMap<u64, TeamColors>,
    fallback: TeamColors,
}

impl TeamPalette {
    pub fn new(teams: HashMap<u64, TeamColors>) -> Self {
        TeamPalette {
            teams,
            fallback: TeamColors::default(),
        }
    }

    pub fn colors(&self, team_id: u64) -> &TeamColors {
        self.teams.get(&team_id).unwrap_or(&self.fallback)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kit_colors_are_opaque() {
        let colors = TeamColors {
            primary: "d00028".to_string(),
            secondary: String::new(),
            number: "FFFFFF".to_string(),
        };

        let kit = colors.kit();

        assert_eq!(kit.primary, 0xFFD0_0028);
        assert_eq!(kit.border, 0xFFD0_0028);
        assert_eq!(kit.number, 0xFFFF_FFFF);
    }

    #[test]
    fn test_unknown_team_uses_fallback() {
        let palette = TeamPalette::new(HashMap::from([(
            40,
            TeamColors {
                primary: "d11325".to_string(),
                secondary: String::new(),
                number: "FFFFFF".to_string(),
            },
        )]));

        assert_eq!(palette.colors(40).primary, "d11325");
        assert_eq!(palette.colors(9999), &TeamColors::default());
        assert_eq!(palette.colors(9999).kit().border, 0xFFCC_CCCC);
    }
}
