use crate::BoardError;
use crate::scene::Side;
use itertools::Itertools;
use std::collections::HashMap;

const HOME_X_START: f32 = 5.0;
const AWAY_X_START: f32 = 95.0;
const HALF_PITCH_DEPTH: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: u32,
    pub col: u32,
}

impl GridPosition {
    /// Parses the lineup grid notation `"row:col"`, both 1-based.
    pub fn parse(grid: &str) -> Result<Self, BoardError> {
        let invalid = || BoardError::Grid(grid.to_string());

        let (row, col) = grid.split_once(':').ok_or_else(invalid)?;
        let row = row.trim().parse::<u32>().map_err(|_| invalid())?;
        let col = col.trim().parse::<u32>().map_err(|_| invalid())?;

        if row == 0 || col == 0 {
            return Err(invalid());
        }

        Ok(GridPosition { row, col })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchPoint {
    pub x: f32,
    pub y: f32,
}

/// Occupancy of each formation row for one side.
#[derive(Debug, Clone)]
pub struct FormationRows {
    counts: HashMap<u32, usize>,
    max_row: u32,
}

impl FormationRows {
    pub fn new(positions: &[GridPosition]) -> Self {
        FormationRows {
            counts: positions.iter().map(|p| p.row).counts(),
            max_row: positions.iter().map(|p| p.row).max().unwrap_or(1),
        }
    }

    pub fn count(&self, row: u32) -> usize {
        self.counts.get(&row).copied().unwrap_or(1)
    }

    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    /// Normalized pitch coordinate in `[0, 100]²` for a grid slot.
    pub fn place(&self, position: GridPosition, side: Side) -> PitchPoint {
        let count = self.count(position.row);

        let x_step = if self.max_row > 1 {
            HALF_PITCH_DEPTH / (self.max_row - 1) as f32
        } else {
            0.0
        };
        let depth = (position.row - 1) as f32 * x_step;
        let x = match side {
            Side::Home => HOME_X_START + depth,
            Side::Away => AWAY_X_START - depth,
        };

        if count <= 1 {
            return PitchPoint { x, y: 50.0 };
        }

        // Away columns are mirrored so both sides read top to bottom alike.
        let col = match side {
            Side::Home => position.col as f32,
            Side::Away => count as f32 - position.col as f32 + 1.0,
        };

        let (y_min, y_max) = match count {
            2 => (30.0, 70.0),
            3 => (20.0, 80.0),
            _ => (10.0, 90.0),
        };
        let y = y_min + ((col - 1.0) / (count - 1) as f32) * (y_max - y_min);

        PitchPoint { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> GridPosition {
        GridPosition::parse(s).unwrap()
    }

    fn four_three_three() -> Vec<GridPosition> {
        [
            "1:1", "2:4", "2:3", "2:2", "2:1", "3:3", "3:2", "3:1", "4:3", "4:2", "4:1",
        ]
        .into_iter()
        .map(grid)
        .collect()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_parse_grid() {
        assert_eq!(grid("3:2"), GridPosition { row: 3, col: 2 });
        assert!(GridPosition::parse("3").is_err());
        assert!(GridPosition::parse("a:1").is_err());
        assert!(GridPosition::parse("0:1").is_err());
    }

    #[test]
    fn test_three_player_row_spreads_twenty_to_eighty() {
        let rows = FormationRows::new(&four_three_three());

        let ys: Vec<f32> = ["3:1", "3:2", "3:3"]
            .into_iter()
            .map(|g| rows.place(grid(g), Side::Home).y)
            .collect();

        assert!(approx(ys[0], 20.0));
        assert!(approx(ys[1], 50.0));
        assert!(approx(ys[2], 80.0));
    }

    #[test]
    fn test_away_columns_are_mirrored() {
        let rows = FormationRows::new(&four_three_three());

        let away_first = rows.place(grid("3:1"), Side::Away);
        let home_last = rows.place(grid("3:3"), Side::Home);

        assert!(approx(away_first.y, home_last.y));
        assert!(approx(away_first.y, 80.0));
    }

    #[test]
    fn test_rows_step_across_each_half() {
        let rows = FormationRows::new(&four_three_three());

        let keeper = rows.place(grid("1:1"), Side::Home);
        assert!(approx(keeper.x, 5.0));
        assert!(approx(keeper.y, 50.0));

        let home_forward = rows.place(grid("4:2"), Side::Home);
        let away_forward = rows.place(grid("4:2"), Side::Away);
        assert!(approx(home_forward.x, 45.0));
        assert!(approx(away_forward.x, 55.0));

        let away_keeper = rows.place(grid("1:1"), Side::Away);
        assert!(approx(away_keeper.x, 95.0));
    }

    #[test]
    fn test_band_by_occupancy() {
        let positions: Vec<GridPosition> = ["1:1", "2:1", "2:2", "3:1", "3:2", "3:3", "3:4", "3:5"]
            .into_iter()
            .map(grid)
            .collect();
        let rows = FormationRows::new(&positions);

        assert!(approx(rows.place(grid("2:1"), Side::Home).y, 30.0));
        assert!(approx(rows.place(grid("2:2"), Side::Home).y, 70.0));
        assert!(approx(rows.place(grid("3:1"), Side::Home).y, 10.0));
        assert!(approx(rows.place(grid("3:5"), Side::Home).y, 90.0));
        assert!(approx(rows.place(grid("3:3"), Side::Home).y, 50.0));
    }

    #[test]
    fn test_single_row_has_no_depth_step() {
        let rows = FormationRows::new(&[grid("1:1")]);

        assert!(approx(rows.place(grid("1:1"), Side::Home).x, 5.0));
        assert!(approx(rows.place(grid("1:1"), Side::Away).x, 95.0));
    }
}
