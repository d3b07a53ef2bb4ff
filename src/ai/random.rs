use crate::game::Grid;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that picks uniformly at random among open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and repeatable sessions.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, grid: &Grid) -> Option<usize> {
        let open: Vec<usize> = grid.open_columns().collect();
        if open.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..open.len());
        Some(open[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Piece;

    #[test]
    fn test_random_agent_selects_open_column() {
        let mut agent = RandomAgent::new();
        let mut grid = Grid::new(4, 5).unwrap();
        for row in 0..4 {
            grid.drop(row, 2, Piece::A);
        }

        for _ in 0..100 {
            let col = agent.select_column(&grid).unwrap();
            assert!(col < 5 && col != 2, "column {col} is not open");
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let grid = Grid::new(6, 7).unwrap();
        let mut first = RandomAgent::seeded(42);
        let mut second = RandomAgent::seeded(42);
        for _ in 0..20 {
            assert_eq!(first.select_column(&grid), second.select_column(&grid));
        }
    }

    #[test]
    fn test_full_grid_has_no_column() {
        let mut grid = Grid::new(4, 4).unwrap();
        for col in 0..4 {
            for row in 0..4 {
                grid.drop(row, col, Piece::B);
            }
        }
        assert_eq!(RandomAgent::new().select_column(&grid), None);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
