use crate::game::Grid;

/// Anything that can pick a column to play on a grid.
pub trait Agent {
    /// Select a 0-based column that is not full, or `None` if the grid is full.
    fn select_column(&mut self, grid: &Grid) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
