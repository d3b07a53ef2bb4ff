use std::fmt;

use super::piece::Piece;
use crate::error::EngineError;

pub const MIN_SIZE: usize = 4;
pub const MAX_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Piece),
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Taken(piece) => piece.symbol(),
        }
    }
}

/// Rectangular playing field with gravity.
///
/// Row 0 is the bottom row. Pieces are only ever written to the lowest empty
/// row of a column, so within a column every empty cell sits above every
/// taken one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid, rejecting sizes outside `4..=8` on either axis.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if !Self::is_supported_size(rows) || !Self::is_supported_size(cols) {
            return Err(EngineError::BoardSize { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn is_supported_size(n: usize) -> bool {
        (MIN_SIZE..=MAX_SIZE).contains(&n)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of `(row, col)`. Panics outside the grid, so a stray
    /// column can never alias a cell in the next row.
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Get the cell at a specific position. Panics outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Lowest empty row of `col`, or `None` if the column is full or past the
    /// right edge.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Write `piece` at `(row, col)` without any validation.
    ///
    /// Callers obtain `row` from [`Grid::lowest_open_row`]; writing anywhere
    /// else breaks the gravity invariant. Out-of-bounds indices panic.
    pub fn drop(&mut self, row: usize, col: usize, piece: Piece) {
        let idx = self.index(row, col);
        debug_assert_eq!(self.cells[idx], Cell::Empty, "drop onto a taken cell");
        self.cells[idx] = piece.to_cell();
    }

    /// Undo a [`Grid::drop`]. Only search should need this.
    pub(crate) fn lift(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Empty;
    }

    /// Check if a column is full. Columns past the right edge count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(self.rows - 1, col) != Cell::Empty
    }

    /// Check if the grid is completely full (top row only, thanks to gravity)
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Whether a 1-based column number names a column of this grid.
    pub fn in_range(&self, column: usize) -> bool {
        (1..=self.cols).contains(&column)
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(move |&col| !self.is_column_full(col))
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 1..=self.cols {
            write!(f, "  {col} ")?;
        }
        writeln!(f)?;
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                write!(f, "| {} ", self.get(row, col).symbol())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", "=".repeat(self.cols * 4 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop into the lowest open row, the way every real caller does.
    fn play(grid: &mut Grid, col: usize, piece: Piece) -> usize {
        let row = grid.lowest_open_row(col).unwrap();
        grid.drop(row, col, piece);
        row
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(6, 7).unwrap();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(grid.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(grid.open_columns().count(), 7);
    }

    #[test]
    fn test_rejects_unsupported_sizes() {
        assert_eq!(
            Grid::new(3, 7),
            Err(EngineError::BoardSize { rows: 3, cols: 7 })
        );
        assert!(Grid::new(6, 9).is_err());
        assert!(Grid::new(4, 4).is_ok());
        assert!(Grid::new(8, 8).is_ok());
    }

    #[test]
    fn test_drop_lands_on_lowest_open_row() {
        let mut grid = Grid::new(6, 7).unwrap();

        assert_eq!(play(&mut grid, 3, Piece::A), 0);
        assert_eq!(grid.get(0, 3), Cell::Taken(Piece::A));

        assert_eq!(play(&mut grid, 3, Piece::B), 1);
        assert_eq!(grid.get(1, 3), Cell::Taken(Piece::B));
        assert_eq!(grid.lowest_open_row(3), Some(2));
    }

    #[test]
    fn test_column_full() {
        let mut grid = Grid::new(4, 5).unwrap();
        for _ in 0..4 {
            play(&mut grid, 0, Piece::A);
        }

        assert!(grid.is_column_full(0));
        assert_eq!(grid.lowest_open_row(0), None);
        assert!(!grid.is_column_full(1));
        assert_eq!(grid.open_columns().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_out_of_range_column_counts_as_full() {
        let grid = Grid::new(4, 4).unwrap();
        assert!(grid.is_column_full(4));
    }

    #[test]
    fn test_out_of_range_column_has_no_open_row() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.lowest_open_row(4), None);

        // Filling column 0 must not leak into a column past the edge.
        play(&mut grid, 0, Piece::A);
        play(&mut grid, 0, Piece::B);
        assert_eq!(grid.lowest_open_row(4), None);
        assert_eq!(grid.lowest_open_row(usize::MAX), None);
        assert_eq!(grid.open_columns().count(), 4);
    }

    #[test]
    #[should_panic(expected = "outside 4x4 grid")]
    fn test_get_past_right_edge_panics() {
        let mut grid = Grid::new(4, 4).unwrap();
        play(&mut grid, 0, Piece::B);
        grid.get(0, 4);
    }

    #[test]
    #[should_panic(expected = "outside 4x4 grid")]
    fn test_drop_past_right_edge_panics() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.drop(0, 4, Piece::A);
    }

    #[test]
    fn test_in_range_is_one_based() {
        let grid = Grid::new(4, 6).unwrap();
        assert!(!grid.in_range(0));
        assert!(grid.in_range(1));
        assert!(grid.in_range(6));
        assert!(!grid.in_range(7));
    }

    #[test]
    fn test_gravity_invariant_holds_after_drops() {
        let mut grid = Grid::new(5, 5).unwrap();
        let moves = [2, 2, 0, 4, 2, 1, 1, 4, 4, 4, 4, 3];
        let mut piece = Piece::A;
        for &col in &moves {
            if let Some(row) = grid.lowest_open_row(col) {
                grid.drop(row, col, piece);
                piece = piece.other();
            }
        }

        for col in 0..5 {
            let filled = (0..5)
                .take_while(|&row| grid.get(row, col) != Cell::Empty)
                .count();
            assert!(
                (filled..5).all(|row| grid.get(row, col) == Cell::Empty),
                "column {col} has a gap"
            );
        }
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::new(4, 4).unwrap();
        for col in 0..4 {
            for _ in 0..4 {
                play(&mut grid, col, Piece::B);
            }
        }
        assert!(grid.is_full());
        assert_eq!(grid.open_columns().count(), 0);
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut grid = Grid::new(4, 4).unwrap();
        play(&mut grid, 1, Piece::A);
        play(&mut grid, 1, Piece::B);
        grid.reset();
        assert_eq!(grid, Grid::new(4, 4).unwrap());
    }

    #[test]
    fn test_lift_undoes_drop() {
        let mut grid = Grid::new(4, 4).unwrap();
        let before = grid.clone();
        let row = play(&mut grid, 2, Piece::A);
        grid.lift(row, 2);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_display_puts_bottom_row_last() {
        let mut grid = Grid::new(4, 4).unwrap();
        play(&mut grid, 0, Piece::A);
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  1   2   3   4 ");
        assert_eq!(lines[4], "| X |   |   |   |");
        assert_eq!(lines[5], "=================");
    }
}
