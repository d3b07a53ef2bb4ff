//! Four-in-a-row scanning over a [`Grid`].

use super::grid::{Cell, Grid};
use super::piece::Piece;

/// Number of cells that make a line.
pub const LINE_LEN: usize = 4;

/// Four consecutive cells along one direction.
pub type Window = [Cell; LINE_LEN];

/// The four line directions, in the order they are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right (/)
    DiagonalUp,
    /// Top-left to bottom-right (\)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (row, col) step between consecutive cells. Row 0 is the bottom.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }

    /// Row range of valid window origins on a grid with `rows` rows.
    fn origin_rows(self, rows: usize) -> std::ops::Range<usize> {
        match self {
            Direction::Horizontal => 0..rows,
            Direction::Vertical | Direction::DiagonalUp => 0..rows - (LINE_LEN - 1),
            Direction::DiagonalDown => LINE_LEN - 1..rows,
        }
    }

    /// Column range of valid window origins on a grid with `cols` columns.
    fn origin_cols(self, cols: usize) -> std::ops::Range<usize> {
        match self {
            Direction::Vertical => 0..cols,
            _ => 0..cols - (LINE_LEN - 1),
        }
    }
}

/// Read-only view of a grid that enumerates line windows.
#[derive(Debug, Clone, Copy)]
pub struct LineScanner<'a> {
    grid: &'a Grid,
}

impl<'a> LineScanner<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        LineScanner { grid }
    }

    /// Whether `piece` fills some window in any direction.
    pub fn has_four(&self, piece: Piece) -> bool {
        let target = piece.to_cell();
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == target))
    }

    /// Every window on the grid: horizontal first, then vertical, then both
    /// diagonals. Each origin is visited once.
    pub fn windows(&self) -> Windows<'a> {
        Windows {
            grid: self.grid,
            direction: 0,
            row: Direction::ALL[0].origin_rows(self.grid.rows()).start,
            col: 0,
        }
    }

    /// First column, scanning left to right, where three `piece` cells are
    /// stacked directly under an empty cell. Returns that empty cell.
    ///
    /// Only vertical stacks are considered.
    pub fn stacked_three(&self, piece: Piece) -> Option<(usize, usize)> {
        let target = piece.to_cell();
        let grid = self.grid;
        (0..grid.cols()).find_map(|col| {
            let row = grid.lowest_open_row(col)?;
            let below_filled = row >= LINE_LEN - 1
                && (row - (LINE_LEN - 1)..row).all(|r| grid.get(r, col) == target);
            below_filled.then_some((row, col))
        })
    }
}

/// Iterator over every [`Window`] of a grid. See [`LineScanner::windows`].
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    grid: &'a Grid,
    direction: usize,
    row: usize,
    col: usize,
}

impl Windows<'_> {
    fn read(&self, direction: Direction) -> Window {
        let (dr, dc) = direction.step();
        let mut window = [Cell::Empty; LINE_LEN];
        for (i, slot) in window.iter_mut().enumerate() {
            let row = self.row as isize + dr * i as isize;
            let col = self.col as isize + dc * i as isize;
            *slot = self.grid.get(row as usize, col as usize);
        }
        window
    }
}

impl Iterator for Windows<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        while let Some(&direction) = Direction::ALL.get(self.direction) {
            let rows = direction.origin_rows(self.grid.rows());
            let cols = direction.origin_cols(self.grid.cols());

            if self.row < rows.end && cols.contains(&self.col) {
                let window = self.read(direction);
                self.col += 1;
                if self.col >= cols.end {
                    self.col = 0;
                    self.row += 1;
                }
                return Some(window);
            }

            self.direction += 1;
            if let Some(next) = Direction::ALL.get(self.direction) {
                self.row = next.origin_rows(self.grid.rows()).start;
                self.col = 0;
            }
        }
        None
    }
}

/// Total number of windows on a `rows` x `cols` grid.
pub fn window_count(rows: usize, cols: usize) -> usize {
    Direction::ALL
        .iter()
        .map(|d| d.origin_rows(rows).len() * d.origin_cols(cols).len())
        .sum()
}
