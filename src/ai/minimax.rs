use log::{debug, trace};

use crate::config::SearchConfig;
use crate::game::{Grid, LineScanner, Piece};

use super::agent::Agent;
use super::heuristic::{Heuristic, MaterialHeuristic};

const MIN_COLS: usize = 4;
const MAX_COLS: usize = 8;
const MIN_DEPTH: usize = 3;
const MAX_DEPTH: usize = 6;

/// Search depth for a grid `cols` wide: 3 plies at 4 columns, 6 at 8, linear
/// in between and rounded to the nearest ply.
pub fn depth_for_columns(cols: usize) -> usize {
    let slope = (MAX_DEPTH - MIN_DEPTH) as f64 / (MAX_COLS - MIN_COLS) as f64;
    let depth = MIN_DEPTH as f64 + slope * (cols as f64 - MIN_COLS as f64);
    depth.round().max(1.0) as usize
}

/// Best column found by [`search`] and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` at terminal nodes and when no column is open.
    pub column: Option<usize>,
    pub score: i64,
}

/// Plain fixed-depth minimax. B maximizes, A minimizes.
///
/// Pieces are dropped into `grid` and lifted again after each branch, so the
/// grid is identical on return. Columns are tried left to right and only a
/// strictly better score replaces the current best, which makes the leftmost
/// of equally good columns win.
pub fn search(
    grid: &mut Grid,
    depth: usize,
    maximizing: bool,
    heuristic: &dyn Heuristic,
) -> SearchResult {
    if depth == 0 || is_terminal(grid) {
        return SearchResult {
            column: None,
            score: heuristic.score_grid(grid),
        };
    }

    let mover = if maximizing { Piece::B } else { Piece::A };
    let mut best = SearchResult {
        column: None,
        score: if maximizing { i64::MIN } else { i64::MAX },
    };

    for col in 0..grid.cols() {
        let Some(row) = grid.lowest_open_row(col) else {
            continue;
        };

        grid.drop(row, col, mover);
        let score = search(grid, depth - 1, !maximizing, heuristic).score;
        grid.lift(row, col);

        let improves = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                column: Some(col),
                score,
            };
        }
    }

    best
}

fn is_terminal(grid: &Grid) -> bool {
    let scanner = LineScanner::new(grid);
    scanner.has_four(Piece::A) || scanner.has_four(Piece::B) || grid.is_full()
}

/// The automated opponent: always plays `Piece::B`.
pub struct MinimaxAgent {
    depth: Option<usize>,
    vertical_shortcut: bool,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    /// Agent using the width-based depth schedule and the material heuristic.
    pub fn new() -> Self {
        MinimaxAgent {
            depth: None,
            vertical_shortcut: false,
            heuristic: Box::new(MaterialHeuristic),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        MinimaxAgent {
            depth: config.depth,
            vertical_shortcut: config.vertical_shortcut,
            heuristic: Box::new(MaterialHeuristic),
        }
    }

    /// Search exactly `depth` plies regardless of grid width.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Before searching, complete any vertical stack of three B pieces.
    ///
    /// This only looks at columns and only at B's own stacks; horizontal and
    /// diagonal threats, and A's threats, are left to search.
    pub fn with_vertical_shortcut(mut self, enabled: bool) -> Self {
        self.vertical_shortcut = enabled;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Depth used on `grid`.
    pub fn depth_for(&self, grid: &Grid) -> usize {
        self.depth.unwrap_or_else(|| depth_for_columns(grid.cols()))
    }

    /// Pick a column for B, searching in place on `grid`.
    ///
    /// The grid is left as it was found. Returns `None` only when every
    /// column is full.
    pub fn choose(&self, grid: &mut Grid) -> Option<usize> {
        if self.vertical_shortcut {
            if let Some((_, col)) = LineScanner::new(grid).stacked_three(Piece::B) {
                debug!("vertical shortcut: completing stack in column {col}");
                return Some(col);
            }
        }

        let depth = self.depth_for(grid);
        let result = search(grid, depth, true, self.heuristic.as_ref());
        trace!(
            "search depth {depth}: column {:?}, score {}",
            result.column,
            result.score
        );

        // A root that is already terminal still has to move somewhere.
        result.column.or_else(|| grid.open_columns().next())
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, grid: &Grid) -> Option<usize> {
        let mut scratch = grid.clone();
        self.choose(&mut scratch)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
