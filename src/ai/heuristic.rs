use crate::game::{Cell, Grid, LineScanner, Piece, Window};

/// Score for a completed line. Large enough to dominate any sum of partial
/// windows, and held in `i64` so several completed windows never overflow.
pub const WIN_SCORE: i64 = i32::MAX as i64;

/// Trait for scoring a grid from the automated side's (`Piece::B`) point of
/// view. Positive favours B, negative favours A.
pub trait Heuristic: Send {
    fn score_window(&self, window: &Window) -> i64;

    /// Sum of [`Heuristic::score_window`] over every window on the grid.
    fn score_grid(&self, grid: &Grid) -> i64 {
        LineScanner::new(grid)
            .windows()
            .map(|window| self.score_window(&window))
            .sum()
    }
}

/// Counts pieces per window: a full line is decisive, otherwise the score is
/// B's pieces minus A's pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialHeuristic;

impl Heuristic for MaterialHeuristic {
    fn score_window(&self, window: &Window) -> i64 {
        let mut a = 0;
        let mut b = 0;
        for &cell in window {
            match cell {
                Cell::Taken(Piece::A) => a += 1,
                Cell::Taken(Piece::B) => b += 1,
                Cell::Empty => {}
            }
        }

        if b == 4 {
            WIN_SCORE
        } else if a == 4 {
            -WIN_SCORE
        } else {
            b - a
        }
    }
}
