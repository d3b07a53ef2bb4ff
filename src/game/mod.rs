//! Core game logic: the gravity grid, line scanning, scores, and the match
//! state machine the presentation layer drives.

mod grid;
mod lines;
mod piece;
mod score;
mod state;

pub use grid::{Cell, Grid, MAX_SIZE, MIN_SIZE};
pub use lines::{window_count, Direction, LineScanner, Window, Windows, LINE_LEN};
pub use piece::Piece;
pub use score::ScoreBoard;
pub use state::{MatchState, Outcome, Placement};
