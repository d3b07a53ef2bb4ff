use log::{debug, info};

use super::{Grid, LineScanner, Piece, ScoreBoard};
use crate::ai::MinimaxAgent;
use crate::config::EngineConfig;
use crate::error::EngineError;

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Piece),
    Tie,
}

/// Where a piece landed (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
}

/// A session of games on one board: the grid, whose turn it is, and the
/// running score across rematches.
///
/// Columns passed in by callers are 1-based, as a player would type them.
/// `Piece::A` always opens and `Piece::B` is the automated opponent.
pub struct MatchState {
    grid: Grid,
    current_turn: Piece,
    scores: ScoreBoard,
    last_outcome: Option<Outcome>,
    opponent: MinimaxAgent,
}

impl MatchState {
    /// Start a match on a `rows` x `cols` board (each in `4..=8`).
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        Self::with_opponent(rows, cols, MinimaxAgent::new())
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Self::with_opponent(
            config.board.rows,
            config.board.cols,
            MinimaxAgent::from_config(&config.search),
        )
    }

    pub fn with_opponent(
        rows: usize,
        cols: usize,
        opponent: MinimaxAgent,
    ) -> Result<Self, EngineError> {
        Ok(MatchState {
            grid: Grid::new(rows, cols)?,
            current_turn: Piece::A,
            scores: ScoreBoard::new(),
            last_outcome: None,
            opponent,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_turn(&self) -> Piece {
        self.current_turn
    }

    /// `(score of A, score of B)` over the whole session.
    pub fn scores(&self) -> (u32, u32) {
        self.scores.pair()
    }

    pub fn score_board(&self) -> &ScoreBoard {
        &self.scores
    }

    /// How the most recent game ended, until the next [`MatchState::reset_grid`].
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn in_range(&self, column: usize) -> bool {
        self.grid.in_range(column)
    }

    /// Whether 1-based `column` is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column == 0 || self.grid.is_column_full(column - 1)
    }

    pub fn is_board_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Drop the current player's piece into 1-based `column` and pass the
    /// turn. Returns the 0-based row the piece landed on.
    pub fn apply_human_move(&mut self, column: usize) -> Result<usize, EngineError> {
        if !self.in_range(column) {
            return Err(EngineError::ColumnOutOfRange {
                column,
                cols: self.grid.cols(),
            });
        }
        let col = column - 1;
        let row = self
            .grid
            .lowest_open_row(col)
            .ok_or(EngineError::ColumnFull(column))?;

        self.grid.drop(row, col, self.current_turn);
        self.current_turn = self.current_turn.other();
        Ok(row)
    }

    /// Let the automated opponent (`Piece::B`) pick a column and play it.
    pub fn apply_automated_move(&mut self) -> Result<Placement, EngineError> {
        if self.current_turn != Piece::B {
            return Err(EngineError::NotAutomatedTurn(self.current_turn));
        }

        let column = self
            .opponent
            .choose(&mut self.grid)
            .ok_or(EngineError::NoMoveAvailable)?;
        let row = self
            .grid
            .lowest_open_row(column)
            .ok_or(EngineError::NoMoveAvailable)?;

        self.grid.drop(row, column, Piece::B);
        self.current_turn = self.current_turn.other();
        debug!("automated move: column {} row {row}", column + 1);
        Ok(Placement { row, column })
    }

    /// Check whether the game just ended, without touching the score.
    ///
    /// `side_to_move` is the turn marker as it stands after the last
    /// placement, so a completed line is looked for on the other side, the
    /// one that just moved. A full grid without that line is a tie.
    pub fn detect_outcome(&self, side_to_move: Piece) -> Option<Outcome> {
        let mover = side_to_move.other();
        if LineScanner::new(&self.grid).has_four(mover) {
            Some(Outcome::Winner(mover))
        } else if self.grid.is_full() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }

    /// Credit the winner of `outcome` and remember it as the last result.
    pub fn record_outcome(&mut self, outcome: Outcome) {
        if let Outcome::Winner(piece) = outcome {
            self.scores.award(piece);
        }
        self.last_outcome = Some(outcome);
        let (a, b) = self.scores.pair();
        info!("game over: {outcome:?} (scores {a}-{b})");
    }

    /// [`MatchState::detect_outcome`] followed by
    /// [`MatchState::record_outcome`]. Call exactly once per half-move: every
    /// call that reports a win awards a point.
    pub fn is_game_over(&mut self, side_to_move: Piece) -> bool {
        match self.detect_outcome(side_to_move) {
            Some(outcome) => {
                self.record_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// The side to move concedes; its opponent takes the point.
    pub fn forfeit(&mut self) -> Outcome {
        let outcome = Outcome::Winner(self.current_turn.other());
        self.record_outcome(outcome);
        outcome
    }

    /// True while neither side has won a game this session.
    ///
    /// This is not "the last game was a tie" once anyone has scored; use
    /// [`MatchState::last_outcome`] for that.
    pub fn is_zero_tie(&self) -> bool {
        self.scores.is_zero_tie()
    }

    /// Session leader, or `None` when the scores are level.
    pub fn winner(&self) -> Option<Piece> {
        self.scores.leader()
    }

    /// Clear the board for a rematch. Scores carry over and A opens again.
    pub fn reset_grid(&mut self) {
        self.grid.reset();
        self.current_turn = Piece::A;
        self.last_outcome = None;
    }
}
