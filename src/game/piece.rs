use std::fmt;

use super::grid::Cell;

/// One of the two marks that can occupy a cell.
///
/// `A` is the side that opens every game (the human player); `B` is the side
/// the automated opponent plays and the one search maximizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    A,
    B,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::A => Piece::B,
            Piece::B => Piece::A,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Taken(self)
    }

    /// Single-character symbol used when rendering a grid
    pub fn symbol(self) -> char {
        match self {
            Piece::A => 'X',
            Piece::B => 'O',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
