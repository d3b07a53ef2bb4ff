use super::piece::Piece;

/// Games won by each side over a session of rematches on the same board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    a: u32,
    b: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, piece: Piece) -> u32 {
        match piece {
            Piece::A => self.a,
            Piece::B => self.b,
        }
    }

    /// Give one point to `piece`.
    pub fn award(&mut self, piece: Piece) {
        match piece {
            Piece::A => self.a += 1,
            Piece::B => self.b += 1,
        }
    }

    /// `(score of A, score of B)`
    pub fn pair(&self) -> (u32, u32) {
        (self.a, self.b)
    }

    /// True while neither side has scored yet.
    pub fn is_zero_tie(&self) -> bool {
        self.a == 0 && self.b == 0
    }

    /// The side with strictly more points, if any.
    pub fn leader(&self) -> Option<Piece> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(Piece::A),
            std::cmp::Ordering::Less => Some(Piece::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}
