//! Board coordinates and the four movement directions.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, row-major.
///
/// Rows grow downwards, columns grow to the right. `(0, 0)` is the
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the board's business (see `Board::contains`).
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = offset(self.row, dr, distance)?;
        let col = offset(self.col, dc, distance)?;
        Some(Self { row, col })
    }
}

fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        d if d > 0 => base.checked_add(distance),
        _ => base.checked_sub(distance),
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in ray-cast order.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// (row, col) delta of a single step.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
