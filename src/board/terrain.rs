//! Static terrain grid.
//!
//! The only terrain mutation after construction is a finished blast turning
//! a Void or Land cell into Land. Blocks are permanent.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Terrain of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Nothing to stand on. Blasts pass through and turn it into Land.
    #[default]
    Void,
    /// Walkable floor.
    Land,
    /// Indestructible obstacle; stops blasts and movement.
    Block,
}

impl Terrain {
    /// Compact integer code (`0` void, `1` land, `2` block).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Terrain::Void => 0,
            Terrain::Land => 1,
            Terrain::Block => 2,
        }
    }

    /// Whether a player may stand on this terrain.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Terrain::Land)
    }
}

/// Fixed-size 2D terrain grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Terrain>,
}

impl Board {
    /// Create a board filled with `Void`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Terrain::Void)
    }

    /// Create a board with every cell set to `terrain`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, terrain: Terrain) -> Self {
        Self {
            rows,
            cols,
            cells: vec![terrain; rows * cols],
        }
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Terrain at `pos`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Terrain> {
        self.index(pos).and_then(|i| self.cells.get(i).copied())
    }

    /// Set the terrain at `pos`. Off-board positions are ignored.
    pub fn set(&mut self, pos: Position, terrain: Terrain) {
        if let Some(cell) = self.index(pos).and_then(|i| self.cells.get_mut(i)) {
            *cell = terrain;
        }
    }

    /// Set terrain using signed indices, where `-1` is the last
    /// row or column. Used to describe mirrored layouts compactly.
    pub(crate) fn set_signed(&mut self, row: isize, col: isize, terrain: Terrain) {
        let wrap = |i: isize, len: usize| {
            if i < 0 {
                len as isize + i
            } else {
                i
            }
        };
        let (r, c) = (wrap(row, self.rows), wrap(col, self.cols));
        if r >= 0 && c >= 0 {
            self.set(Position::new(r as usize, c as usize), terrain);
        }
    }

    /// Iterate over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Position::new(r, c)))
    }

    /// All positions holding `terrain`, row-major.
    #[must_use]
    pub fn positions_of(&self, terrain: Terrain) -> Vec<Position> {
        self.positions()
            .filter(|&p| self.get(p) == Some(terrain))
            .collect()
    }

    /// Number of cells holding `terrain`.
    #[must_use]
    pub fn count(&self, terrain: Terrain) -> usize {
        self.cells.iter().filter(|&&t| t == terrain).count()
    }

    /// Whether the cell buffer matches the dimensions. Only a board
    /// deserialized from foreign data can fail this.
    pub(crate) fn is_consistent(&self) -> bool {
        self.rows.checked_mul(self.cols) == Some(self.cells.len())
    }

    pub(crate) fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }
}
