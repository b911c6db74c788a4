//! Map layouts: terrain plus the two spawn corners.
//!
//! Built-in layouts are fixed, no randomness. Every corner gets a three-cell
//! Land pocket (the corner and its two neighbours) so a player always has
//! somewhere to step; the rest of the map starts as Void or Block and opens up
//! as blasts convert cells to Land.

use serde::{Deserialize, Serialize};

use super::terrain::{Board, Terrain};
use crate::core::Position;
use crate::error::{GameError, Result};

/// Terrain grid and spawn slots for a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapLayout {
    pub board: Board,
    /// Spawn cells in registration order: top-left, bottom-right.
    pub spawns: [Position; 2],
}

/// Signed (row, col) block placements for the 7x11 standard map.
const STANDARD_BLOCKS: &[(isize, isize)] = &[
    // corner clusters
    (1, 1), (2, 2), (2, 1),
    (-2, 1), (-3, 1), (-3, 2),
    (-2, -2), (-3, -3), (-3, -2),
    (1, -2), (2, -3), (2, -2),
    // edge pillars
    (0, 3), (0, -4),
    (-1, 3), (-1, -4),
    // centre
    (2, 5), (3, 5), (4, 5), (3, 4), (3, -5),
];

/// Block placements for the 15x22 map, letter by letter.
const IBM_BLOCKS: &[(isize, isize)] = &[
    // I
    (3, 2), (3, 3), (5, 2), (5, 3),
    (7, 2), (7, 3), (9, 2), (9, 3),
    (11, 2), (11, 3),
    // B
    (3, 6), (3, 7), (3, 9),
    (5, 7), (5, 10),
    (7, 7), (7, 9),
    (9, 7), (9, 10),
    (11, 6), (11, 7), (11, 9),
    // M
    (3, 13), (3, 15), (3, 17), (3, 19),
    (5, 13), (5, 16), (5, 19),
    (7, 13), (7, 16), (7, 19),
    (9, 13), (9, 19),
    (11, 13), (11, 19),
];

impl MapLayout {
    /// The 7x11 standard map.
    #[must_use]
    pub fn standard() -> Self {
        Self::carved(7, 11, STANDARD_BLOCKS)
    }

    /// The 15x22 letter map.
    #[must_use]
    pub fn ibm() -> Self {
        Self::carved(15, 22, IBM_BLOCKS)
    }

    /// Void board with Land corner pockets and the given blocks.
    fn carved(rows: usize, cols: usize, blocks: &[(isize, isize)]) -> Self {
        let mut board = Board::new(rows, cols);

        for (r, c) in [(0, 0), (0, -1), (-1, 0), (-1, -1)] {
            let dr = if r < 0 { -1 } else { 1 };
            let dc = if c < 0 { -1 } else { 1 };
            board.set_signed(r, c, Terrain::Land);
            board.set_signed(r, c + dc, Terrain::Land);
            board.set_signed(r + dr, c, Terrain::Land);
        }

        for &(r, c) in blocks {
            board.set_signed(r, c, Terrain::Block);
        }

        Self::with_corner_spawns(board)
    }

    fn with_corner_spawns(board: Board) -> Self {
        let spawns = Self::corners(&board);
        Self { board, spawns }
    }

    /// Top-left and bottom-right corners of `board`.
    fn corners(board: &Board) -> [Position; 2] {
        let (rows, cols) = board.dimensions();
        [
            Position::new(0, 0),
            Position::new(rows.saturating_sub(1), cols.saturating_sub(1)),
        ]
    }

    /// Parse a layout from text rows.
    ///
    /// `.` is Land, `#` is Block, `_` is Void. Spawns are the top-left and
    /// bottom-right corners, which must be Land.
    ///
    /// ```
    /// use rust_bomber::board::MapLayout;
    ///
    /// let layout = MapLayout::from_ascii(&[
    ///     "..#",
    ///     "_..",
    /// ]).unwrap();
    /// assert_eq!(layout.board.dimensions(), (2, 3));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(GameError::configuration("layout has no cells"));
        }

        let mut board = Board::new(rows.len(), width);
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(GameError::configuration(format!(
                    "layout row {} has {} cells, expected {}",
                    r,
                    line.chars().count(),
                    width
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                let terrain = match ch {
                    '.' => Terrain::Land,
                    '#' => Terrain::Block,
                    '_' => Terrain::Void,
                    other => {
                        return Err(GameError::configuration(format!(
                            "unknown layout cell {:?} at ({}, {})",
                            other, r, c
                        )))
                    }
                };
                board.set(Position::new(r, c), terrain);
            }
        }

        let layout = Self::with_corner_spawns(board);
        layout.validate()?;
        Ok(layout)
    }

    /// Check that the board is well formed and that the spawns are its two
    /// opposite corners, distinct and walkable.
    pub fn validate(&self) -> Result<()> {
        if !self.board.is_consistent() {
            let (rows, cols) = self.board.dimensions();
            return Err(GameError::configuration(format!(
                "board cells do not match its {}x{} dimensions",
                rows, cols
            )));
        }
        if self.spawns != Self::corners(&self.board) {
            return Err(GameError::configuration(format!(
                "spawns {} and {} are not the top-left and bottom-right corners",
                self.spawns[0], self.spawns[1]
            )));
        }
        if self.spawns[0] == self.spawns[1] {
            return Err(GameError::configuration(
                "layout is too small for two distinct spawns",
            ));
        }
        for spawn in self.spawns {
            if self.board.get(spawn) != Some(Terrain::Land) {
                return Err(GameError::configuration(format!(
                    "spawn {} is not Land",
                    spawn
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pockets(layout: &MapLayout) {
        let (rows, cols) = layout.board.dimensions();
        let (lr, lc) = (rows - 1, cols - 1);
        let pockets = [
            (0, 0), (0, 1), (1, 0),
            (0, lc), (0, lc - 1), (1, lc),
            (lr, 0), (lr - 1, 0), (lr, 1),
            (lr, lc), (lr - 1, lc), (lr, lc - 1),
        ];
        for (r, c) in pockets {
            assert_eq!(
                layout.board.get(Position::new(r, c)),
                Some(Terrain::Land),
                "corner pocket cell ({}, {})",
                r,
                c
            );
        }
    }

    #[test]
    fn test_standard_layout() {
        let layout = MapLayout::standard();
        assert_eq!(layout.board.dimensions(), (7, 11));
        assert_eq!(layout.spawns, [Position::new(0, 0), Position::new(6, 10)]);
        assert_pockets(&layout);

        assert_eq!(layout.board.count(Terrain::Block), STANDARD_BLOCKS.len());
        assert_eq!(layout.board.count(Terrain::Land), 12);
        assert_eq!(layout.board.get(Position::new(3, 5)), Some(Terrain::Block));
        assert_eq!(layout.board.get(Position::new(3, 6)), Some(Terrain::Block));
        assert_eq!(layout.board.get(Position::new(3, 3)), Some(Terrain::Void));
        layout.validate().unwrap();
    }

    #[test]
    fn test_ibm_layout() {
        let layout = MapLayout::ibm();
        assert_eq!(layout.board.dimensions(), (15, 22));
        assert_eq!(layout.spawns, [Position::new(0, 0), Position::new(14, 21)]);
        assert_pockets(&layout);

        assert_eq!(layout.board.count(Terrain::Block), IBM_BLOCKS.len());
        assert_eq!(layout.board.get(Position::new(7, 16)), Some(Terrain::Block));
        layout.validate().unwrap();
    }

    #[test]
    fn test_from_ascii() {
        let layout = MapLayout::from_ascii(&["..#", "_#.", "..."]).unwrap();

        assert_eq!(layout.board.dimensions(), (3, 3));
        assert_eq!(layout.spawns, [Position::new(0, 0), Position::new(2, 2)]);
        assert_eq!(layout.board.get(Position::new(0, 2)), Some(Terrain::Block));
        assert_eq!(layout.board.get(Position::new(1, 0)), Some(Terrain::Void));
        assert_eq!(layout.board.get(Position::new(1, 2)), Some(Terrain::Land));
    }

    #[test]
    fn test_from_ascii_rejects_bad_input() {
        assert!(MapLayout::from_ascii(&[]).is_err());
        assert!(MapLayout::from_ascii(&["..", "..."]).is_err());
        assert!(MapLayout::from_ascii(&[".x", ".."]).is_err());
        // spawn on a block
        assert!(MapLayout::from_ascii(&["#.", ".."]).is_err());
        // single cell: both spawns coincide
        assert!(MapLayout::from_ascii(&["."]).is_err());
    }

    #[test]
    fn test_validate_rejects_mismatched_board() {
        let json = r#"{
            "board": {"rows": 3, "cols": 3, "cells": ["Land", "Land", "Land", "Land"]},
            "spawns": [{"row": 0, "col": 0}, {"row": 2, "col": 2}]
        }"#;
        let layout: MapLayout = serde_json::from_str(json).unwrap();

        assert!(matches!(
            layout.validate(),
            Err(GameError::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_moved_spawns() {
        let mut layout = MapLayout::from_ascii(&["...", "...", "..."]).unwrap();
        layout.spawns[1] = Position::new(1, 1);
        assert!(matches!(
            layout.validate(),
            Err(GameError::Configuration { .. })
        ));

        layout.spawns = [Position::new(2, 2), Position::new(0, 0)];
        assert!(layout.validate().is_err());
    }
}
