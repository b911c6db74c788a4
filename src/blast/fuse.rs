//! Per-cell bomb fuse countdown.
//!
//! Stage `0` means no bomb. A placed bomb starts at `1` and gains one stage
//! per frame up to `FUSE_DETONATE`; the frame after that it detonates and the
//! cell returns to `0`.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Stage a fresh bomb starts at.
pub const FUSE_START: u8 = 1;

/// Last stage before the bomb clears.
pub const FUSE_DETONATE: u8 = 4;

/// One fuse entry per board cell, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuseTracker {
    rows: usize,
    cols: usize,
    stages: Vec<u8>,
}

impl FuseTracker {
    /// Tracker with no armed bombs.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            stages: vec![0; rows * cols],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Arm (or re-arm) the fuse at `pos` at stage 1.
    pub fn arm(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.stages[i] = FUSE_START;
        }
    }

    /// Fuse stage at `pos` (`0` when no bomb or off the board).
    #[must_use]
    pub fn stage(&self, pos: Position) -> u8 {
        self.index(pos).map_or(0, |i| self.stages[i])
    }

    /// Whether any fuse is running.
    #[must_use]
    pub fn any_armed(&self) -> bool {
        self.stages.iter().any(|&s| s != 0)
    }

    /// Armed cells with their stage, row-major.
    #[must_use]
    pub fn armed(&self) -> Vec<(Position, u8)> {
        self.stages
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != 0)
            .map(|(i, &s)| (Position::new(i / self.cols, i % self.cols), s))
            .collect()
    }

    /// Advance every fuse by one frame.
    ///
    /// Returns the cells whose bomb detonated (stage `4` reset to `0`).
    pub fn advance(&mut self) -> Vec<Position> {
        let cols = self.cols;
        let mut detonated = Vec::new();
        for (i, stage) in self.stages.iter_mut().enumerate() {
            match *stage {
                0 => {}
                FUSE_DETONATE => {
                    *stage = 0;
                    detonated.push(Position::new(i / cols, i % cols));
                }
                _ => *stage += 1,
            }
        }
        detonated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuse_lifecycle() {
        let mut fuses = FuseTracker::new(3, 3);
        let pos = Position::new(1, 1);
        fuses.arm(pos);
        assert_eq!(fuses.stage(pos), 1);

        for expected in 2..=4 {
            assert!(fuses.advance().is_empty());
            assert_eq!(fuses.stage(pos), expected);
        }

        assert_eq!(fuses.advance(), vec![pos]);
        assert_eq!(fuses.stage(pos), 0);
        assert!(!fuses.any_armed());
        assert!(fuses.advance().is_empty());
    }

    #[test]
    fn test_rearm_resets_stage() {
        let mut fuses = FuseTracker::new(2, 2);
        let pos = Position::new(0, 1);
        fuses.arm(pos);
        fuses.advance();
        fuses.advance();
        assert_eq!(fuses.stage(pos), 3);

        fuses.arm(pos);
        assert_eq!(fuses.stage(pos), 1);
    }

    #[test]
    fn test_independent_fuses() {
        let mut fuses = FuseTracker::new(2, 3);
        let a = Position::new(0, 0);
        let b = Position::new(1, 2);
        fuses.arm(a);
        fuses.advance();
        fuses.arm(b);

        assert_eq!(fuses.armed(), vec![(a, 2), (b, 1)]);
    }

    #[test]
    fn test_off_board_is_ignored() {
        let mut fuses = FuseTracker::new(2, 2);
        fuses.arm(Position::new(5, 5));
        assert!(!fuses.any_armed());
        assert_eq!(fuses.stage(Position::new(5, 5)), 0);
    }
}
