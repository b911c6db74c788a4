//! Per-cell transient markers layered over the terrain.
//!
//! Each cell holds a small set of tagged markers: player occupancy, bomb
//! presence and blast stages. The grid is a primitive container; occupancy
//! and placement rules are enforced by the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::blast::BlastStage;
use crate::core::{PlayerId, Position};

/// A transient marker on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The player stands here.
    PlayerOccupant(PlayerId),
    /// A bomb with a running fuse sits here.
    BombPresent,
    /// The cell is inside a blast footprint at this stage.
    Blast(BlastStage),
}

impl Marker {
    /// Compact integer code: players are negative, bomb is `1`, blast stages
    /// are `2..=5`.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Marker::PlayerOccupant(player) => player.code(),
            Marker::BombPresent => 1,
            Marker::Blast(stage) => stage.code() as i8,
        }
    }
}

/// Set of markers on one cell. Inline for the common small case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellMarkers {
    markers: SmallVec<[Marker; 4]>,
}

impl CellMarkers {
    /// Add a marker. Returns false if it was already present.
    pub fn insert(&mut self, marker: Marker) -> bool {
        if self.contains(marker) {
            return false;
        }
        self.markers.push(marker);
        true
    }

    /// Remove a marker. Returns false if it was absent.
    pub fn remove(&mut self, marker: Marker) -> bool {
        match self.markers.iter().position(|&m| m == marker) {
            Some(i) => {
                self.markers.remove(i);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// Whether a bomb sits on this cell.
    #[must_use]
    pub fn has_bomb(&self) -> bool {
        self.contains(Marker::BombPresent)
    }

    /// Blast stages present on this cell.
    pub fn blast_stages(&self) -> impl Iterator<Item = BlastStage> + '_ {
        self.markers.iter().filter_map(|m| match m {
            Marker::Blast(stage) => Some(*stage),
            _ => None,
        })
    }

    /// Drop every blast marker, keeping players and bombs.
    pub fn clear_blasts(&mut self) {
        self.markers.retain(|m| !matches!(m, Marker::Blast(_)));
    }

    pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
        self.markers.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }
}

/// Marker sets for every cell of a board, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellMarkers>,
}

impl MarkerGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellMarkers::default(); rows * cols],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Add `marker` at `pos`. Off-board positions are ignored.
    pub fn add(&mut self, pos: Position, marker: Marker) -> bool {
        match self.index(pos) {
            Some(i) => self.cells[i].insert(marker),
            None => false,
        }
    }

    /// Remove `marker` from `pos`.
    pub fn remove(&mut self, pos: Position, marker: Marker) -> bool {
        match self.index(pos) {
            Some(i) => self.cells[i].remove(marker),
            None => false,
        }
    }

    /// Whether `marker` is present at `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position, marker: Marker) -> bool {
        self.at(pos).map_or(false, |cell| cell.contains(marker))
    }

    /// The marker set of a cell.
    #[must_use]
    pub fn at(&self, pos: Position) -> Option<&CellMarkers> {
        self.index(pos).and_then(|i| self.cells.get(i))
    }

    /// Markers at `pos` (empty when off the board).
    #[must_use]
    pub fn markers_at(&self, pos: Position) -> Vec<Marker> {
        self.at(pos).map(|c| c.iter().collect()).unwrap_or_default()
    }

    /// Iterate over `(position, markers)` for every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &CellMarkers)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / cols, i % cols), cell))
    }

    /// Mutable iteration over every cell, row-major.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Position, &mut CellMarkers)> {
        let cols = self.cols;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / cols, i % cols), cell))
    }

    /// Positions carrying `marker`, row-major.
    #[must_use]
    pub fn positions_with(&self, marker: Marker) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.contains(marker))
            .map(|(pos, _)| pos)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_markers_set_semantics() {
        let mut cell = CellMarkers::default();
        assert!(cell.insert(Marker::BombPresent));
        assert!(!cell.insert(Marker::BombPresent));
        assert_eq!(cell.len(), 1);

        assert!(cell.insert(Marker::Blast(BlastStage::Kindled)));
        assert!(cell.has_bomb());
        assert!(cell.remove(Marker::BombPresent));
        assert!(!cell.remove(Marker::BombPresent));
        assert!(!cell.has_bomb());
    }

    #[test]
    fn test_clear_blasts_keeps_others() {
        let mut cell = CellMarkers::default();
        cell.insert(Marker::PlayerOccupant(PlayerId::new(0)));
        cell.insert(Marker::Blast(BlastStage::Kindled));
        cell.insert(Marker::Blast(BlastStage::Explosion));

        assert_eq!(cell.blast_stages().count(), 2);
        cell.clear_blasts();
        assert_eq!(cell.blast_stages().count(), 0);
        assert!(cell.contains(Marker::PlayerOccupant(PlayerId::new(0))));
    }

    #[test]
    fn test_grid_add_remove() {
        let mut grid = MarkerGrid::new(3, 3);
        let pos = Position::new(1, 2);

        assert!(grid.add(pos, Marker::BombPresent));
        assert!(grid.contains(pos, Marker::BombPresent));
        assert_eq!(grid.markers_at(pos), vec![Marker::BombPresent]);
        assert_eq!(grid.positions_with(Marker::BombPresent), vec![pos]);

        assert!(grid.remove(pos, Marker::BombPresent));
        assert!(grid.markers_at(pos).is_empty());
    }

    #[test]
    fn test_grid_off_board() {
        let mut grid = MarkerGrid::new(2, 2);
        let off = Position::new(2, 0);

        assert!(!grid.add(off, Marker::BombPresent));
        assert!(!grid.contains(off, Marker::BombPresent));
        assert!(grid.markers_at(off).is_empty());
    }

    #[test]
    fn test_marker_codes() {
        assert_eq!(Marker::PlayerOccupant(PlayerId::new(0)).code(), -1);
        assert_eq!(Marker::PlayerOccupant(PlayerId::new(1)).code(), -2);
        assert_eq!(Marker::BombPresent.code(), 1);
        assert_eq!(Marker::Blast(BlastStage::Kindled).code(), 2);
        assert_eq!(Marker::Blast(BlastStage::Explosion).code(), 5);
    }
}
