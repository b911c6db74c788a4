//! Bomb placement, footprint ray cast and the per-frame hazard pass.
//!
//! The whole footprint is marked eagerly when the bomb is placed, so the
//! danger zone is visible for the full countdown. Blocks stop a ray and are
//! never marked or destroyed; Void cells are marked and become Land when the
//! explosion on them expires.

use smallvec::SmallVec;

use super::fuse::FuseTracker;
use super::stage::BlastStage;
use crate::board::{Board, Marker, MarkerGrid, Terrain};
use crate::core::{Direction, Position};

/// What changed during one hazard pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HazardReport {
    /// Cells whose bomb detonated and was removed.
    pub detonated: Vec<Position>,
    /// Cells whose explosion expired and were converted to Land.
    pub converted: Vec<Position>,
}

/// Cells covered by a blast from `origin`: the origin plus up to `range`
/// cells in each direction, each ray stopping before the first Block or the
/// board edge.
///
/// An origin that is off the board or a Block yields an empty footprint.
#[must_use]
pub fn footprint(board: &Board, origin: Position, range: usize) -> Vec<Position> {
    match board.get(origin) {
        None | Some(Terrain::Block) => return Vec::new(),
        Some(_) => {}
    }

    let mut cells = Vec::with_capacity(1 + range * 4);
    cells.push(origin);

    for direction in Direction::ALL {
        for distance in 1..=range {
            let Some(pos) = origin.step(direction, distance) else {
                break;
            };
            match board.get(pos) {
                None | Some(Terrain::Block) => break,
                Some(_) => cells.push(pos),
            }
        }
    }

    cells
}

/// Place a bomb at `origin`: bomb marker, fuse at stage 1 and the whole
/// footprint marked `Kindled`.
///
/// Placing on a cell that already holds a bomb re-arms its fuse. Returns the
/// footprint.
pub fn place_bomb(
    board: &Board,
    markers: &mut MarkerGrid,
    fuses: &mut FuseTracker,
    origin: Position,
    range: usize,
) -> Vec<Position> {
    markers.add(origin, Marker::BombPresent);
    fuses.arm(origin);

    let cells = footprint(board, origin, range);
    for &pos in &cells {
        markers.add(pos, Marker::Blast(BlastStage::Kindled));
    }
    cells
}

/// Advance fuses and blast overlays by one frame.
///
/// Fuses at their last stage detonate and lose their bomb marker; the others
/// gain a stage. Each cell's blast stages are read before the cell is
/// rewritten, so a stage written this pass is never advanced twice. An
/// expiring explosion clears from the cell and turns its terrain to Land.
pub fn advance_hazards(
    board: &mut Board,
    markers: &mut MarkerGrid,
    fuses: &mut FuseTracker,
) -> HazardReport {
    let mut report = HazardReport {
        detonated: fuses.advance(),
        converted: Vec::new(),
    };

    for &pos in &report.detonated {
        markers.remove(pos, Marker::BombPresent);
    }

    for (pos, cell) in markers.iter_mut() {
        let stages: SmallVec<[BlastStage; 4]> = cell.blast_stages().collect();
        if stages.is_empty() {
            continue;
        }

        cell.clear_blasts();
        for stage in stages {
            match stage.next() {
                Some(next) => {
                    cell.insert(Marker::Blast(next));
                }
                None => {
                    board.set(pos, Terrain::Land);
                    report.converted.push(pos);
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MapLayout;
    use crate::core::BLAST_RANGE;

    fn open_board(rows: usize, cols: usize) -> Board {
        Board::filled(rows, cols, Terrain::Land)
    }

    #[test]
    fn test_footprint_open_board() {
        let board = open_board(7, 7);
        let cells = footprint(&board, Position::new(3, 3), 2);
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&Position::new(1, 3)));
        assert!(cells.contains(&Position::new(3, 5)));
        assert!(!cells.contains(&Position::new(2, 2)));
    }

    #[test]
    fn test_footprint_clipped_by_edges() {
        let board = open_board(7, 11);
        let cells = footprint(&board, Position::new(0, 0), 2);
        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(0, 2),
            ]
        );
    }

    #[test]
    fn test_footprint_stops_at_block() {
        let layout = MapLayout::from_ascii(&[".#...", ".....", "....."]).unwrap();
        let cells = footprint(&layout.board, Position::new(0, 0), 2);

        assert!(!cells.contains(&Position::new(0, 1)));
        assert!(!cells.contains(&Position::new(0, 2)));
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn test_footprint_passes_through_void() {
        let standard = MapLayout::standard();
        // (0, 2) is void, (0, 3) is a block
        let cells = footprint(&standard.board, Position::new(0, 1), BLAST_RANGE);
        assert!(cells.contains(&Position::new(0, 2)));
        assert!(!cells.contains(&Position::new(0, 3)));
        // (1, 1) is a block directly below
        assert!(!cells.contains(&Position::new(1, 1)));
    }

    #[test]
    fn test_footprint_of_block_is_empty() {
        let layout = MapLayout::from_ascii(&["..", "#."]).unwrap();
        assert!(footprint(&layout.board, Position::new(1, 0), 2).is_empty());
        assert!(footprint(&layout.board, Position::new(9, 9), 2).is_empty());
    }

    #[test]
    fn test_stage_chain_and_land_conversion() {
        let mut board = Board::new(1, 3);
        board.set(Position::new(0, 0), Terrain::Land);
        let mut markers = MarkerGrid::new(1, 3);
        let mut fuses = FuseTracker::new(1, 3);
        let origin = Position::new(0, 0);

        place_bomb(&board, &mut markers, &mut fuses, origin, 2);
        let far = Position::new(0, 2);
        assert!(markers.contains(far, Marker::Blast(BlastStage::Kindled)));

        for stage in [BlastStage::Smoldering, BlastStage::Flaring, BlastStage::Explosion] {
            let report = advance_hazards(&mut board, &mut markers, &mut fuses);
            assert!(report.converted.is_empty());
            assert_eq!(markers.markers_at(far), vec![Marker::Blast(stage)]);
        }
        assert_eq!(board.get(far), Some(Terrain::Void));
        assert_eq!(fuses.stage(origin), 4);

        let report = advance_hazards(&mut board, &mut markers, &mut fuses);
        assert_eq!(report.detonated, vec![origin]);
        assert_eq!(report.converted.len(), 3);
        assert_eq!(board.count(Terrain::Land), 3);
        assert!(markers.iter().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn test_overlapping_stages_advance_once() {
        let board = open_board(1, 5);
        let mut board_mut = board.clone();
        let mut markers = MarkerGrid::new(1, 5);
        let mut fuses = FuseTracker::new(1, 5);

        place_bomb(&board, &mut markers, &mut fuses, Position::new(0, 0), 2);
        advance_hazards(&mut board_mut, &mut markers, &mut fuses);
        place_bomb(&board, &mut markers, &mut fuses, Position::new(0, 2), 2);

        let shared = Position::new(0, 1);
        advance_hazards(&mut board_mut, &mut markers, &mut fuses);

        let mut stages: Vec<_> = markers.at(shared).unwrap().blast_stages().collect();
        stages.sort();
        assert_eq!(stages, vec![BlastStage::Smoldering, BlastStage::Flaring]);
    }
}
