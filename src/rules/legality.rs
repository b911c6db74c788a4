//! Movement legality.
//!
//! An illegal move is never an error: it degrades to staying in place, so
//! agents exploring the action space are not penalized with failures.

use crate::board::{Board, MarkerGrid};
use crate::core::{Action, Position, QueuedAction};

/// Whether a player may step onto `target`.
///
/// The target must be on the board, Land (not Void, not Block) and free of
/// bombs. Other players do not block movement.
#[must_use]
pub fn is_passable(board: &Board, markers: &MarkerGrid, target: Position) -> bool {
    board.get(target).map_or(false, |terrain| terrain.is_walkable())
        && !markers.at(target).map_or(false, |cell| cell.has_bomb())
}

/// Cell a player at `from` ends up in after requesting `action`.
///
/// Non-movement actions and illegal moves stay at `from`.
#[must_use]
pub fn resolve_destination(
    board: &Board,
    markers: &MarkerGrid,
    from: Position,
    action: Action,
) -> Position {
    action
        .direction()
        .and_then(|direction| from.step(direction, 1))
        .filter(|&target| is_passable(board, markers, target))
        .unwrap_or(from)
}

/// Normalize a requested action into its queue entry.
#[must_use]
pub fn normalize(board: &Board, markers: &MarkerGrid, from: Position, action: Action) -> QueuedAction {
    match action {
        Action::Bomb => QueuedAction::PlaceBomb,
        _ => QueuedAction::MoveTo(resolve_destination(board, markers, from, action)),
    }
}
