//! Player actions and their queued, normalized form.
//!
//! A player requests an `Action`. When it is queued the engine turns it into
//! a `QueuedAction`: moves become a concrete destination (already checked for
//! legality, falling back to the current cell) and `Bomb` becomes a placement
//! directive at wherever the player stands when the frame resolves.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::{Direction, Position};

/// An action a player can request for the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Still,
    Bomb,
}

impl Action {
    /// Every action, in a fixed order (useful for uniform sampling and
    /// action-space indexing).
    pub const ALL: [Action; 6] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Still,
        Action::Bomb,
    ];

    /// Movement direction, if this is a directional move.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Action::Up => Some(Direction::Up),
            Action::Down => Some(Direction::Down),
            Action::Left => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
            Action::Still | Action::Bomb => None,
        }
    }

    /// Position of this action in `Action::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
            Action::Still => 4,
            Action::Bomb => 5,
        }
    }

    /// Lowercase name (`"up"`, `"bomb"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Still => "still",
            Action::Bomb => "bomb",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown action {:?}", s))
    }
}

/// An entry of the action queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueuedAction {
    /// Relocate to this cell (may equal the current cell).
    MoveTo(Position),
    /// Place a bomb at the player's position when the frame resolves.
    PlaceBomb,
}

/// A requested action with the frame it was queued in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who requested the action.
    pub player: PlayerId,

    /// The action as requested.
    pub action: Action,

    /// Frame during which the action was queued.
    pub frame: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, frame: u32) -> Self {
        Self {
            player,
            action,
            frame,
        }
    }
}
