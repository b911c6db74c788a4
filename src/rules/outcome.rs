//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a game as seen from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game has not ended.
    Ongoing,
    /// Nobody survived.
    Draw,
    /// Sole survivor.
    Winner(PlayerId),
}

impl Outcome {
    /// Derive the outcome from the ended flag and the alive flags in
    /// registration order.
    #[must_use]
    pub fn from_alive(ended: bool, alive: impl IntoIterator<Item = (PlayerId, bool)>) -> Self {
        if !ended {
            return Outcome::Ongoing;
        }
        alive
            .into_iter()
            .find(|&(_, is_alive)| is_alive)
            .map_or(Outcome::Draw, |(player, _)| Outcome::Winner(player))
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => f.write_str("ongoing"),
            Outcome::Draw => f.write_str("draw"),
            Outcome::Winner(player) => f.write_str(&player.label()),
        }
    }
}
