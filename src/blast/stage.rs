//! Blast overlay stages.
//!
//! Every cell inside a bomb's footprint is marked `Kindled` at placement and
//! advances one stage per frame. `Explosion` is lethal and lasts exactly one
//! frame; when it expires the cell becomes Land.

use serde::{Deserialize, Serialize};

/// Stage of the blast overlay on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlastStage {
    /// Just marked by a freshly placed bomb.
    Kindled,
    /// Second frame of the countdown.
    Smoldering,
    /// Last warning frame.
    Flaring,
    /// Lethal explosion frame.
    Explosion,
}

impl BlastStage {
    /// All stages in countdown order.
    pub const ALL: [BlastStage; 4] = [
        BlastStage::Kindled,
        BlastStage::Smoldering,
        BlastStage::Flaring,
        BlastStage::Explosion,
    ];

    /// Stage reached after one more frame. `None` once the explosion expires.
    #[must_use]
    pub const fn next(self) -> Option<BlastStage> {
        match self {
            BlastStage::Kindled => Some(BlastStage::Smoldering),
            BlastStage::Smoldering => Some(BlastStage::Flaring),
            BlastStage::Flaring => Some(BlastStage::Explosion),
            BlastStage::Explosion => None,
        }
    }

    /// Whether a player standing in this stage dies.
    #[must_use]
    pub const fn is_lethal(self) -> bool {
        matches!(self, BlastStage::Explosion)
    }

    /// 1-based level (`1` kindled .. `4` explosion), used for snapshot buckets.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            BlastStage::Kindled => 1,
            BlastStage::Smoldering => 2,
            BlastStage::Flaring => 3,
            BlastStage::Explosion => 4,
        }
    }

    /// Compact overlay code (`2..=5`).
    #[must_use]
    pub const fn code(self) -> u8 {
        self.level() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain() {
        let mut stage = BlastStage::Kindled;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            seen.push(next);
            stage = next;
        }
        assert_eq!(seen, BlastStage::ALL.to_vec());
    }

    #[test]
    fn test_only_explosion_is_lethal() {
        let lethal: Vec<_> = BlastStage::ALL.into_iter().filter(|s| s.is_lethal()).collect();
        assert_eq!(lethal, vec![BlastStage::Explosion]);
    }

    #[test]
    fn test_levels_and_codes() {
        for (i, stage) in BlastStage::ALL.into_iter().enumerate() {
            assert_eq!(stage.level() as usize, i + 1);
            assert_eq!(stage.code() as usize, i + 2);
        }
    }
}
