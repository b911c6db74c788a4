//! Recorded rollouts.
//!
//! The engine is deterministic, so a trajectory only needs the scheme, the
//! seed and the action pair of every frame to be replayed exactly.

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, MapScheme, PlayerId, PLAYER_SLOTS};
use crate::engine::Game;
use crate::error::Result;
use crate::rules::Outcome;

/// Actions applied during one frame advance, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Frame reached by the advance.
    pub frame: u32,
    pub actions: [Action; PLAYER_SLOTS],
}

/// A complete rollout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    pub seed: u64,
    pub scheme: MapScheme,
    pub frames: Vec<FrameRecord>,
    /// `Ongoing` when the rollout hit its frame cap.
    pub outcome: Outcome,
}

impl Trajectory {
    pub fn new(seed: u64, scheme: MapScheme) -> Self {
        Self {
            seed,
            scheme,
            frames: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    pub fn push(&mut self, record: FrameRecord) {
        self.frames.push(record);
    }

    /// Number of frame advances played.
    #[must_use]
    pub fn frames_played(&self) -> usize {
        self.frames.len()
    }

    /// Whether the rollout stopped at its cap before the game ended.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        !self.outcome.is_over()
    }

    /// Actions taken by `player`, in frame order.
    pub fn player_actions(&self, player: PlayerId) -> impl Iterator<Item = Action> + '_ {
        self.frames
            .iter()
            .filter_map(move |record| record.actions.get(player.index()).copied())
    }

    /// Re-run every recorded frame on a fresh game.
    ///
    /// The returned game ends in the recorded outcome.
    pub fn replay(&self) -> Result<Game> {
        let mut game = Game::new(GameConfig::new(self.scheme.clone()).with_seed(self.seed))?;
        let players: Vec<PlayerId> = PlayerId::all(PLAYER_SLOTS)
            .map(|id| game.register_player(id.label()))
            .collect::<Result<_>>()?;
        game.start()?;

        for record in &self.frames {
            for (&player, &action) in players.iter().zip(&record.actions) {
                game.queue_action(player, action)?;
            }
            if !game.advance_frame()? {
                break;
            }
        }

        Ok(game)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bomb_at_spawn() -> Trajectory {
        let mut trajectory = Trajectory::new(4, MapScheme::Standard);
        trajectory.push(FrameRecord {
            frame: 2,
            actions: [Action::Bomb, Action::Still],
        });
        for frame in 3..=5 {
            trajectory.push(FrameRecord {
                frame,
                actions: [Action::Still, Action::Left],
            });
        }
        trajectory.outcome = Outcome::Winner(PlayerId::new(1));
        trajectory
    }

    #[test]
    fn test_replay_reaches_recorded_outcome() {
        let trajectory = bomb_at_spawn();
        let game = trajectory.replay().unwrap();

        assert_eq!(game.frame(), 5);
        assert_eq!(game.outcome(), trajectory.outcome);
        assert!(!trajectory.is_truncated());
        assert_eq!(trajectory.frames_played(), 4);
    }

    #[test]
    fn test_player_actions() {
        let trajectory = bomb_at_spawn();
        let first: Vec<_> = trajectory.player_actions(PlayerId::new(0)).collect();
        assert_eq!(first, vec![Action::Bomb, Action::Still, Action::Still, Action::Still]);
    }

    #[test]
    fn test_bytes_round_trip() {
        let trajectory = bomb_at_spawn();
        let bytes = trajectory.to_bytes().unwrap();
        assert_eq!(Trajectory::from_bytes(&bytes).unwrap(), trajectory);
    }
}
