//! Rollout runner: plays whole games between two agents.

use tracing::debug;

use super::agent::Agent;
use super::trajectory::{FrameRecord, Trajectory};
use crate::core::{GameConfig, GameRng, MapScheme, PlayerId};
use crate::engine::Game;
use crate::error::Result;

/// Configuration for rollouts.
#[derive(Clone, Debug)]
pub struct RolloutConfig {
    pub scheme: MapScheme,

    /// Seeds both the game identifier and the agents' RNG streams.
    pub seed: u64,

    /// Frame advances after which a rollout is cut off.
    pub max_frames: usize,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            scheme: MapScheme::Standard,
            seed: 0,
            max_frames: 500,
        }
    }
}

impl RolloutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(mut self, scheme: MapScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_frames(mut self, max: usize) -> Self {
        self.max_frames = max;
        self
    }
}

/// Plays games between two agents and records them.
#[derive(Clone, Debug, Default)]
pub struct RolloutRunner {
    config: RolloutConfig,
}

impl RolloutRunner {
    pub fn new(config: RolloutConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    /// Play one game with the configured seed.
    pub fn play(&self, first: &mut dyn Agent, second: &mut dyn Agent) -> Result<Trajectory> {
        self.play_seeded(self.config.seed, first, second)
    }

    /// Play `games` games, the i-th seeded with `seed + i`.
    pub fn play_series(
        &self,
        games: usize,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
    ) -> Result<Vec<Trajectory>> {
        let mut trajectories = Vec::with_capacity(games);
        for i in 0..games as u64 {
            let seed = self.config.seed.wrapping_add(i);
            trajectories.push(self.play_seeded(seed, first, second)?);
        }
        Ok(trajectories)
    }

    fn play_seeded(
        &self,
        seed: u64,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
    ) -> Result<Trajectory> {
        let mut game = Game::new(GameConfig::new(self.config.scheme.clone()).with_seed(seed))?;
        let players = [
            game.register_player(PlayerId::new(0).label())?,
            game.register_player(PlayerId::new(1).label())?,
        ];
        game.start()?;

        let mut rng = GameRng::new(seed);
        let mut streams = [rng.fork(), rng.fork()];
        let mut trajectory = Trajectory::new(seed, self.config.scheme.clone());

        while !game.is_ended() && trajectory.frames_played() < self.config.max_frames {
            let snapshot = game.snapshot();
            let actions = [
                first.act(&snapshot, players[0], &mut streams[0]),
                second.act(&snapshot, players[1], &mut streams[1]),
            ];
            for (player, action) in players.into_iter().zip(actions) {
                game.queue_action(player, action)?;
            }
            game.advance_frame()?;
            trajectory.push(FrameRecord {
                frame: game.frame(),
                actions,
            });
        }

        trajectory.outcome = game.outcome();
        debug!(
            game = %game.id(),
            seed,
            first = first.name(),
            second = second.name(),
            frames = trajectory.frames_played(),
            outcome = %trajectory.outcome,
            "rollout finished"
        );

        Ok(trajectory)
    }
}
