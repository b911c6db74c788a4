//! Agents that pick an action from a snapshot.

use std::collections::VecDeque;

use crate::core::{Action, GameRng, PlayerId};
use crate::snapshot::StatusSnapshot;

/// Chooses the next action for one player.
///
/// Agents only see the snapshot, never the game itself. Any randomness must
/// come from `rng` so rollouts stay reproducible from their seed.
pub trait Agent: Send {
    fn act(&mut self, snapshot: &StatusSnapshot, player: PlayerId, rng: &mut GameRng) -> Action;

    /// Short name for logs.
    fn name(&self) -> &str {
        "agent"
    }
}

/// Picks uniformly among all six actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformAgent;

impl Agent for UniformAgent {
    fn act(&mut self, _snapshot: &StatusSnapshot, _player: PlayerId, rng: &mut GameRng) -> Action {
        rng.choose(&Action::ALL).copied().unwrap_or(Action::Still)
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

/// Plays a fixed list of actions, then stands still forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Actions still to be played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Agent for ScriptedAgent {
    fn act(&mut self, _snapshot: &StatusSnapshot, _player: PlayerId, _rng: &mut GameRng) -> Action {
        self.script.pop_front().unwrap_or(Action::Still)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
