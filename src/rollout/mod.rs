//! Rollouts: agents playing whole games, recorded as replayable trajectories.
//!
//! ```
//! use rust_bomber::core::Action;
//! use rust_bomber::rollout::{RolloutConfig, RolloutRunner, ScriptedAgent, UniformAgent};
//!
//! let runner = RolloutRunner::new(RolloutConfig::new().with_seed(7).with_max_frames(50));
//! let trajectory = runner
//!     .play(&mut ScriptedAgent::new([Action::Right]), &mut UniformAgent)
//!     .unwrap();
//!
//! let replayed = trajectory.replay().unwrap();
//! assert_eq!(replayed.outcome(), trajectory.outcome);
//! ```

mod agent;
mod runner;
mod trajectory;

pub use agent::{Agent, ScriptedAgent, UniformAgent};
pub use runner::{RolloutConfig, RolloutRunner};
pub use trajectory::{FrameRecord, Trajectory};
