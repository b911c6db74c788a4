//! # rust-bomber
//!
//! A deterministic two-player grid bombing game engine for scripted and
//! learning agents.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same configuration and the same action sequence
//!    always produce the same frames. Randomness is confined to the game
//!    identifier and to sampling agents, both seeded.
//!
//! 2. **Atomic Frames**: callers queue one action per player, then a single
//!    `advance_frame` resolves hazards, movement and deaths in a fixed order.
//!
//! 3. **Read-Only Views**: renderers, loggers and learners only ever see a
//!    `StatusSnapshot`; the engine persists nothing itself.
//!
//! ## Modules
//!
//! - `core`: positions, players, actions, RNG, configuration
//! - `board`: terrain, map layouts and the per-cell marker overlay
//! - `blast`: bomb fuses, blast stages and the per-frame hazard pass
//! - `rules`: move legality and outcome derivation
//! - `engine`: the `Game` aggregate and its frame resolver
//! - `snapshot`: status snapshots and observation encoding
//! - `rollout`: agents, rollout runner and replayable trajectories

pub mod blast;
pub mod board;
pub mod core;
pub mod engine;
pub mod error;
pub mod rollout;
pub mod rules;
pub mod snapshot;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Direction, GameConfig, GameId, GameRng, MapScheme, Player, PlayerId,
    PlayerMap, Position, QueuedAction, BLAST_RANGE, PLAYER_SLOTS,
};

pub use crate::board::{Board, CellMarkers, MapLayout, Marker, MarkerGrid, Terrain};

pub use crate::blast::{BlastStage, FuseTracker, HazardReport};

pub use crate::rules::Outcome;

pub use crate::engine::{FrameReport, Game, GamePhase};

pub use crate::snapshot::{
    BombStatus, EncodedObservation, GridEncoder, ObservationEncoder, PlayerStatus, StatusSnapshot,
};

pub use crate::rollout::{
    Agent, FrameRecord, RolloutConfig, RolloutRunner, ScriptedAgent, Trajectory, UniformAgent,
};

pub use crate::error::{GameError, Result};
