//! Core value types: positions, players, actions, RNG, configuration.
//!
//! Nothing in here knows about terrain or blasts; those live in `board` and
//! `blast`.

pub mod action;
pub mod config;
pub mod player;
pub mod position;
pub mod rng;

pub use action::{Action, ActionRecord, QueuedAction};
pub use config::{GameConfig, MapScheme, BLAST_RANGE, PLAYER_SLOTS};
pub use player::{Player, PlayerId, PlayerMap};
pub use position::{Direction, Position};
pub use rng::{GameId, GameRng};
