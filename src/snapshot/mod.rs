//! Read-only views of a game.
//!
//! `StatusSnapshot` is the one data surface handed to renderers, loggers and
//! reward code. `ObservationEncoder` turns a snapshot into planes for learning
//! agents.

pub mod encoder;
pub mod status;

pub use encoder::{channel, EncodedObservation, GridEncoder, ObservationEncoder};
pub use status::{BombStatus, PlayerStatus, StatusSnapshot};
