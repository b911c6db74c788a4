//! Bomb fuses and blast propagation.
//!
//! Each bomb runs an independent four-stage fuse (`FuseTracker`). Each cell in
//! a bomb's footprint carries its own four-stage overlay (`BlastStage`) from
//! the moment the bomb is placed. `advance_hazards` moves both forward by one
//! frame and is the first step of every frame resolution.

pub mod fuse;
pub mod propagation;
pub mod stage;

pub use fuse::{FuseTracker, FUSE_DETONATE, FUSE_START};
pub use propagation::{advance_hazards, footprint, place_bomb, HazardReport};
pub use stage::BlastStage;
