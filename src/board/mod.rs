//! Board: terrain grid, map layouts and the per-cell marker overlay.
//!
//! ## Key Types
//!
//! - `Terrain` / `Board`: static terrain, mutated only when a blast finishes
//! - `MapLayout`: terrain plus spawn corners for a scheme
//! - `Marker` / `CellMarkers` / `MarkerGrid`: transient overlay of players,
//!   bombs and blast stages

pub mod layout;
pub mod markers;
pub mod terrain;

pub use layout::MapLayout;
pub use markers::{CellMarkers, Marker, MarkerGrid};
pub use terrain::{Board, Terrain};
