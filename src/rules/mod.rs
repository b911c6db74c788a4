//! Game rules: movement legality and outcome derivation.
//!
//! The frame resolver in `engine` calls into these; they hold no state.

pub mod legality;
pub mod outcome;

pub use legality::{is_passable, normalize, resolve_destination};
pub use outcome::Outcome;
