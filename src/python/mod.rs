//! Python bindings for the rust-bomber engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_bomber as rb
//!
//! game = rb.Game("standard", seed=42)
//! alice = game.register_player("alice")
//! bob = game.register_player("bob")
//! game.start()
//!
//! game.queue_action(alice, "bomb")
//! game.queue_action(bob, "left")
//! game.advance_frame()
//!
//! snapshot = game.snapshot()       # dict
//! planes = game.observation(alice)  # numpy [channels, rows, cols]
//!
//! trajectory = rb.play_rollout(seed=7, max_frames=200)
//! ```

use pyo3::prelude::*;

mod py_game;
mod py_rollout;

pub use py_game::*;
pub use py_rollout::*;

/// rust_bomber: a deterministic two-player grid bombing game.
#[pymodule]
fn rust_bomber(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyTrajectory>()?;
    m.add_function(wrap_pyfunction!(play_rollout, m)?)?;
    Ok(())
}
