//! The game aggregate and its frame resolver.
//!
//! ## Lifecycle
//!
//! `NotStarted` → `Ongoing` → `Ended`. Players register while the game is
//! not started; `start` moves to frame 1 once both slots are filled; every
//! `advance_frame` is one atomic transition; once ended no frame advances.
//!
//! ## Usage
//!
//! ```
//! use rust_bomber::core::{Action, GameConfig, MapScheme};
//! use rust_bomber::engine::Game;
//!
//! let mut game = Game::new(GameConfig::new(MapScheme::Standard).with_seed(1)).unwrap();
//! let alice = game.register_player("alice").unwrap();
//! let bob = game.register_player("bob").unwrap();
//! game.start().unwrap();
//!
//! game.queue_action(alice, Action::Right).unwrap();
//! game.queue_action(bob, Action::Still).unwrap();
//! assert!(game.advance_frame().unwrap());
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.frame, 2);
//! ```

mod game;
mod resolver;

pub use game::{FrameReport, Game, GamePhase};
