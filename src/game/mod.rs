//! Players and the game state machine.
//!
//! ```
//! use rust_tichu::game::Game;
//!
//! let mut game = Game::new(42);
//! let player = game.active_player();
//! let opening = game.legal_moves(player).remove(0);
//! let outcome = game.step(player, &opening).unwrap();
//! assert!(outcome.accepted);
//! assert_ne!(game.active_player(), player);
//! ```

mod player;
mod rating;
mod state;

pub use player::Player;
pub use rating::rate_hand;
pub use state::{Game, StepOutcome};
