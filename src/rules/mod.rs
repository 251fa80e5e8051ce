//! Rules engine seam.
//!
//! `Game` implements `RulesEngine`; the simulation driver advances games
//! through the trait and reads outcomes as `GameResult`.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
