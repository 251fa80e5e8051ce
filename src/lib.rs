//! # rust-tichu
//!
//! A deterministic rule engine for the four-player climbing card game
//! Tichu, built for simulation and agent training.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: Classification, enumeration and trick comparison are
//!    pure functions of the cards involved.
//!
//! 2. **Deterministic**: A game is fully determined by its seed and the
//!    moves submitted. No process-wide state.
//!
//! 3. **Configuration Over Convention**: Scoring constants and optional
//!    behaviours live in `GameConfig`.
//!
//! ## Architecture
//!
//! - **Compact cards**: `Card` is a one-byte `Copy` handle; card sets map
//!   to a 56-bit presence vector for agents.
//!
//! - **Closed combination types**: `CombinationType` is an enum, and every
//!   rule matches on it exhaustively.
//!
//! - **Persistent Data Structures**: Trick history uses `im-rs` so games
//!   clone cheaply for search and rollouts.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Cards, deck, card sets
//! - `combos`: Combination classification and enumeration
//! - `stack`: The shared trick and its follow rules
//! - `game`: Players and the turn state machine
//! - `rules`: RulesEngine trait and game results
//! - `agents`: Baseline strategies
//! - `sim`: Step-bounded game runner and batch simulation

pub mod core;
pub mod cards;
pub mod combos;
pub mod stack;
pub mod game;
pub mod rules;
pub mod agents;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, SEATS,
    GameRng, GameRngState,
    GameConfig, SimConfig, GameError,
};

pub use crate::cards::{Card, CardName, CardSet, Deck, Power, Rank, Special, Suit};

pub use crate::combos::{classify, enumerate, Combination, CombinationType, Combinations};

pub use crate::stack::Trick;

pub use crate::game::{Game, Player, StepOutcome};

pub use crate::rules::{RulesEngine, GameResult};

pub use crate::agents::{Strategy, RandomStrategy, GreedyStrategy};

pub use crate::sim::{run_batch, run_game, BatchSummary, GameRecord};
