//! Core engine types: seats, RNG, configuration, errors.
//!
//! This module holds the building blocks shared by every other module.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, SimConfig, CLASSIC_DECLARE_THRESHOLD};
pub use error::GameError;
pub use player::{PlayerId, PlayerMap, SEATS};
pub use rng::{GameRng, GameRngState};
