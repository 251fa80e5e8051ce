//! Baseline strategies.
//!
//! Strategies only read the game; the driver applies whatever they choose.

mod strategy;

pub use strategy::{beat_or_bomb, lowest_follow, GreedyStrategy, RandomStrategy, Strategy};
