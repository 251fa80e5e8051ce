//! Engine error type.
//!
//! Rejected moves are ordinary game events and are reported through
//! `StepOutcome`, not through this type. `GameError` covers contract
//! violations at the public boundary.

use thiserror::Error;

/// Errors surfaced by the public engine API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `step` was called after the game ended.
    #[error("game is over")]
    GameOver,

    /// A presence vector did not have one entry per deck card.
    #[error("presence vector must have 56 entries, got {0}")]
    InvalidVectorLength(usize),

    /// A card could not be parsed.
    #[error("invalid card: {0}")]
    InvalidCard(String),

    /// A seat index outside 0-3.
    #[error("invalid seat: {0}")]
    InvalidSeat(u8),
}
