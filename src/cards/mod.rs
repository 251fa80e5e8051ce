//! Cards, the deck, and card sets.
//!
//! ## Key Types
//!
//! - `Card`: one of the 56 physical cards (`Copy`, ordered by power)
//! - `Power`: ordering key in tenths of a rank
//! - `CardSet`: sorted multiset with derived combination and points
//! - `Deck`: canonical deck order, shuffle and deal
//!
//! Card equality is physical identity. Two cards of the same rank in
//! different suits are different cards with the same power.

pub mod card;
pub mod deck;
pub mod set;

pub use card::{Card, CardName, Power, Rank, Special, Suit, DECK_SIZE};
pub use deck::{Deck, HAND_SIZE};
pub use set::CardSet;
