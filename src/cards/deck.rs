//! The 56-card deck.

use crate::core::{GameRng, SEATS};

use super::card::{Card, DECK_SIZE};
use super::set::CardSet;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = DECK_SIZE / SEATS;

/// A full deck, in canonical order until shuffled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// All 56 cards in canonical order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Split the deck into four consecutive hands of 14 cards.
    #[must_use]
    pub fn deal(self) -> [CardSet; SEATS] {
        let mut chunks = self.cards.chunks(HAND_SIZE);
        std::array::from_fn(|_| CardSet::from_cards(chunks.next().unwrap_or_default().iter().copied()))
    }

    /// Shuffle a fresh deck and deal it.
    #[must_use]
    pub fn shuffle_and_deal(rng: &mut GameRng) -> [CardSet; SEATS] {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck.deal()
    }
}
