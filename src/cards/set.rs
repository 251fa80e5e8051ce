//! Card sets: hands, plays, and trick entries.
//!
//! A `CardSet` keeps its members sorted by power and carries its derived
//! combination and point total. Both are recomputed from the members on
//! every change, so they can never drift from the cards they describe.
//!
//! ## Presence vectors
//!
//! A set maps to a 56-entry 0/1 vector (or a `u64` bit mask) indexed by
//! the canonical deck position. The mapping is the interface external
//! agents use to describe moves.
//!
//! ```
//! use rust_tichu::cards::CardSet;
//!
//! let set = CardSet::parse("S10 H10 Phoenix").unwrap();
//! let vector = set.to_presence_vector();
//! assert_eq!(CardSet::from_presence_vector(&vector).unwrap(), set);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::combos::{classify, Combination, CombinationType};
use crate::core::GameError;

use super::card::{Card, Power, DECK_SIZE};

/// Inline capacity; a full hand fits without spilling.
type CardVec = SmallVec<[Card; 14]>;

/// A sorted multiset of cards with derived combination and points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct CardSet {
    cards: CardVec,
    combination: Combination,
    points: i32,
}

impl Default for CardSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSet {
    /// The empty set, which classifies as `Pass`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: CardVec::new(),
            combination: Combination::PASS,
            points: 0,
        }
    }

    /// Build a set from any cards.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut set = Self {
            cards: cards.into_iter().collect(),
            combination: Combination::PASS,
            points: 0,
        };
        set.refresh();
        set
    }

    /// Parse whitespace-separated card names such as `"S10 HK Phoenix"`.
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let cards = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Ok(Self::from_cards(cards))
    }

    fn refresh(&mut self) {
        self.cards.sort_unstable();
        self.combination = classify(&self.cards);
        self.points = self.cards.iter().map(|c| c.points()).sum();
    }

    /// Members in ascending power order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn combination(&self) -> Combination {
        self.combination
    }

    #[must_use]
    pub fn kind(&self) -> CombinationType {
        self.combination.kind
    }

    #[must_use]
    pub fn power(&self) -> Power {
        self.combination.power
    }

    /// Sum of card points (0 when empty).
    #[must_use]
    pub fn points(&self) -> i32 {
        self.points
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Whether every member of `other` is held here, counting multiplicity.
    #[must_use]
    pub fn contains_all(&self, other: &CardSet) -> bool {
        let mut remaining = self.cards.clone();
        other.iter().all(|card| match remaining.iter().position(|&c| c == card) {
            Some(pos) => {
                remaining.remove(pos);
                true
            }
            None => false,
        })
    }

    #[must_use]
    pub fn has_phoenix(&self) -> bool {
        self.contains(Card::PHOENIX)
    }

    /// A set consisting of exactly this one card.
    #[must_use]
    pub fn is_single(&self, card: Card) -> bool {
        self.cards.as_slice() == [card]
    }

    pub fn insert(&mut self, card: Card) {
        self.cards.push(card);
        self.refresh();
    }

    /// Remove one copy of `card`. Returns false if it is not a member.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Remove every member of `other`, or nothing if any is missing.
    pub fn remove_all(&mut self, other: &CardSet) -> bool {
        if !self.contains_all(other) {
            return false;
        }
        for card in other.iter() {
            if let Some(pos) = self.cards.iter().position(|&c| c == card) {
                self.cards.remove(pos);
            }
        }
        self.refresh();
        true
    }

    /// Bit mask over canonical deck positions.
    #[must_use]
    pub fn to_bits(&self) -> u64 {
        self.cards.iter().fold(0, |mask, card| mask | (1u64 << card.index()))
    }

    /// Inverse of `to_bits`. Bits above position 55 are ignored.
    #[must_use]
    pub fn from_bits(bits: u64) -> Self {
        Self::from_cards(Card::all().filter(|card| bits & (1u64 << card.index()) != 0))
    }

    /// 56-entry 0/1 vector over canonical deck positions.
    #[must_use]
    pub fn to_presence_vector(&self) -> [u8; DECK_SIZE] {
        let mut vector = [0u8; DECK_SIZE];
        for card in self.iter() {
            vector[card.index()] = 1;
        }
        vector
    }

    /// Build a set from a presence vector; any non-zero entry is a member.
    pub fn from_presence_vector(vector: &[u8]) -> Result<Self, GameError> {
        if vector.len() != DECK_SIZE {
            return Err(GameError::InvalidVectorLength(vector.len()));
        }
        Ok(Self::from_cards(
            Card::all().filter(|card| vector[card.index()] != 0),
        ))
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<CardSet> for Vec<Card> {
    fn from(set: CardSet) -> Self {
        set.cards.into_vec()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(text: &str) -> CardSet {
        CardSet::parse(text).unwrap()
    }

    #[test]
    fn test_empty_set_is_pass() {
        let empty = CardSet::new();
        assert_eq!(empty.kind(), CombinationType::Pass);
        assert_eq!(empty.points(), 0);
        assert_eq!(empty.power(), Power::ZERO);
    }

    #[test]
    fn test_points_of_hand() {
        let hand = set("S10 H10 D2 Phoenix Dragon CK DJ CJ");
        assert_eq!(hand.points(), 30);
    }

    #[test]
    fn test_sorted_by_power() {
        let hand = set("Dragon S3 Phoenix Mahjong");
        assert_eq!(hand.to_string(), "Phoenix Mahjong S3 Dragon");
    }

    #[test]
    fn test_remove_refreshes_derived_fields() {
        let mut pair = set("S5 H5");
        assert_eq!(pair.kind(), CombinationType::Pair);
        assert_eq!(pair.points(), 10);

        assert!(pair.remove("H5".parse().unwrap()));
        assert_eq!(pair.kind(), CombinationType::Solo);
        assert_eq!(pair.points(), 5);

        assert!(!pair.remove(Card::DRAGON));
        assert_eq!(pair.len(), 1);
    }

    #[test]
    fn test_remove_all_is_atomic() {
        let mut hand = set("S5 H5 Dragon");
        assert!(!hand.remove_all(&set("S5 Phoenix")));
        assert_eq!(hand.len(), 3);

        assert!(hand.remove_all(&set("S5 Dragon")));
        assert_eq!(hand, set("H5"));
    }

    #[test]
    fn test_contains_all_counts_multiplicity() {
        let hand = set("S5 H5");
        let doubled = CardSet::from_cards(["S5".parse().unwrap(), "S5".parse().unwrap()]);
        assert!(!hand.contains_all(&doubled));
        assert!(hand.contains_all(&set("H5")));
        assert!(hand.contains_all(&CardSet::new()));
    }

    #[test]
    fn test_duplicate_card_is_hand() {
        let doubled = CardSet::from_cards([Card::DRAGON, Card::DRAGON]);
        assert_eq!(doubled.kind(), CombinationType::Hand);
    }

    #[test]
    fn test_bits_round_trip() {
        let hand = set("S2 Phoenix Dragon Mahjong Dog CA");
        assert_eq!(CardSet::from_bits(hand.to_bits()), hand);
        assert_eq!(set("S2").to_bits(), 1);
        assert_eq!(set("Dog").to_bits(), 1 << 55);
    }

    #[test]
    fn test_presence_vector_length_checked() {
        assert_eq!(
            CardSet::from_presence_vector(&[0u8; 55]),
            Err(GameError::InvalidVectorLength(55))
        );
        let empty = CardSet::from_presence_vector(&[0u8; 56]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_card() {
        assert_eq!(
            CardSet::parse("S10 Z3"),
            Err(GameError::InvalidCard("Z3".to_string()))
        );
    }

    #[test]
    fn test_serde_recomputes_combination() {
        let pair = set("SK HK");
        let json = serde_json::to_string(&pair).unwrap();
        let back: CardSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
        assert_eq!(back.kind(), CombinationType::Pair);
    }
}
