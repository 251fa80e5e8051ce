//! Opening-hand rating heuristic.
//!
//! High cards and strong combinations raise the rating; the Dog lowers it.
//! Bombs are counted first and taken out of the hand, so the cards they
//! use do not also count towards full houses, triples or straights.

use crate::cards::{Card, CardName, CardSet, Rank, Special};
use crate::combos::{enumerate, CombinationType};

const TOP_CARD: f32 = 20.0;
const HIGH_CARD: f32 = 10.0;
const DOG_PENALTY: f32 = 40.0;
const BOMB: f32 = 40.0;

fn card_value(card: Card) -> f32 {
    match card.name() {
        CardName::Regular(Rank::Ace) | CardName::Special(Special::Dragon) => TOP_CARD,
        CardName::Regular(Rank::King) | CardName::Special(Special::Phoenix) => HIGH_CARD,
        _ => 0.0,
    }
}

fn mean_power(sets: &[CardSet]) -> f32 {
    if sets.is_empty() {
        return 0.0;
    }
    sets.iter().map(|s| s.power().as_f32()).sum::<f32>() / sets.len() as f32
}

/// Rate a hand.
#[must_use]
pub fn rate_hand(hand: &CardSet) -> f32 {
    let mut score: f32 = hand.iter().map(card_value).sum();
    if hand.contains(Card::DOG) {
        score -= DOG_PENALTY;
    }

    let mut remaining = hand.clone();
    for kind in [CombinationType::FourBomb, CombinationType::StraightBomb] {
        for bomb in enumerate(&remaining).get(kind).to_vec() {
            if remaining.remove_all(&bomb) {
                score += BOMB;
            }
        }
    }

    let combos = enumerate(&remaining);
    score += mean_power(&combos.full_house);
    score += mean_power(&combos.triple);
    if let Some(longest) = combos.straight.iter().map(CardSet::len).max() {
        score += longest as f32;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(text: &str) -> f32 {
        rate_hand(&CardSet::parse(text).unwrap())
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(rate(""), 0.0);
    }

    #[test]
    fn test_high_cards() {
        assert_eq!(rate("SA Dragon"), 40.0);
        assert_eq!(rate("SK Phoenix"), 20.0);
        assert_eq!(rate("Dog S2"), -40.0);
    }

    #[test]
    fn test_bomb_counted_once() {
        // Four-bomb of 3s: 40; no triples remain once it is removed.
        assert_eq!(rate("S3 H3 D3 C3"), 40.0);
    }

    #[test]
    fn test_triples_and_straights() {
        // Triple of 9s (9) plus the longest straight (5).
        assert_eq!(rate("S9 H9 D9 S2 H3 D4 C5 S6"), 9.0 + 5.0);
    }
}
