//! Combination classification.
//!
//! `classify` is total: every slice of cards maps to exactly one
//! combination, with `Hand` for anything that is not a legal play.
//!
//! The Phoenix stands in for one regular card (2..A). It never stands in
//! for the Mahjong, the Dog or the Dragon, and never completes a four-bomb
//! or a straight-bomb.

use smallvec::SmallVec;

use crate::cards::{Card, Power, Rank};

use super::{Combination, CombinationType};

/// Rank counts for regular cards, indexed by rank value.
type RankCounts = [u8; 15];

/// Classify a set of cards. Input order does not matter.
#[must_use]
pub fn classify(cards: &[Card]) -> Combination {
    let mut sorted: SmallVec<[Card; 14]> = cards.iter().copied().collect();
    sorted.sort_unstable();

    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Combination::HAND;
    }

    // The Phoenix has the lowest power, so it sorts first.
    let phoenix = sorted.first() == Some(&Card::PHOENIX);
    let rest = if phoenix { &sorted[1..] } else { &sorted[..] };

    let found = match sorted.len() {
        0 => Some(Combination::PASS),
        1 => Some(Combination::new(CombinationType::Solo, sorted[0].power())),
        2 => group(rest, phoenix, 2).map(|r| combo(CombinationType::Pair, r)),
        3 => group(rest, phoenix, 3).map(|r| combo(CombinationType::Triple, r)),
        4 => four_bomb(rest, phoenix).or_else(|| pair_sequence(rest, phoenix)),
        5 => full_house(rest, phoenix).or_else(|| straight(rest, phoenix)),
        n if n % 2 == 0 => straight(rest, phoenix).or_else(|| pair_sequence(rest, phoenix)),
        _ => straight(rest, phoenix),
    };
    found.unwrap_or(Combination::HAND)
}

fn combo(kind: CombinationType, rank: u8) -> Combination {
    Combination::new(kind, Power::from_value(rank))
}

/// Count regular ranks. `None` if any card is special.
fn rank_counts(cards: &[Card]) -> Option<RankCounts> {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank()?.value() as usize] += 1;
    }
    Some(counts)
}

/// `size` cards of one regular rank, the Phoenix standing in for one.
fn group(rest: &[Card], phoenix: bool, size: usize) -> Option<u8> {
    let rank = rest.first()?.rank()?;
    let uniform = rest.iter().all(|c| c.rank() == Some(rank));
    (uniform && rest.len() + usize::from(phoenix) == size).then_some(rank.value())
}

fn four_bomb(rest: &[Card], phoenix: bool) -> Option<Combination> {
    if phoenix {
        return None;
    }
    let rank = group(rest, false, 4)?;
    Some(Combination::new(
        CombinationType::FourBomb,
        Power::from_value(rank).with_offset(Power::FOUR_BOMB_OFFSET),
    ))
}

/// Triple plus pair of another rank. Power is the triple's rank.
fn full_house(rest: &[Card], phoenix: bool) -> Option<Combination> {
    let counts = rank_counts(rest)?;
    let mut groups: SmallVec<[(u8, u8); 3]> = (2..=14u8)
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    if groups.len() != 2 {
        return None;
    }
    groups.sort_unstable();
    let (low, high) = (groups[0], groups[1]);

    let triple = match (phoenix, low.0, high.0) {
        (false, 2, 3) => high.1,
        // Two natural pairs: the Phoenix joins the higher one.
        (true, 2, 2) => low.1.max(high.1),
        (true, 1, 3) => high.1,
        _ => return None,
    };
    Some(combo(CombinationType::FullHouse, triple))
}

/// Run of at least five consecutive values; Mahjong counts as 1.
fn straight(rest: &[Card], phoenix: bool) -> Option<Combination> {
    if rest.len() + usize::from(phoenix) < 5 {
        return None;
    }
    let values: SmallVec<[u8; 14]> = rest
        .iter()
        .map(|c| c.sequence_value())
        .collect::<Option<_>>()?;

    // `rest` is sorted by power, which orders sequence values too.
    let mut gaps = 0u8;
    for w in values.windows(2) {
        if w[1] <= w[0] {
            return None;
        }
        gaps += w[1] - w[0] - 1;
    }
    let low = *values.first()?;
    let top = *values.last()?;

    if !phoenix {
        if gaps != 0 {
            return None;
        }
        let first_suit = rest[0].suit();
        let one_suit = rest.iter().all(|c| c.is_regular() && c.suit() == first_suit);
        return Some(if one_suit {
            Combination::new(
                CombinationType::StraightBomb,
                Power::from_value(top).with_offset(Power::STRAIGHT_BOMB_OFFSET),
            )
        } else {
            combo(CombinationType::Straight, top)
        });
    }

    match gaps {
        1 => Some(combo(CombinationType::Straight, top)),
        0 if top < Rank::Ace.value() => Some(combo(CombinationType::Straight, top + 1)),
        0 if low > Rank::Two.value() => Some(combo(CombinationType::Straight, top)),
        _ => None,
    }
}

/// Two or more consecutive pairs of regular ranks.
fn pair_sequence(rest: &[Card], phoenix: bool) -> Option<Combination> {
    let len = rest.len() + usize::from(phoenix);
    if len < 4 || len % 2 != 0 {
        return None;
    }
    let mut counts = rank_counts(rest)?;

    if phoenix {
        // The Phoenix must complete the one rank held singly.
        let singles: SmallVec<[usize; 2]> = (2..=14).filter(|&r| counts[r] == 1).collect();
        match singles.as_slice() {
            [only] => counts[*only] = 2,
            _ => return None,
        }
    }

    let ranks: SmallVec<[u8; 7]> = (2..=14u8).filter(|&r| counts[r as usize] > 0).collect();
    let all_pairs = ranks.iter().all(|&r| counts[r as usize] == 2);
    let consecutive = ranks.windows(2).all(|w| w[1] == w[0] + 1);
    if !all_pairs || !consecutive {
        return None;
    }
    ranks
        .last()
        .map(|&top| combo(CombinationType::PairSequence, top))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardSet;

    fn classify_str(text: &str) -> Combination {
        let set = CardSet::parse(text).unwrap();
        classify(set.cards())
    }

    fn kind(text: &str) -> CombinationType {
        classify_str(text).kind
    }

    #[test]
    fn test_small_sets() {
        assert_eq!(classify(&[]), Combination::PASS);
        assert_eq!(classify_str("Dragon").power, Card::DRAGON.power());
        assert_eq!(kind("S4 H4"), CombinationType::Pair);
        assert_eq!(kind("S4 H5"), CombinationType::Hand);
        assert_eq!(kind("S4 H4 C4"), CombinationType::Triple);
    }

    #[test]
    fn test_phoenix_only_substitutes_regular_ranks() {
        assert_eq!(classify_str("Phoenix SA").power, Power::from_value(14));
        assert_eq!(kind("Phoenix Mahjong"), CombinationType::Hand);
        assert_eq!(kind("Phoenix Dog"), CombinationType::Hand);
        assert_eq!(kind("Phoenix Dragon"), CombinationType::Hand);
        assert_eq!(kind("Phoenix S9 H9"), CombinationType::Triple);
    }

    #[test]
    fn test_four_bomb_needs_natural_cards() {
        let bomb = classify_str("S7 H7 D7 C7");
        assert_eq!(bomb.kind, CombinationType::FourBomb);
        assert_eq!(bomb.power, Power::from_tenths(570));
        assert_eq!(kind("S10 H10 D10 Phoenix"), CombinationType::Hand);
    }

    #[test]
    fn test_full_house_phoenix_joins_higher_pair() {
        let full = classify_str("SK HK Phoenix S3 H3");
        assert_eq!(full.kind, CombinationType::FullHouse);
        assert_eq!(full.power, Power::from_value(13));

        let full = classify_str("S4 H4 D4 Phoenix CK");
        assert_eq!(full.power, Power::from_value(4));
        assert_eq!(kind("S4 H4 D4 C4 Phoenix"), CombinationType::Hand);
    }

    #[test]
    fn test_straight_with_phoenix_gap() {
        let run = classify_str("S3 H4 D5 Phoenix C7");
        assert_eq!(run.kind, CombinationType::Straight);
        assert_eq!(run.power, Power::from_value(7));
    }

    #[test]
    fn test_straight_phoenix_extension() {
        assert_eq!(classify_str("Mahjong S2 H3 Phoenix D4").power, Power::from_value(5));
        assert_eq!(classify_str("S2 H3 Phoenix D4 C5").power, Power::from_value(6));
        assert_eq!(classify_str("SJ HQ DK CA Phoenix").power, Power::from_value(14));
        assert_eq!(kind("S5 H2 D6 Phoenix C7"), CombinationType::Hand);
    }

    #[test]
    fn test_straight_bomb() {
        let bomb = classify_str("S5 S6 S7 S8 S9");
        assert_eq!(bomb.kind, CombinationType::StraightBomb);
        assert_eq!(bomb.power, Power::from_tenths(1090));
        assert_eq!(kind("S5 S6 S7 S8 Phoenix"), CombinationType::Straight);
    }

    #[test]
    fn test_special_cards_break_straights() {
        assert_eq!(kind("SA SK SJ SQ Dragon"), CombinationType::Hand);
        assert_eq!(kind("Dog S2 S3 S4 S5"), CombinationType::Hand);
        assert_eq!(kind("Mahjong S2 H3 D4 C5"), CombinationType::Straight);
    }

    #[test]
    fn test_pair_sequence() {
        let seq = classify_str("SK Phoenix SQ HQ");
        assert_eq!(seq.kind, CombinationType::PairSequence);
        assert_eq!(seq.power, Power::from_value(13));

        assert_eq!(kind("S2 Phoenix H2 S4"), CombinationType::Hand);
        assert_eq!(kind("S2 H2 S3 H3 S4 H4"), CombinationType::PairSequence);
        assert_eq!(kind("S2 H2 S4 H4"), CombinationType::Hand);
        assert_eq!(kind("S2 H2 D2 S3 H3 D3"), CombinationType::Hand);
    }

    #[test]
    fn test_duplicates_are_hand() {
        assert_eq!(classify(&[Card::PHOENIX, Card::PHOENIX]), Combination::HAND);
    }
}
