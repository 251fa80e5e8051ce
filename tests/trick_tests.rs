//! Trick follow-rule integration tests.

use proptest::prelude::*;
use rust_tichu::cards::{CardSet, Power};
use rust_tichu::combos::{enumerate, CombinationType};
use rust_tichu::core::GameRng;
use rust_tichu::stack::Trick;

fn set(text: &str) -> CardSet {
    CardSet::parse(text).unwrap()
}

fn trick_of(plays: &[&str]) -> Trick {
    let mut trick = Trick::new();
    for play in plays {
        assert!(trick.add(&set(play)), "could not play {play}");
    }
    trick
}

// =============================================================================
// Escalation
// =============================================================================

/// Test the full-house escalation series: powers and running points.
#[test]
fn test_full_house_series() {
    let mut trick = Trick::new();

    assert!(trick.add(&set("S3 H3 D3 SK HK")));
    assert_eq!(trick.power(), Power::from_value(3));
    assert_eq!(trick.points(), 20);

    assert!(trick.add(&set("S4 H4 D4 Phoenix C5")));
    assert_eq!(trick.power(), Power::from_value(4));
    assert_eq!(trick.points(), 0);

    assert!(!trick.can_follow(&set("C3 S2 H2 D2 Phoenix")));
    assert!(trick.add(&set("CK DK S10 H10 Phoenix")));
    assert_eq!(trick.power(), Power::from_value(13));
    assert_eq!(trick.points(), 15);

    assert!(trick.add(&set("S5 H5 D5 C5")));
    assert_eq!(trick.kind(), CombinationType::FourBomb);
    assert_eq!(trick.power().to_string(), "55");
    assert_eq!(trick.points(), 35);
}

/// Test that pair sequences must match in length.
#[test]
fn test_pair_sequence_length() {
    let trick = trick_of(&["S2 H2 S3 H3"]);
    assert!(trick.can_follow(&set("S4 H4 S5 H5")));
    assert!(!trick.can_follow(&set("S4 H4 S5 H5 S6 H6")));
}

/// Test that full houses do not need a matching pair rank.
#[test]
fn test_full_house_any_pair() {
    let trick = trick_of(&["S3 H3 D3 SA HA"]);
    assert!(trick.can_follow(&set("S4 H4 D4 S2 H2")));
}

// =============================================================================
// Special cards
// =============================================================================

/// Test the Phoenix on a Mahjong and what may follow it.
#[test]
fn test_phoenix_on_mahjong() {
    let trick = trick_of(&["Mahjong", "Phoenix"]);
    assert_eq!(trick.power(), Power::from_tenths(15));
    assert!(trick.can_follow(&set("S2")));
}

/// Test that the Phoenix leads at its own power.
#[test]
fn test_phoenix_lead() {
    let trick = trick_of(&["Phoenix"]);
    assert_eq!(trick.power(), Power::from_tenths(5));
    assert!(trick.can_follow(&set("Mahjong")));
}

/// Test that only a bomb beats the Dragon.
#[test]
fn test_only_bombs_beat_dragon() {
    let trick = trick_of(&["SK", "Dragon"]);
    assert!(trick.has_dragon());
    assert!(!trick.can_follow(&set("Phoenix")));
    assert!(!trick.can_follow(&set("SA")));
    assert!(trick.can_follow(&set("S2 H2 D2 C2")));
}

/// Test that a lower bomb cannot follow a higher bomb.
#[test]
fn test_bomb_over_bomb() {
    let trick = trick_of(&["S2", "S9 H9 D9 C9"]);
    assert!(!trick.can_follow(&set("S3 H3 D3 C3")));
    assert!(trick.can_follow(&set("SJ HJ DJ CJ")));
    assert!(trick.can_follow(&set("H2 H3 H4 H5 H6")));
}

/// Test that rejected plays leave the trick untouched.
#[test]
fn test_rejected_play_changes_nothing() {
    let mut trick = trick_of(&["S10"]);
    let before = trick.clone();
    assert!(!trick.add(&set("SK HK")));
    assert!(!trick.add(&CardSet::new()));
    assert_eq!(trick, before);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Trick points always equal the sum of the accepted plays.
    #[test]
    fn prop_points_additive(seed in any::<u64>(), rounds in 1usize..12) {
        let mut rng = GameRng::new(seed);
        let mut pool: Vec<_> = rust_tichu::cards::Card::all().collect();
        rng.shuffle(&mut pool);
        let hand = CardSet::from_cards(pool.into_iter().take(14));
        let candidates: Vec<CardSet> = enumerate(&hand).iter().cloned().collect();

        let mut trick = Trick::new();
        let mut expected = 0;
        for _ in 0..rounds {
            if let Some(play) = rng.choose(&candidates) {
                if trick.add(play) {
                    expected += play.points();
                }
            }
        }
        prop_assert_eq!(trick.points(), expected);
        let summed: i32 = trick.plays().iter().map(CardSet::points).sum();
        prop_assert_eq!(summed, expected);
    }
}
