//! The shared trick.
//!
//! Plays escalate on a trick until three consecutive passes; `Game`
//! then resolves it and starts a new one.
//!
//! ## Follow rules
//!
//! 1. An empty trick accepts any playable combination.
//! 2. Otherwise a play must match the top type with strictly higher power.
//!    Straights and pair sequences must also match the card count. The Dog
//!    never follows.
//! 3. A Phoenix solo follows any solo below the Dragon; the trick power
//!    becomes half a rank above the previous top.
//! 4. Bombs follow anything of lower power.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSet, Power};
use crate::combos::CombinationType;

/// An escalating sequence of accepted plays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    plays: Vector<CardSet>,
    power: Power,
    points: i32,
    has_dragon: bool,
}

impl Trick {
    /// An empty trick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Accepted plays, oldest first.
    #[must_use]
    pub fn plays(&self) -> &Vector<CardSet> {
        &self.plays
    }

    /// The play to beat.
    #[must_use]
    pub fn top(&self) -> Option<&CardSet> {
        self.plays.last()
    }

    /// Type of the top play, `Pass` when empty.
    #[must_use]
    pub fn kind(&self) -> CombinationType {
        self.top().map_or(CombinationType::Pass, CardSet::kind)
    }

    /// Power to beat. Differs from the top play's power after a Phoenix solo.
    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    /// Points of every accepted play.
    #[must_use]
    pub fn points(&self) -> i32 {
        self.points
    }

    /// Whether the Dragon has been played on this trick.
    #[must_use]
    pub fn has_dragon(&self) -> bool {
        self.has_dragon
    }

    fn is_phoenix_over_solo(&self, candidate: &CardSet) -> bool {
        candidate.is_single(Card::PHOENIX)
            && self.kind() == CombinationType::Solo
            && self.power < Card::DRAGON.power()
    }

    /// Whether `candidate` may be played on this trick.
    #[must_use]
    pub fn can_follow(&self, candidate: &CardSet) -> bool {
        let kind = candidate.kind();
        let Some(top) = self.top() else {
            return kind.is_playable();
        };

        if kind == top.kind() && candidate.power() > self.power {
            let length_ok = !kind.requires_equal_length() || candidate.len() == top.len();
            return length_ok && !candidate.is_single(Card::DOG);
        }
        if self.is_phoenix_over_solo(candidate) {
            return true;
        }
        kind.is_bomb() && candidate.power() > self.power
    }

    /// Play `candidate` on the trick. Returns false, leaving the trick
    /// untouched, when it cannot follow.
    pub fn add(&mut self, candidate: &CardSet) -> bool {
        if !self.can_follow(candidate) {
            return false;
        }
        self.power = if !self.is_empty() && self.is_phoenix_over_solo(candidate) {
            self.power.half_step()
        } else {
            candidate.power()
        };
        self.points += candidate.points();
        self.has_dragon |= candidate.contains(Card::DRAGON);
        self.plays.push_back(candidate.clone());
        true
    }

    /// Clear the trick for a new lead.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(text: &str) -> CardSet {
        CardSet::parse(text).unwrap()
    }

    #[test]
    fn test_empty_trick_rejects_pass_and_hand() {
        let trick = Trick::new();
        assert!(!trick.can_follow(&CardSet::new()));
        assert!(!trick.can_follow(&set("S2 H3")));
        assert!(trick.can_follow(&set("Dog")));
        assert_eq!(trick.kind(), CombinationType::Pass);
    }

    #[test]
    fn test_same_type_needs_higher_power() {
        let mut trick = Trick::new();
        assert!(trick.add(&set("S7")));
        assert!(!trick.add(&set("H7")));
        assert!(!trick.add(&set("S8 H8")));
        assert!(trick.add(&set("H9")));
        assert_eq!(trick.plays().len(), 2);
    }

    #[test]
    fn test_straights_need_equal_length() {
        let mut trick = Trick::new();
        assert!(trick.add(&set("S2 H3 D4 C5 S6")));
        assert!(!trick.can_follow(&set("S3 H4 D5 C6 S7 H8")));
        assert!(trick.can_follow(&set("S3 H4 D5 C6 S7")));
    }

    #[test]
    fn test_dog_never_follows() {
        let mut trick = Trick::new();
        assert!(trick.add(&set("Phoenix")));
        assert!(!trick.can_follow(&set("Dog")));
    }

    #[test]
    fn test_phoenix_half_step() {
        let mut trick = Trick::new();
        assert!(trick.add(&set("SA")));
        assert!(trick.add(&set("Phoenix")));
        assert_eq!(trick.power(), Power::from_tenths(145));
        assert!(trick.can_follow(&set("Dragon")));
        assert!(!trick.can_follow(&set("HA")));
    }

    #[test]
    fn test_phoenix_cannot_beat_dragon() {
        let mut trick = Trick::new();
        assert!(trick.add(&set("Dragon")));
        assert!(trick.has_dragon());
        assert!(!trick.can_follow(&set("Phoenix")));
    }

    #[test]
    fn test_bomb_beats_anything_lower() {
        let mut trick = Trick::new();
        assert!(trick.add(&set("Dragon")));
        assert!(trick.add(&set("S2 H2 D2 C2")));
        assert!(!trick.can_follow(&set("S3 H3 D3 C3 S4")));
        assert!(trick.add(&set("S9 S10 SJ SQ SK")));
        assert_eq!(trick.kind(), CombinationType::StraightBomb);
    }

    #[test]
    fn test_points_accumulate_and_reset() {
        let mut trick = Trick::new();
        assert!(trick.add(&set("S5")));
        assert!(trick.add(&set("SK")));
        assert!(trick.add(&set("Dragon")));
        assert_eq!(trick.points(), 40);

        trick.reset();
        assert!(trick.is_empty());
        assert_eq!(trick.points(), 0);
        assert!(!trick.has_dragon());
    }
}
