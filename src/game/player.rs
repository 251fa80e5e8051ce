//! A seat's private state: hand, score and flags.

use serde::{Deserialize, Serialize};

use crate::cards::{CardSet, HAND_SIZE};
use crate::combos::{enumerate, Combinations};
use crate::core::{GameRng, PlayerId};

use super::rating::rate_hand;

/// One of the four players.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: CardSet,
    points: i32,
    early_finish: bool,
    declaration_settled: bool,
    finished: bool,
    hand_rating: f32,
}

impl Player {
    /// A player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: CardSet::new(),
            points: 0,
            early_finish: false,
            declaration_settled: false,
            finished: false,
            hand_rating: 0.0,
        }
    }

    /// Replace the hand and re-rate it.
    pub fn assign_hand(&mut self, hand: CardSet) {
        self.hand_rating = rate_hand(&hand);
        self.finished = hand.is_empty();
        self.hand = hand;
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &CardSet {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Accumulated score.
    #[must_use]
    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn add_points(&mut self, points: i32) {
        self.points += points;
    }

    pub fn set_points(&mut self, points: i32) {
        self.points = points;
    }

    /// Rating of the hand as assigned.
    #[must_use]
    pub fn hand_rating(&self) -> f32 {
        self.hand_rating
    }

    /// Whether the hand holds every card of `cards`.
    #[must_use]
    pub fn attempt_move(&self, cards: &CardSet) -> bool {
        self.hand.contains_all(cards)
    }

    /// Take `cards` out of the hand. Marks the player finished when the
    /// hand runs out.
    pub fn remove_cards(&mut self, cards: &CardSet) -> bool {
        if !self.hand.remove_all(cards) {
            return false;
        }
        if self.hand.is_empty() {
            self.finished = true;
        }
        true
    }

    /// Declare early finish. Only allowed before the first play, and only
    /// once per game.
    pub fn declare_early_finish(&mut self) -> bool {
        if self.hand.len() != HAND_SIZE || self.declaration_settled {
            return false;
        }
        self.early_finish = true;
        true
    }

    #[must_use]
    pub fn has_declared(&self) -> bool {
        self.early_finish
    }

    /// Close an open declaration once its bonus or penalty is booked.
    pub(crate) fn settle_declaration(&mut self) {
        self.early_finish = false;
        self.declaration_settled = true;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every combination the hand can form.
    #[must_use]
    pub fn legal_combinations(&self) -> Combinations {
        enumerate(&self.hand)
    }

    /// A uniformly chosen combination from the hand, `None` when empty.
    pub fn random_move(&self, rng: &mut GameRng) -> Option<CardSet> {
        let all: Vec<CardSet> = self.legal_combinations().iter().cloned().collect();
        rng.choose(&all).cloned()
    }
}
