//! Combination types, classification, and enumeration.
//!
//! Every card set has exactly one `Combination`: its `CombinationType`
//! plus the `Power` that orders it against plays of the same type.
//!
//! ## Bombs
//!
//! Four-bombs and straight-bombs carry an offset so that comparing powers
//! alone orders them above every other combination, and straight-bombs
//! above every four-bomb.

mod classify;
mod enumerate;

pub use classify::classify;
pub use enumerate::{enumerate, Combinations};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Power;

/// The closed set of combination types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombinationType {
    /// No cards.
    Pass,
    Solo,
    Pair,
    Triple,
    FourBomb,
    FullHouse,
    Straight,
    StraightBomb,
    PairSequence,
    /// Any set that is not a legal combination.
    Hand,
}

impl CombinationType {
    /// The eight types a player can put on a trick.
    pub const PLAYABLE: [CombinationType; 8] = [
        CombinationType::Solo,
        CombinationType::Pair,
        CombinationType::Triple,
        CombinationType::FourBomb,
        CombinationType::FullHouse,
        CombinationType::Straight,
        CombinationType::StraightBomb,
        CombinationType::PairSequence,
    ];

    #[must_use]
    pub fn is_bomb(self) -> bool {
        matches!(self, CombinationType::FourBomb | CombinationType::StraightBomb)
    }

    /// Whether sets of this type can be played at all.
    #[must_use]
    pub fn is_playable(self) -> bool {
        !matches!(self, CombinationType::Pass | CombinationType::Hand)
    }

    /// Whether following plays must match the card count.
    #[must_use]
    pub fn requires_equal_length(self) -> bool {
        matches!(self, CombinationType::Straight | CombinationType::PairSequence)
    }
}

impl fmt::Display for CombinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CombinationType::Pass => "pass",
            CombinationType::Solo => "solo",
            CombinationType::Pair => "pair",
            CombinationType::Triple => "triple",
            CombinationType::FourBomb => "four-bomb",
            CombinationType::FullHouse => "full house",
            CombinationType::Straight => "straight",
            CombinationType::StraightBomb => "straight-bomb",
            CombinationType::PairSequence => "pair sequence",
            CombinationType::Hand => "hand",
        };
        f.write_str(name)
    }
}

/// A classified card set: type plus ordering power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub kind: CombinationType,
    pub power: Power,
}

impl Combination {
    pub const PASS: Combination = Combination::new(CombinationType::Pass, Power::ZERO);
    pub const HAND: Combination = Combination::new(CombinationType::Hand, Power::ZERO);

    #[must_use]
    pub const fn new(kind: CombinationType, power: Power) -> Self {
        Self { kind, power }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.power)
    }
}
