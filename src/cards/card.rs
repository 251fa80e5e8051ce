//! Single Tichu cards.
//!
//! A `Card` is a compact, `Copy` handle on one of the 56 physical cards.
//! The handle is the card's position in the canonical deck order, which is
//! also its bit in the presence vector:
//!
//! | index | card |
//! |---|---|
//! | `0..52` | ranks 2..A, four suits each (Spade, Heart, Diamond, Club) |
//! | `52` | Phoenix |
//! | `53` | Dragon |
//! | `54` | Mahjong |
//! | `55` | Dog |

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::GameError;

/// Number of physical cards in a Tichu deck.
pub const DECK_SIZE: usize = 56;

/// Card suit. Special cards carry the `Special` sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
    Special,
}

impl Suit {
    /// The four regular suits in canonical order.
    pub const REGULAR: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    fn letter(self) -> &'static str {
        match self {
            Suit::Spade => "S",
            Suit::Heart => "H",
            Suit::Diamond => "D",
            Suit::Club => "C",
            Suit::Special => "",
        }
    }
}

/// Regular card rank. The discriminant is the rank's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks from Two to Ace.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value (2-14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a rank by value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        value.checked_sub(2).and_then(|i| Rank::ALL.get(i as usize).copied())
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// The four special cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Special {
    /// Wildcard; substitutes for one regular card.
    Phoenix,
    /// Highest solo; its trick must be handed to an opponent.
    Dragon,
    /// Lowest card; its holder starts the game.
    Mahjong,
    /// Passes the lead to the partner; only playable as an opener.
    Dog,
}

impl Special {
    const ALL: [Special; 4] = [Special::Phoenix, Special::Dragon, Special::Mahjong, Special::Dog];

    fn label(self) -> &'static str {
        match self {
            Special::Phoenix => "Phoenix",
            Special::Dragon => "Dragon",
            Special::Mahjong => "Mahjong",
            Special::Dog => "Dog",
        }
    }
}

/// What a card is, independent of its suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardName {
    Regular(Rank),
    Special(Special),
}

/// Ordering key of cards and combinations, in tenths.
///
/// Tenths keep the Phoenix half-step exact: a Phoenix played on a solo Ace
/// has power 14.5, strictly between Ace and Dragon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Power(u16);

impl Power {
    pub const ZERO: Power = Power(0);

    /// Offset lifting four-bombs above every non-bomb combination.
    pub const FOUR_BOMB_OFFSET: u16 = 500;

    /// Offset lifting straight-bombs above every four-bomb.
    pub const STRAIGHT_BOMB_OFFSET: u16 = 1000;

    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    /// Power of a natural rank value (Mahjong = 1, Two = 2 .. Ace = 14).
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        Self(value as u16 * 10)
    }

    #[must_use]
    pub const fn tenths(self) -> u16 {
        self.0
    }

    /// This power raised by half a rank.
    #[must_use]
    pub const fn half_step(self) -> Self {
        Self(self.0 + 5)
    }

    /// This power lifted by a bomb-tier offset.
    #[must_use]
    pub const fn with_offset(self, offset: u16) -> Self {
        Self(self.0 + offset)
    }

    #[must_use]
    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

/// One physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    pub const PHOENIX: Card = Card(52);
    pub const DRAGON: Card = Card(53);
    pub const MAHJONG: Card = Card(54);
    pub const DOG: Card = Card(55);

    /// A regular card.
    #[must_use]
    pub const fn regular(rank: Rank, suit: Suit) -> Self {
        let suit_index = match suit {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Diamond => 2,
            Suit::Club | Suit::Special => 3,
        };
        Self((rank as u8 - 2) * 4 + suit_index)
    }

    /// A special card.
    #[must_use]
    pub const fn special(special: Special) -> Self {
        match special {
            Special::Phoenix => Self::PHOENIX,
            Special::Dragon => Self::DRAGON,
            Special::Mahjong => Self::MAHJONG,
            Special::Dog => Self::DOG,
        }
    }

    /// The card at a canonical deck position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < DECK_SIZE).then_some(Self(index as u8))
    }

    /// Canonical deck position (0-55).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All 56 cards in canonical order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card)
    }

    #[must_use]
    pub fn name(self) -> CardName {
        if self.0 < 52 {
            CardName::Regular(Rank::ALL[(self.0 / 4) as usize])
        } else {
            CardName::Special(Special::ALL[(self.0 - 52) as usize])
        }
    }

    #[must_use]
    pub fn suit(self) -> Suit {
        if self.0 < 52 {
            Suit::REGULAR[(self.0 % 4) as usize]
        } else {
            Suit::Special
        }
    }

    /// The rank of a regular card.
    #[must_use]
    pub fn rank(self) -> Option<Rank> {
        match self.name() {
            CardName::Regular(rank) => Some(rank),
            CardName::Special(_) => None,
        }
    }

    #[must_use]
    pub const fn is_regular(self) -> bool {
        self.0 < 52
    }

    #[must_use]
    pub const fn is_phoenix(self) -> bool {
        self.0 == Self::PHOENIX.0
    }

    /// Position of this card in a run: Mahjong counts as 1, ranks as their
    /// value. Phoenix, Dog and Dragon never sit in a run on their own.
    #[must_use]
    pub fn sequence_value(self) -> Option<u8> {
        match self.name() {
            CardName::Regular(rank) => Some(rank.value()),
            CardName::Special(Special::Mahjong) => Some(1),
            CardName::Special(_) => None,
        }
    }

    #[must_use]
    pub fn power(self) -> Power {
        match self.name() {
            CardName::Regular(rank) => Power::from_value(rank.value()),
            CardName::Special(Special::Phoenix) => Power::from_tenths(5),
            CardName::Special(Special::Dog) => Power::from_tenths(9),
            CardName::Special(Special::Mahjong) => Power::from_value(1),
            CardName::Special(Special::Dragon) => Power::from_tenths(151),
        }
    }

    /// Scoring points: 5s are worth 5, 10s and Kings 10, Dragon 25,
    /// Phoenix -25.
    #[must_use]
    pub fn points(self) -> i32 {
        match self.name() {
            CardName::Regular(Rank::Five) => 5,
            CardName::Regular(Rank::Ten | Rank::King) => 10,
            CardName::Regular(_) => 0,
            CardName::Special(Special::Dragon) => 25,
            CardName::Special(Special::Phoenix) => -25,
            CardName::Special(_) => 0,
        }
    }

    /// Equal power, regardless of suit.
    #[must_use]
    pub fn same_power(self, other: Card) -> bool {
        self.power() == other.power()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.power()
            .cmp(&other.power())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            CardName::Regular(rank) => write!(f, "{}{}", self.suit().letter(), rank.label()),
            CardName::Special(special) => f.write_str(special.label()),
        }
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parse `S10`, `HA`, `D2`, `CK`, or a special card name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(special) = Special::ALL
            .iter()
            .find(|sp| sp.label().eq_ignore_ascii_case(s))
        {
            return Ok(Card::special(*special));
        }

        let invalid = || GameError::InvalidCard(s.to_string());
        let mut chars = s.chars();
        let suit = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('S') => Suit::Spade,
            Some('H') => Suit::Heart,
            Some('D') => Suit::Diamond,
            Some('C') => Suit::Club,
            _ => return Err(invalid()),
        };
        let label = chars.as_str();
        let rank = Rank::ALL
            .iter()
            .find(|r| r.label().eq_ignore_ascii_case(label))
            .ok_or_else(invalid)?;
        Ok(Card::regular(*rank, suit))
    }
}
