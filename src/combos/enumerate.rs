//! Enumeration of every legal combination in a hand.
//!
//! Candidates come from structural scans of the hand:
//!
//! - equal-power groups, with and without the Phoenix
//! - pair × triple cross products for full houses
//! - consecutive value windows of five or more, at most one value filled
//!   by the Phoenix
//! - consecutive pair windows, at most one pair completed by the Phoenix
//!
//! Each candidate is re-classified and stored only in the bucket of its
//! classified type, so the result never disagrees with `classify`.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{Card, CardSet};

use super::CombinationType;

type Candidate = SmallVec<[Card; 14]>;

/// Every legal combination of a hand, grouped by type.
///
/// Buckets are sorted by ascending power. Sets are distinct by physical
/// cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Combinations {
    pub solo: Vec<CardSet>,
    pub pair: Vec<CardSet>,
    pub triple: Vec<CardSet>,
    pub four_bomb: Vec<CardSet>,
    pub full_house: Vec<CardSet>,
    pub straight: Vec<CardSet>,
    pub straight_bomb: Vec<CardSet>,
    pub pair_sequence: Vec<CardSet>,
}

impl Combinations {
    /// Combinations of one type. Empty for `Pass` and `Hand`.
    #[must_use]
    pub fn get(&self, kind: CombinationType) -> &[CardSet] {
        match kind {
            CombinationType::Solo => &self.solo,
            CombinationType::Pair => &self.pair,
            CombinationType::Triple => &self.triple,
            CombinationType::FourBomb => &self.four_bomb,
            CombinationType::FullHouse => &self.full_house,
            CombinationType::Straight => &self.straight,
            CombinationType::StraightBomb => &self.straight_bomb,
            CombinationType::PairSequence => &self.pair_sequence,
            CombinationType::Pass | CombinationType::Hand => &[],
        }
    }

    fn bucket_mut(&mut self, kind: CombinationType) -> Option<&mut Vec<CardSet>> {
        match kind {
            CombinationType::Solo => Some(&mut self.solo),
            CombinationType::Pair => Some(&mut self.pair),
            CombinationType::Triple => Some(&mut self.triple),
            CombinationType::FourBomb => Some(&mut self.four_bomb),
            CombinationType::FullHouse => Some(&mut self.full_house),
            CombinationType::Straight => Some(&mut self.straight),
            CombinationType::StraightBomb => Some(&mut self.straight_bomb),
            CombinationType::PairSequence => Some(&mut self.pair_sequence),
            CombinationType::Pass | CombinationType::Hand => None,
        }
    }

    /// All combinations, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &CardSet> {
        CombinationType::PLAYABLE
            .into_iter()
            .flat_map(move |kind| self.get(kind).iter())
    }

    /// Types with at least one combination.
    pub fn available_kinds(&self) -> impl Iterator<Item = CombinationType> + '_ {
        CombinationType::PLAYABLE
            .into_iter()
            .filter(move |&kind| !self.get(kind).is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        CombinationType::PLAYABLE
            .iter()
            .map(|&kind| self.get(kind).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects candidates, dropping repeats and non-combinations.
#[derive(Default)]
struct Collector {
    seen: FxHashSet<u64>,
    found: Combinations,
}

impl Collector {
    fn offer(&mut self, cards: &[Card]) {
        let set = CardSet::from_cards(cards.iter().copied());
        if !self.seen.insert(set.to_bits()) {
            return;
        }
        if let Some(bucket) = self.found.bucket_mut(set.kind()) {
            bucket.push(set);
        }
    }

    fn finish(mut self) -> Combinations {
        for kind in CombinationType::PLAYABLE {
            if let Some(bucket) = self.found.bucket_mut(kind) {
                bucket.sort_by_key(|set| (set.power(), set.len(), set.to_bits()));
            }
        }
        self.found
    }
}

/// Enumerate every legal combination in `hand`.
#[must_use]
pub fn enumerate(hand: &CardSet) -> Combinations {
    let phoenix = hand.has_phoenix();

    // Cards by sequence value: Mahjong at 1, ranks at 2..=14.
    let mut by_value: [SmallVec<[Card; 4]>; 15] = Default::default();
    for card in hand.iter() {
        if let Some(value) = card.sequence_value() {
            if !by_value[value as usize].contains(&card) {
                by_value[value as usize].push(card);
            }
        }
    }

    let mut collector = Collector::default();

    for card in hand.iter() {
        collector.offer(&[card]);
    }

    let mut pairs: Vec<Candidate> = Vec::new();
    let mut triples: Vec<Candidate> = Vec::new();
    for group in &by_value[2..] {
        for pair in choose(group, 2) {
            pairs.push(pair);
        }
        for triple in choose(group, 3) {
            triples.push(triple);
        }
        if group.len() == 4 {
            collector.offer(group);
        }
        if phoenix {
            for single in choose(group, 1) {
                pairs.push(with_phoenix(&single));
            }
            for pair in choose(group, 2) {
                triples.push(with_phoenix(&pair));
            }
        }
    }

    for candidate in pairs.iter().chain(triples.iter()) {
        collector.offer(candidate);
    }

    for triple in &triples {
        for pair in &pairs {
            if triple[0].power() == pair[0].power() || pair.iter().any(|c| triple.contains(c)) {
                continue;
            }
            let mut full: Candidate = triple.clone();
            full.extend_from_slice(pair);
            collector.offer(&full);
        }
    }

    straights(&by_value, phoenix, &mut collector);
    pair_sequences(&by_value, phoenix, &mut collector);

    collector.finish()
}

fn with_phoenix(cards: &[Card]) -> Candidate {
    let mut out: Candidate = cards.iter().copied().collect();
    out.push(Card::PHOENIX);
    out
}

/// All `k`-subsets of `cards`.
fn choose(cards: &[Card], k: usize) -> Vec<Candidate> {
    fn walk(cards: &[Card], k: usize, start: usize, acc: &mut Candidate, out: &mut Vec<Candidate>) {
        if acc.len() == k {
            out.push(acc.clone());
            return;
        }
        for i in start..cards.len() {
            acc.push(cards[i]);
            walk(cards, k, i + 1, acc, out);
            acc.pop();
        }
    }

    let mut out = Vec::new();
    if k <= cards.len() {
        walk(cards, k, 0, &mut Candidate::new(), &mut out);
    }
    out
}

/// Offer every way of picking one option per slot.
fn offer_product(slots: &[&[Candidate]], acc: &mut Candidate, collector: &mut Collector) {
    match slots.split_first() {
        None => collector.offer(acc),
        Some((options, rest)) => {
            for option in options.iter() {
                let mark = acc.len();
                acc.extend_from_slice(option);
                offer_product(rest, acc, collector);
                acc.truncate(mark);
            }
        }
    }
}

fn straights(by_value: &[SmallVec<[Card; 4]>; 15], phoenix: bool, collector: &mut Collector) {
    let singles: Vec<Vec<Candidate>> = by_value.iter().map(|group| choose(group, 1)).collect();
    let phoenix_slot: Vec<Candidate> = vec![Candidate::from_slice(&[Card::PHOENIX])];

    for low in 1..=10usize {
        for high in (low + 4)..=14 {
            let window = low..=high;
            let missing: SmallVec<[usize; 14]> =
                window.clone().filter(|&v| singles[v].is_empty()).collect();

            match (missing.as_slice(), phoenix) {
                ([], _) => {
                    let slots: Vec<&[Candidate]> =
                        window.clone().map(|v| singles[v].as_slice()).collect();
                    offer_product(&slots, &mut Candidate::new(), collector);

                    if phoenix {
                        // Phoenix replaces one held rank card.
                        for skip in window.clone().filter(|&v| v >= 2) {
                            let slots: Vec<&[Candidate]> = window
                                .clone()
                                .map(|v| if v == skip { phoenix_slot.as_slice() } else { singles[v].as_slice() })
                                .collect();
                            offer_product(&slots, &mut Candidate::new(), collector);
                        }
                    }
                }
                ([gap], true) if *gap >= 2 => {
                    let slots: Vec<&[Candidate]> = window
                        .clone()
                        .map(|v| if v == *gap { phoenix_slot.as_slice() } else { singles[v].as_slice() })
                        .collect();
                    offer_product(&slots, &mut Candidate::new(), collector);
                }
                _ => {}
            }
        }
    }
}

fn pair_sequences(by_value: &[SmallVec<[Card; 4]>; 15], phoenix: bool, collector: &mut Collector) {
    let natural: Vec<Vec<Candidate>> = by_value.iter().map(|group| choose(group, 2)).collect();
    let completed: Vec<Vec<Candidate>> = by_value
        .iter()
        .map(|group| {
            if phoenix {
                choose(group, 1).iter().map(|single| with_phoenix(single)).collect()
            } else {
                Vec::new()
            }
        })
        .collect();

    for low in 2..=13usize {
        for high in (low + 1)..=14 {
            let window = low..=high;

            let slots: Vec<&[Candidate]> = window.clone().map(|v| natural[v].as_slice()).collect();
            if slots.iter().all(|options| !options.is_empty()) {
                offer_product(&slots, &mut Candidate::new(), collector);
            }

            if phoenix {
                for boosted in window.clone() {
                    let slots: Vec<&[Candidate]> = window
                        .clone()
                        .map(|v| if v == boosted { completed[v].as_slice() } else { natural[v].as_slice() })
                        .collect();
                    if slots.iter().all(|options| !options.is_empty()) {
                        offer_product(&slots, &mut Candidate::new(), collector);
                    }
                }
            }
        }
    }
}
