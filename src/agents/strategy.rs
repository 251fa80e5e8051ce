//! Move-selection strategies.

use crate::cards::{Card, CardSet};
use crate::combos::{CombinationType, Combinations};
use crate::core::{GameRng, PlayerId};
use crate::game::Game;
use crate::stack::Trick;

/// Chooses a move for the active player.
pub trait Strategy: Send + Sync {
    /// Pick a move for `player`. The empty set is a pass.
    fn choose_move(&self, game: &Game, player: PlayerId, rng: &mut GameRng) -> CardSet;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

// =============================================================================
// Helpers
// =============================================================================

/// Lowest combination of `kind` that can follow the trick. A lone Phoenix
/// is only used when nothing else of the type follows.
pub fn lowest_follow(combos: &Combinations, kind: CombinationType, trick: &Trick) -> Option<CardSet> {
    let candidates = combos.get(kind);
    candidates
        .iter()
        .filter(|set| !set.is_single(Card::PHOENIX))
        .chain(candidates.iter().filter(|set| set.is_single(Card::PHOENIX)))
        .find(|set| trick.can_follow(set))
        .cloned()
}

/// Lowest combination of the trick's type that beats it, else the lowest
/// four-bomb, else the lowest straight-bomb.
pub fn beat_or_bomb(combos: &Combinations, trick: &Trick) -> Option<CardSet> {
    lowest_follow(combos, trick.kind(), trick)
        .or_else(|| lowest_follow(combos, CombinationType::FourBomb, trick))
        .or_else(|| lowest_follow(combos, CombinationType::StraightBomb, trick))
}

// =============================================================================
// Random
// =============================================================================

/// Opens with a random combination. Passes on its partner's lead and
/// otherwise plays [`beat_or_bomb`], or passes.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_move(&self, game: &Game, player: PlayerId, rng: &mut GameRng) -> CardSet {
        let me = game.player(player);
        if me.is_finished() {
            return CardSet::new();
        }
        let trick = game.trick();
        if trick.is_empty() {
            return me.random_move(rng).unwrap_or_default();
        }
        if game.leading_player() == player.teammate() {
            return CardSet::new();
        }
        beat_or_bomb(&me.legal_combinations(), trick).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

// =============================================================================
// Greedy
// =============================================================================

/// Tries to win every trick its partner is not already winning.
///
/// - Leads the lowest combination of a random available type
/// - Beats opponents with the lowest combination of the trick's type
/// - Falls back to the lowest four-bomb, then the lowest straight-bomb
#[derive(Clone, Debug, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn choose_move(&self, game: &Game, player: PlayerId, rng: &mut GameRng) -> CardSet {
        let me = game.player(player);
        if me.is_finished() {
            return CardSet::new();
        }
        let trick = game.trick();
        let combos = me.legal_combinations();

        if trick.is_empty() {
            let kinds: Vec<CombinationType> = combos.available_kinds().collect();
            return rng
                .choose(&kinds)
                .and_then(|&kind| combos.get(kind).first().cloned())
                .unwrap_or_default();
        }
        if game.leading_player() == player.teammate() {
            return CardSet::new();
        }

        beat_or_bomb(&combos, trick).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
