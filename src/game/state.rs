//! The game state machine.
//!
//! A game waits for its `active_player` to move until it is over. Each
//! call to `Game::step` is one move: a pass (the empty set) or a play.
//!
//! ## Turn flow
//!
//! - Three consecutive passes resolve the trick. Its points go to the
//!   leading player, or to an opponent when the Dragon is in it.
//! - The Dog hands the lead to the partner (or the next seat still in the
//!   game) and clears the trick.
//! - Finished players keep their seat and must pass.
//!
//! ## Game end
//!
//! - Partners finishing first and second end the game with a double
//!   finish.
//! - Otherwise the game ends when three players are out. The last
//!   player's hand points go to the other team and their trick points to
//!   the first finisher.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, CardSet, Deck, Power};
use crate::combos::CombinationType;
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap, SEATS};
use crate::rules::{GameResult, RulesEngine};
use crate::stack::Trick;

use super::player::Player;

/// Consecutive passes that close a trick.
const PASSES_TO_RESOLVE: u8 = 3;

/// Result of one `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Whether the move was legal and applied.
    pub accepted: bool,
    /// Change in each seat's score caused by the move.
    pub points_delta: [i32; SEATS],
}

impl StepOutcome {
    /// A rejected move; nothing changed.
    #[must_use]
    pub const fn rejected() -> Self {
        Self {
            accepted: false,
            points_delta: [0; SEATS],
        }
    }
}

/// A four-player game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    trick: Trick,
    active_player: PlayerId,
    leading_player: PlayerId,
    finish_order: Vec<PlayerId>,
    pass_count: u8,
    early_finish_ledger: PlayerMap<i32>,
    finished: bool,
}

impl Game {
    /// Deal a game with the default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Deal a game from `seed`.
    #[must_use]
    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let mut rng = GameRng::new(seed).for_context("deal");
        let hands = Deck::shuffle_and_deal(&mut rng);
        debug!(seed, "dealt new game");
        Self::from_hands(hands, config)
    }

    /// Start a game from fixed hands. Hands need not be full.
    ///
    /// The Mahjong holder starts, or seat 0 when nobody holds it.
    #[must_use]
    pub fn from_hands(hands: [CardSet; SEATS], config: GameConfig) -> Self {
        let mut players = PlayerMap::new(Player::new);
        for (id, hand) in PlayerId::all().zip(hands) {
            players[id].assign_hand(hand);
        }

        let start = PlayerId::all()
            .find(|&id| players[id].hand().contains(Card::MAHJONG))
            .unwrap_or(PlayerId::new(0));

        let mut game = Self {
            config,
            players,
            trick: Trick::new(),
            active_player: start,
            leading_player: start,
            finish_order: Vec::new(),
            pass_count: 0,
            early_finish_ledger: PlayerMap::with_value(0),
            finished: false,
        };
        game.auto_declare();
        game
    }

    fn auto_declare(&mut self) {
        let Some(threshold) = self.config.auto_declare_threshold else {
            return;
        };
        for offset in 0..SEATS as u8 {
            let seat = self.active_player.offset(offset);
            if self.players[seat.teammate()].has_declared() {
                continue;
            }
            let player = &mut self.players[seat];
            if player.hand_rating() > threshold && player.declare_early_finish() {
                debug!(player = %seat, rating = player.hand_rating(), "declared early finish");
            }
        }
    }

    // === Observers ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Owner of the current top play, or the player to lead.
    #[must_use]
    pub fn leading_player(&self) -> PlayerId {
        self.leading_player
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn hand_size(&self, id: PlayerId) -> usize {
        self.players[id].hand_size()
    }

    #[must_use]
    pub fn has_declared(&self, id: PlayerId) -> bool {
        self.players[id].has_declared()
    }

    #[must_use]
    pub fn is_player_finished(&self, id: PlayerId) -> bool {
        self.players[id].is_finished()
    }

    #[must_use]
    pub fn score(&self, id: PlayerId) -> i32 {
        self.players[id].points()
    }

    #[must_use]
    pub fn scores(&self) -> [i32; SEATS] {
        std::array::from_fn(|i| self.players[PlayerId::new(i as u8)].points())
    }

    /// Combined score of `id` and their partner.
    #[must_use]
    pub fn team_score(&self, id: PlayerId) -> i32 {
        self.score(id) + self.score(id.teammate())
    }

    /// Early-finish bonus (or penalty) settled for a seat.
    #[must_use]
    pub fn early_finish_settlement(&self, id: PlayerId) -> i32 {
        self.early_finish_ledger[id]
    }

    #[must_use]
    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    #[must_use]
    pub fn trick_kind(&self) -> CombinationType {
        self.trick.kind()
    }

    #[must_use]
    pub fn trick_power(&self) -> Power {
        self.trick.power()
    }

    #[must_use]
    pub fn trick_points(&self) -> i32 {
        self.trick.points()
    }

    /// Seats in the order they ran out of cards.
    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    /// Consecutive passes on the current trick.
    #[must_use]
    pub fn pass_count(&self) -> u8 {
        self.pass_count
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // === Moves ===

    /// Declare early finish for a seat that has not played yet.
    pub fn declare_early_finish(&mut self, id: PlayerId) -> bool {
        !self.finished && self.players[id].declare_early_finish()
    }

    /// Every move `id` may make now: passes and plays that would be accepted.
    #[must_use]
    pub fn legal_moves(&self, id: PlayerId) -> Vec<CardSet> {
        if self.finished || id != self.active_player {
            return Vec::new();
        }
        let mut moves = Vec::new();
        if self.can_pass(id) {
            moves.push(CardSet::new());
        }
        moves.extend(
            self.players[id]
                .legal_combinations()
                .iter()
                .filter(|set| self.trick.can_follow(set))
                .cloned(),
        );
        moves
    }

    fn can_pass(&self, id: PlayerId) -> bool {
        !self.trick.is_empty() || self.players[id].is_finished()
    }

    /// Apply one move.
    ///
    /// Illegal moves are rejected without changing anything. A pass on an
    /// empty trick counts as illegal unless the player is already out.
    /// Returns `GameError::GameOver` once the game has ended.
    pub fn step(&mut self, player: PlayerId, cards: &CardSet) -> Result<StepOutcome, GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        if player != self.active_player {
            trace!(%player, active = %self.active_player, "move out of turn");
            return Ok(StepOutcome::rejected());
        }

        let before = self.scores();
        let accepted = if cards.is_empty() {
            self.pass(player)
        } else {
            self.play(player, cards)
        };
        if !accepted {
            return Ok(StepOutcome::rejected());
        }

        let after = self.scores();
        Ok(StepOutcome {
            accepted: true,
            points_delta: std::array::from_fn(|i| after[i] - before[i]),
        })
    }

    fn pass(&mut self, player: PlayerId) -> bool {
        if !self.can_pass(player) {
            trace!(%player, "cannot pass on an empty trick");
            return false;
        }
        self.pass_count += 1;
        if self.pass_count >= PASSES_TO_RESOLVE {
            self.resolve_trick();
        } else {
            self.active_player = player.next();
        }
        true
    }

    fn play(&mut self, player: PlayerId, cards: &CardSet) -> bool {
        if !self.players[player].attempt_move(cards) || !self.trick.add(cards) {
            trace!(%player, %cards, "rejected play");
            return false;
        }
        self.players[player].remove_cards(cards);
        self.pass_count = 0;
        debug!(%player, %cards, combination = %cards.combination(), "play");

        if cards.is_single(Card::DOG) {
            let next = self.first_unfinished_from(player.teammate());
            debug!(%player, to = %next, "dog passes the lead");
            self.trick.reset();
            self.leading_player = next;
            self.active_player = next;
        } else {
            self.leading_player = player;
            self.active_player = player.next();
        }

        if self.players[player].is_finished() {
            self.player_finished(player);
        }
        true
    }

    /// `from` itself if still playing, else the next seat that is.
    fn first_unfinished_from(&self, from: PlayerId) -> PlayerId {
        (0..SEATS as u8)
            .map(|offset| from.offset(offset))
            .find(|&seat| !self.players[seat].is_finished())
            .unwrap_or(from)
    }

    /// Opponent of the trick winner who receives a Dragon trick.
    fn dragon_recipient(&self, winner: PlayerId) -> PlayerId {
        let [first, second] = winner.opponents();
        match (self.has_declared(first), self.has_declared(second)) {
            (true, false) => second,
            (false, true) => first,
            _ if self.hand_size(first) < self.hand_size(second) => second,
            _ => first,
        }
    }

    fn award_trick(&mut self) {
        let winner = self.leading_player;
        let points = self.trick.points();
        let recipient = if self.trick.has_dragon() {
            self.dragon_recipient(winner)
        } else {
            winner
        };
        self.players[recipient].add_points(points);
        debug!(%winner, %recipient, points, dragon = self.trick.has_dragon(), "trick resolved");
    }

    fn resolve_trick(&mut self) {
        self.award_trick();
        self.trick.reset();
        let next = self.first_unfinished_from(self.leading_player);
        self.leading_player = next;
        self.active_player = next;
        self.pass_count = 0;
    }

    fn player_finished(&mut self, player: PlayerId) {
        self.finish_order.push(player);
        debug!(%player, place = self.finish_order.len(), "player finished");
        self.settle_declarations(player);

        match self.finish_order.as_slice() {
            [first, second] if first.is_partner_of(*second) => self.double_finish(*first, *second),
            [first, _, _] => self.regular_end(*first),
            _ => {}
        }
    }

    fn settle_declarations(&mut self, player: PlayerId) {
        let first_out = self.finish_order.len() == 1;
        let bonus = self.config.early_finish_bonus;
        for seat in PlayerId::all() {
            if !self.players[seat].has_declared() {
                continue;
            }
            let amount = if first_out && seat == player { bonus } else { -bonus };
            self.players[seat].add_points(amount);
            self.players[seat].settle_declaration();
            self.early_finish_ledger[seat] = amount;
            debug!(player = %seat, amount, "early finish settled");
        }
    }

    fn double_finish(&mut self, first: PlayerId, second: PlayerId) {
        let bonus = self.config.double_finish_bonus;
        for winner in [first, second] {
            let total = bonus + self.early_finish_ledger[winner];
            self.players[winner].set_points(total);
        }
        for opponent in first.opponents() {
            self.players[opponent].set_points(0);
        }
        self.finished = true;
        debug!(%first, %second, "double finish");
    }

    fn regular_end(&mut self, first: PlayerId) {
        if self.trick.has_dragon() {
            self.award_trick();
            self.trick.reset();
        }

        if let Some(last) = PlayerId::all().find(|&id| !self.players[id].is_finished()) {
            let hand_points = self.players[last].hand().points();
            let [receiver, _] = last.opponents();
            self.players[receiver].add_points(hand_points);

            let trick_points = self.players[last].points();
            self.players[first].add_points(trick_points);
            self.players[last].set_points(0);
            debug!(%last, hand_points, trick_points, "last player settled");
        }

        self.finished = true;
        debug!(scores = ?self.scores(), "game over");
    }

    /// Outcome once the game is over: the team with the higher score wins.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.finished {
            return None;
        }
        let even = PlayerId::new(0);
        let odd = PlayerId::new(1);
        Some(match self.team_score(even).cmp(&self.team_score(odd)) {
            std::cmp::Ordering::Greater => GameResult::Winners(vec![even, even.teammate()]),
            std::cmp::Ordering::Less => GameResult::Winners(vec![odd, odd.teammate()]),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}

impl RulesEngine for Game {
    type Move = CardSet;
    type Outcome = StepOutcome;

    fn current_player(&self) -> PlayerId {
        self.active_player
    }

    fn legal_actions(&self, player: PlayerId) -> Vec<CardSet> {
        self.legal_moves(player)
    }

    fn apply_action(&mut self, player: PlayerId, action: &CardSet) -> Result<StepOutcome, GameError> {
        self.step(player, action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result()
    }
}
