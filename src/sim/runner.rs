//! Game runner and batch simulation.
//!
//! Runs games between strategies with a hard step limit, so a strategy
//! that keeps submitting illegal moves cannot stall a batch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::agents::Strategy;
use crate::cards::CardSet;
use crate::core::{GameConfig, GameError, GameRng, PlayerId, SimConfig, SEATS};
use crate::game::Game;
use crate::rules::{GameResult, RulesEngine};

/// Summary of one simulated game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    /// Deal seed, when the game was dealt by the runner.
    pub seed: Option<u64>,
    /// `None` if the step limit was hit first.
    pub result: Option<GameResult>,
    pub scores: [i32; SEATS],
    pub finish_order: Vec<PlayerId>,
    /// Accepted moves.
    pub steps: usize,
    /// Moves the engine rejected.
    pub rejected: usize,
}

impl GameRecord {
    /// Whether the game reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }
}

/// Play `game` to the end, or until `config.max_steps` calls to `step`.
///
/// A rejected move is replaced by the player's first legal move so the
/// game always progresses.
pub fn run_game(
    mut game: Game,
    strategies: &[&dyn Strategy; SEATS],
    rng: &mut GameRng,
    config: &SimConfig,
) -> Result<GameRecord, GameError> {
    let mut steps = 0;
    let mut rejected = 0;
    let mut calls = 0;

    while game.is_terminal().is_none() && calls < config.max_steps {
        let player = game.current_player();
        let strategy = strategies[player.index()];
        let chosen = strategy.choose_move(&game, player, rng);

        calls += 1;
        let mut outcome = game.apply_action(player, &chosen)?;
        if !outcome.accepted {
            rejected += 1;
            debug!(%player, strategy = strategy.name(), cards = %chosen, "strategy move rejected");
            let fallback = game
                .legal_actions(player)
                .into_iter()
                .next()
                .unwrap_or_else(CardSet::new);
            calls += 1;
            outcome = game.apply_action(player, &fallback)?;
        }
        if outcome.accepted {
            steps += 1;
        }
    }

    let result = game.is_terminal();
    if result.is_none() {
        warn!(steps, rejected, "game aborted at step limit");
    }

    Ok(GameRecord {
        seed: None,
        result,
        scores: game.scores(),
        finish_order: game.finish_order().to_vec(),
        steps,
        rejected,
    })
}

/// Aggregate statistics over many games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    /// Wins of the team of seats 0/2 and of seats 1/3.
    pub team_wins: [usize; 2],
    pub draws: usize,
    pub aborted: usize,
    pub mean_steps: f64,
}

impl BatchSummary {
    #[must_use]
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut summary = Self {
            games: records.len(),
            ..Self::default()
        };
        for record in records {
            match &record.result {
                Some(GameResult::Winners(team)) => {
                    if let Some(seat) = team.first() {
                        summary.team_wins[seat.index() % 2] += 1;
                    }
                }
                Some(GameResult::Draw) => summary.draws += 1,
                None => summary.aborted += 1,
            }
        }
        if !records.is_empty() {
            let total: usize = records.iter().map(|r| r.steps).sum();
            summary.mean_steps = total as f64 / records.len() as f64;
        }
        summary
    }
}

/// Play `count` independently seeded games.
///
/// Game `i` is dealt from seed `seed_offset + i`; strategy randomness uses
/// a separate stream of the same seed.
pub fn run_batch(
    count: usize,
    game_config: &GameConfig,
    strategies: &[&dyn Strategy; SEATS],
    config: &SimConfig,
) -> Result<Vec<GameRecord>, GameError> {
    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let seed = config.seed_offset.wrapping_add(i as u64);
        let game = Game::with_config(seed, game_config.clone());
        let mut rng = GameRng::new(seed).for_context("play");
        let mut record = run_game(game, strategies, &mut rng, config)?;
        record.seed = Some(seed);
        records.push(record);
    }

    let summary = BatchSummary::from_records(&records);
    info!(
        games = summary.games,
        even_team = summary.team_wins[0],
        odd_team = summary.team_wins[1],
        draws = summary.draws,
        aborted = summary.aborted,
        "batch complete"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{GreedyStrategy, RandomStrategy};

    /// Always submits a card nobody can hold twice.
    struct Stubborn;

    impl Strategy for Stubborn {
        fn choose_move(&self, _game: &Game, _player: PlayerId, _rng: &mut GameRng) -> CardSet {
            CardSet::from_cards([crate::cards::Card::DRAGON, crate::cards::Card::DRAGON])
        }

        fn name(&self) -> &'static str {
            "stubborn"
        }
    }

    #[test]
    fn test_greedy_game_completes() {
        let greedy = GreedyStrategy;
        let strategies: [&dyn Strategy; SEATS] = [&greedy, &greedy, &greedy, &greedy];
        let record = run_game(Game::new(3), &strategies, &mut GameRng::new(3), &SimConfig::default()).unwrap();

        assert!(record.is_complete());
        assert!(record.finish_order.len() >= 2);
        assert_eq!(record.rejected, 0);
    }

    #[test]
    fn test_step_limit_aborts() {
        let random = RandomStrategy;
        let strategies: [&dyn Strategy; SEATS] = [&random, &random, &random, &random];
        let config = SimConfig::new().with_max_steps(3);
        let record = run_game(Game::new(1), &strategies, &mut GameRng::new(1), &config).unwrap();

        assert!(!record.is_complete());
        assert!(record.steps <= 3);
    }

    #[test]
    fn test_rejected_moves_fall_back() {
        let stubborn = Stubborn;
        let strategies: [&dyn Strategy; SEATS] = [&stubborn, &stubborn, &stubborn, &stubborn];
        let record = run_game(Game::new(8), &strategies, &mut GameRng::new(8), &SimConfig::default()).unwrap();

        assert!(record.is_complete());
        assert_eq!(record.rejected, record.steps);
    }

    #[test]
    fn test_summary() {
        let records = vec![
            GameRecord {
                seed: Some(0),
                result: Some(GameResult::Winners(vec![PlayerId::new(1), PlayerId::new(3)])),
                scores: [0, 100, 0, 100],
                finish_order: vec![PlayerId::new(1), PlayerId::new(3)],
                steps: 10,
                rejected: 0,
            },
            GameRecord {
                seed: Some(1),
                result: None,
                scores: [0; SEATS],
                finish_order: Vec::new(),
                steps: 20,
                rejected: 0,
            },
        ];
        let summary = BatchSummary::from_records(&records);
        assert_eq!(summary.team_wins, [0, 1]);
        assert_eq!(summary.aborted, 1);
        assert_eq!(summary.mean_steps, 15.0);
    }
}
