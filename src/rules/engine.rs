//! The seam between the Tichu state machine and code that drives it.

use crate::core::{GameError, PlayerId};

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Seats of the team with the higher score, lower seat first.
    Winners(Vec<PlayerId>),
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winners(team) if team.contains(&player))
    }
}

/// Turn-based rules as seen by a driver.
///
/// Illegal moves come back through `Outcome`; `Err` is reserved for
/// calls the engine cannot answer at all, such as moving after the end.
pub trait RulesEngine {
    /// A move as submitted by a player.
    type Move;

    /// What applying a move reports back.
    type Outcome;

    fn current_player(&self) -> PlayerId;

    /// Empty when `player` cannot move now.
    fn legal_actions(&self, player: PlayerId) -> Vec<Self::Move>;

    fn apply_action(&mut self, player: PlayerId, action: &Self::Move) -> Result<Self::Outcome, GameError>;

    /// `None` while the game continues.
    fn is_terminal(&self) -> Option<GameResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winners_are_one_team() {
        assert!(PlayerId::all().all(|p| !GameResult::Draw.is_winner(p)));

        let odd = GameResult::Winners(vec![PlayerId::new(1), PlayerId::new(3)]);
        let won: Vec<_> = PlayerId::all().filter(|&p| odd.is_winner(p)).collect();
        assert_eq!(won, [PlayerId::new(1), PlayerId::new(3)]);
    }
}
