//! Game configuration.
//!
//! Scoring constants and optional behaviours are passed into `Game`
//! explicitly; nothing in the engine reads process-wide settings.

use serde::{Deserialize, Serialize};

/// Hand rating above which `GameConfig::classic` auto-declares.
pub const CLASSIC_DECLARE_THRESHOLD: f32 = 90.0;

/// Complete game configuration.
///
/// ```
/// use rust_tichu::core::GameConfig;
///
/// let config = GameConfig::default().with_early_finish_bonus(50);
/// assert_eq!(config.early_finish_bonus, 50);
/// assert_eq!(config.auto_declare_threshold, None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Points won (or lost) by an early-finish declaration.
    pub early_finish_bonus: i32,

    /// Score assigned to each member of a team that finishes first and second.
    pub double_finish_bonus: i32,

    /// When set, players whose opening hand rating exceeds this value declare
    /// early finish right after the deal.
    pub auto_declare_threshold: Option<f32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            early_finish_bonus: 100,
            double_finish_bonus: 100,
            auto_declare_threshold: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default scoring with automatic early-finish declarations enabled.
    pub fn classic() -> Self {
        Self::default().with_auto_declare(CLASSIC_DECLARE_THRESHOLD)
    }

    /// Set the early-finish bonus/penalty.
    #[must_use]
    pub fn with_early_finish_bonus(mut self, bonus: i32) -> Self {
        self.early_finish_bonus = bonus;
        self
    }

    /// Set the per-player double-finish score.
    #[must_use]
    pub fn with_double_finish_bonus(mut self, bonus: i32) -> Self {
        self.double_finish_bonus = bonus;
        self
    }

    /// Enable automatic early-finish declarations at the given rating.
    #[must_use]
    pub fn with_auto_declare(mut self, threshold: f32) -> Self {
        self.auto_declare_threshold = Some(threshold);
        self
    }
}

/// Configuration for the simulation driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Maximum `step` calls per game before the run is aborted.
    pub max_steps: usize,

    /// Seed offset combined with the game index for batch runs.
    pub seed_offset: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            seed_offset: 0,
        }
    }
}

impl SimConfig {
    /// Create the default simulation configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-game step limit.
    #[must_use]
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }

    /// Set the seed offset.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}
