//! Simulation driver.
//!
//! ```
//! use rust_tichu::agents::{GreedyStrategy, RandomStrategy, Strategy};
//! use rust_tichu::core::{GameConfig, SimConfig};
//! use rust_tichu::sim::{run_batch, BatchSummary};
//!
//! let (greedy, random) = (GreedyStrategy, RandomStrategy);
//! let seats: [&dyn Strategy; 4] = [&greedy, &random, &greedy, &random];
//! let records = run_batch(4, &GameConfig::default(), &seats, &SimConfig::default()).unwrap();
//! let summary = BatchSummary::from_records(&records);
//! assert_eq!(summary.games, 4);
//! ```

mod runner;

pub use runner::{run_batch, run_game, BatchSummary, GameRecord};
