//! Wagerline - wager-based progression and reward draws
//!
//! Maps lifetime wager totals to levels and tiers, and decides per round
//! whether a player wins a prize and what it pays.

pub mod error;
pub mod progression;
pub mod reward;
pub mod data;

// Re-export commonly used types
pub use error::{ConfigError, EngineError};
pub use progression::{LevelProgress, ProgressionCurve, ProgressionEngine, Tier};
pub use reward::{draw, DrawMode, Multiplier, PrizePool, RollOutcome, Sample};
pub use data::GameConfig;
