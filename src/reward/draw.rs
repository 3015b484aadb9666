//! Weighted reward draw
//!
//! One sample decides both whether the round wins and which prize pays.
//! The draw mode decides whether the multiplier raises the chance of
//! winning or the value paid.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use super::pool::{PrizePool, MAX_TOTAL_WEIGHT};
use super::sample::Sample;

/// How a multiplier affects a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawMode {
    /// Legacy: multiplier scales the win chance, capped at 100
    ProbabilityScaled,
    /// Current: multiplier scales the payout, chance is untouched
    #[default]
    ValueScaled,
}

impl DrawMode {
    pub fn name(&self) -> &'static str {
        match self {
            DrawMode::ProbabilityScaled => "probability",
            DrawMode::ValueScaled => "value",
        }
    }
}

impl std::str::FromStr for DrawMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "probability" | "probability-scaled" | "legacy" => Ok(DrawMode::ProbabilityScaled),
            "value" | "value-scaled" => Ok(DrawMode::ValueScaled),
            other => Err(format!("unknown draw mode '{}'", other)),
        }
    }
}

/// Bet-size multiplier chosen per round
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(f64);

impl Multiplier {
    pub const ONE: Multiplier = Multiplier(1.0);

    pub fn new(value: f64) -> Result<Self, EngineError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(EngineError::InvalidMultiplier(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Multiplier> for f64 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.0
    }
}

/// Result of a single draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub won: bool,
    pub prize_label: Option<String>,
    pub paid_value: f64,
}

impl RollOutcome {
    pub fn loss() -> Self {
        Self {
            won: false,
            prize_label: None,
            paid_value: 0.0,
        }
    }
}

/// Chance of winning, in percentage points, after the mode is applied
pub fn effective_probability(pool: &PrizePool, multiplier: Multiplier, mode: DrawMode) -> f64 {
    let total = pool.total_weight();
    match mode {
        DrawMode::ValueScaled => total,
        DrawMode::ProbabilityScaled => (total * multiplier.value()).min(MAX_TOTAL_WEIGHT),
    }
}

/// Run one draw against `pool` with an externally supplied sample
pub fn draw(pool: &PrizePool, multiplier: Multiplier, mode: DrawMode, sample: Sample) -> RollOutcome {
    let total = pool.total_weight();
    let effective = effective_probability(pool, multiplier, mode);
    let roll = sample.value();
    let won = roll < effective;

    log::debug!(
        "Total probability: {}%, multiplier: {}x ({}), effective: {}%, roll: {}, won: {}",
        total,
        multiplier.value(),
        mode.name(),
        effective,
        roll,
        won
    );

    if !won {
        return RollOutcome::loss();
    }

    // A boosted win spans [0, effective); scale it onto [0, total) so each
    // prize keeps its share of the wins.
    let point = if effective > total { roll * total / effective } else { roll };
    let entry = pool
        .select(point)
        .or_else(|| pool.entries().iter().rev().find(|e| e.weight > 0.0));

    let Some(entry) = entry else {
        return RollOutcome::loss();
    };

    let paid_value = match mode {
        DrawMode::ValueScaled => entry.base_value * multiplier.value(),
        DrawMode::ProbabilityScaled => entry.base_value,
    };

    RollOutcome {
        won: true,
        prize_label: Some(entry.label.clone()),
        paid_value,
    }
}

/// `draw` with raw inputs, validated at the boundary
pub fn try_draw(
    pool: &PrizePool,
    multiplier: f64,
    mode: DrawMode,
    sample: f64,
) -> Result<RollOutcome, EngineError> {
    let multiplier = Multiplier::new(multiplier)?;
    let sample = Sample::new(sample)?;
    Ok(draw(pool, multiplier, mode, sample))
}
