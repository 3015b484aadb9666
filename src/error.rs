//! Error types
//!
//! `EngineError` covers bad arguments at a call boundary, `ConfigError`
//! covers configuration that cannot be loaded or is inconsistent.

use thiserror::Error;

/// Invalid argument passed to one of the engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("level must be at least 1")]
    LevelZero,

    #[error("level {level} is above the top of the curve ({max})")]
    LevelAboveCap { level: u32, max: u32 },

    #[error("sample {0} is outside [0, 100)")]
    SampleOutOfRange(f64),

    #[error("multiplier {0} must be a finite, non-negative number")]
    InvalidMultiplier(f64),

    #[error("prize '{label}' has invalid weight {weight}")]
    InvalidWeight { label: String, weight: f64 },

    #[error("prize '{label}' has invalid base value {value}")]
    InvalidBaseValue { label: String, value: f64 },

    #[error("prize weights sum to {0}, which exceeds 100")]
    WeightSumExceeded(f64),

    #[error("no prize pool named '{0}'")]
    UnknownPool(String),
}

/// Configuration that failed to load or failed validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("anchor table is empty")]
    EmptyAnchors,

    #[error("first anchor must be level 1 with amount 0, found level {level} amount {amount}")]
    BadFirstAnchor { level: u32, amount: u64 },

    #[error("anchor levels must strictly increase (level {level} follows {previous})")]
    UnsortedAnchors { previous: u32, level: u32 },

    #[error("anchor amount for level {level} ({amount}) is below the previous anchor ({previous})")]
    DecreasingAnchors { level: u32, amount: u64, previous: u64 },

    #[error("early step of {step} per level overshoots anchor level {level}")]
    EarlyStepOvershoot { step: u64, level: u32 },

    #[error("linear extension step must be greater than 0")]
    ZeroExtensionStep,

    #[error("curve decreases at level {level}")]
    NonMonotonic { level: u32 },

    #[error("tier bands: {0}")]
    TierBands(String),

    #[error("prize pool '{name}': {source}")]
    Pool {
        name: String,
        #[source]
        source: EngineError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON write error: {0}")]
    RonWrite(#[from] ron::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
