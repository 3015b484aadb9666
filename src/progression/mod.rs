//! Progression systems

pub mod curve;
pub mod tier;
pub mod engine;
pub mod table;

pub use curve::{Anchor, AnchorTable, CurveConfig, ExtensionPolicy, ProgressionCurve};
pub use curve::{DEFAULT_ANCHORS, DEFAULT_EARLY_STEP};
pub use tier::{Tier, TierBand, TierBands};
pub use engine::{LevelProgress, ProgressionEngine, MIN_CASHBACK};
pub use table::{LevelRow, TierSummary, format_table};
