//! Progression engine
//!
//! Combines the requirement curve with the tier bands. Every query is a pure
//! function of the immutable configuration and its arguments.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use super::curve::ProgressionCurve;
use super::tier::{Tier, TierBands};

/// Curve and tier bands loaded from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionEngine {
    pub curve: ProgressionCurve,
    #[serde(default)]
    pub tiers: TierBands,
}

/// Smallest cashback worth paying out
pub const MIN_CASHBACK: f64 = 0.50;

/// Where a player stands for a given cumulative wager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    pub tier: Tier,
    pub current_required: u64,
    /// Absent at the top level when the curve does not extend
    pub next_required: Option<u64>,
    pub remaining_to_next: Option<u64>,
}

impl ProgressionEngine {
    pub fn new(curve: ProgressionCurve, tiers: TierBands) -> Self {
        Self { curve, tiers }
    }

    pub fn required_wager(&self, level: u32) -> Result<u64, EngineError> {
        self.curve.required_wager(level)
    }

    pub fn incremental_cost(&self, level: u32) -> Result<u64, EngineError> {
        self.curve.incremental_cost(level)
    }

    pub fn tier_for(&self, level: u32) -> Result<Tier, EngineError> {
        self.tiers.tier_for(level)
    }

    pub fn level_for_wager(&self, total: u64) -> u32 {
        self.curve.level_for_wager(total)
    }

    /// Daily cashback on `net_loss` for a player at `level`.
    ///
    /// Nothing below level 2, nothing without a positive loss, and nothing
    /// when the amount comes to less than `MIN_CASHBACK`.
    pub fn cashback_for(&self, level: u32, net_loss: f64) -> Result<Option<f64>, EngineError> {
        let tier = self.tier_for(level)?;
        if level < 2 || !(net_loss > 0.0) {
            return Ok(None);
        }

        let amount = net_loss * tier.cashback_percent() / 100.0;
        Ok((amount >= MIN_CASHBACK).then_some(amount))
    }

    /// Level, tier and distance to the next level for a cumulative wager
    pub fn progress(&self, total: u64) -> Result<LevelProgress, EngineError> {
        let level = self.level_for_wager(total);
        let tier = self.tier_for(level)?;
        let current_required = self.required_wager(level)?;
        let next_required = level
            .checked_add(1)
            .and_then(|next| self.required_wager(next).ok());

        Ok(LevelProgress {
            level,
            tier,
            current_required,
            next_required,
            remaining_to_next: next_required.map(|next| next.saturating_sub(total)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::curve::{CurveConfig, ExtensionPolicy};

    #[test]
    fn test_cashback_per_tier() {
        let engine = ProgressionEngine::default();
        assert_eq!(engine.cashback_for(10, 100.0), Ok(Some(1.5)));
        assert_eq!(engine.cashback_for(30, 100.0), Ok(Some(3.0)));
        assert_eq!(engine.cashback_for(60, 100.0), Ok(Some(6.0)));
        assert_eq!(engine.cashback_for(80, 100.0), Ok(Some(12.0)));
        assert_eq!(engine.cashback_for(100, 100.0), Ok(Some(24.0)));
    }

    #[test]
    fn test_cashback_skips_level_one() {
        let engine = ProgressionEngine::default();
        assert_eq!(engine.cashback_for(1, 10_000.0), Ok(None));
        assert_eq!(engine.cashback_for(0, 100.0), Err(EngineError::LevelZero));
    }

    #[test]
    fn test_cashback_needs_positive_loss() {
        let engine = ProgressionEngine::default();
        assert_eq!(engine.cashback_for(100, 0.0), Ok(None));
        assert_eq!(engine.cashback_for(100, -250.0), Ok(None));
        assert_eq!(engine.cashback_for(100, f64::NAN), Ok(None));
    }

    #[test]
    fn test_cashback_minimum_payout() {
        let engine = ProgressionEngine::default();
        // Platinum 12%: 4.0 -> 0.48, 5.0 -> 0.60
        assert_eq!(engine.cashback_for(80, 4.0), Ok(None));
        assert_eq!(engine.cashback_for(80, 5.0), Ok(Some(0.6)));
        // Bronze 1.5%: 100.0 -> 1.5 but 33.0 -> 0.495
        assert_eq!(engine.cashback_for(2, 33.0), Ok(None));
        assert!(engine.cashback_for(2, 34.0).unwrap().unwrap() >= MIN_CASHBACK);
    }

    #[test]
    fn test_progress_mid_curve() {
        let engine = ProgressionEngine::default();
        let progress = engine.progress(100).unwrap();
        assert_eq!(progress.level, 3);
        assert_eq!(progress.tier, Tier::Bronze);
        assert_eq!(progress.current_required, 83);
        assert_eq!(progress.next_required, Some(116));
        assert_eq!(progress.remaining_to_next, Some(16));
    }

    #[test]
    fn test_progress_new_player() {
        let progress = ProgressionEngine::default().progress(0).unwrap();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.tier, Tier::None);
        assert_eq!(progress.remaining_to_next, Some(50));
    }

    #[test]
    fn test_progress_at_top() {
        let progress = ProgressionEngine::default().progress(75_000).unwrap();
        assert_eq!(progress.level, 100);
        assert_eq!(progress.tier, Tier::Diamond);
        assert_eq!(progress.next_required, None);
        assert_eq!(progress.remaining_to_next, None);
    }

    #[test]
    fn test_progress_past_top_with_extension() {
        let curve = ProgressionCurve::new(CurveConfig {
            extension: ExtensionPolicy::Linear { per_level: 1_000 },
            ..CurveConfig::default()
        })
        .unwrap();
        let engine = ProgressionEngine::new(curve, TierBands::default());
        let progress = engine.progress(51_500).unwrap();
        assert_eq!(progress.level, 101);
        assert_eq!(progress.tier, Tier::Diamond);
        assert_eq!(progress.next_required, Some(52_000));
        assert_eq!(progress.remaining_to_next, Some(500));
    }
}
