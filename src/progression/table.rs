//! Level table rows and tier summaries
//!
//! Plain data for report renderers. Formatting is left to the caller.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use super::engine::ProgressionEngine;
use super::tier::Tier;

/// One row of the level table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRow {
    pub level: u32,
    pub tier: Tier,
    pub required: u64,
    /// Amount needed since the previous level
    pub delta: u64,
}

/// Opening and closing amounts for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier: Tier,
    pub first_level: u32,
    pub last_level: u32,
    pub opening_amount: u64,
    pub closing_amount: u64,
}

impl ProgressionEngine {
    /// Rows for every level in `levels`
    pub fn level_rows(&self, levels: RangeInclusive<u32>) -> Result<Vec<LevelRow>, EngineError> {
        levels
            .map(|level| {
                Ok(LevelRow {
                    level,
                    tier: self.tier_for(level)?,
                    required: self.required_wager(level)?,
                    delta: self.incremental_cost(level)?,
                })
            })
            .collect()
    }

    /// One summary per tier band, over the tabulated part of the curve
    pub fn tier_summaries(&self) -> Result<Vec<TierSummary>, EngineError> {
        let top = self.curve.top_level();
        self.tiers
            .ranges(top)
            .into_iter()
            .filter(|&(_, first, _)| first <= top)
            .map(|(tier, first_level, last_level)| {
                let last_level = last_level.min(top);
                Ok(TierSummary {
                    tier,
                    first_level,
                    last_level,
                    opening_amount: self.required_wager(first_level)?,
                    closing_amount: self.required_wager(last_level)?,
                })
            })
            .collect()
    }
}

/// Plain-text table: one line per level, then the tier summary
pub fn format_table(rows: &[LevelRow], summaries: &[TierSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>5}  {:<9} {:>12} {:>10}\n", "Level", "Tier", "Required", "Delta"));
    for row in rows {
        out.push_str(&format!(
            "{:>5}  {:<9} {:>12} {:>10}\n",
            row.level,
            row.tier.name(),
            row.required,
            row.delta
        ));
    }

    out.push('\n');
    out.push_str(&format!("{:<9} {:>9} {:>12} {:>12}\n", "Tier", "Levels", "Opening", "Closing"));
    for summary in summaries {
        let levels = if summary.first_level == summary.last_level {
            summary.first_level.to_string()
        } else {
            format!("{}-{}", summary.first_level, summary.last_level)
        };
        out.push_str(&format!(
            "{:<9} {:>9} {:>12} {:>12}\n",
            summary.tier.name(),
            levels,
            summary.opening_amount,
            summary.closing_amount
        ));
    }
    out
}
