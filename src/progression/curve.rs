//! Level requirement curve
//!
//! A sparse table of anchor levels with exact wager amounts. Levels between
//! anchors are linearly interpolated, except the short stretch right after
//! the second anchor, which climbs by a fixed step per level.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EngineError};

/// A level with an exact, tabulated cumulative wager requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub level: u32,
    pub amount: u64,
}

impl Anchor {
    pub const fn new(level: u32, amount: u64) -> Self {
        Self { level, amount }
    }
}

/// Anchors used by the live game
pub const DEFAULT_ANCHORS: [Anchor; 9] = [
    Anchor::new(1, 0),
    Anchor::new(2, 50),
    Anchor::new(5, 150),
    Anchor::new(10, 400),
    Anchor::new(20, 1_200),
    Anchor::new(30, 3_000),
    Anchor::new(50, 8_000),
    Anchor::new(70, 20_000),
    Anchor::new(100, 50_000),
];

/// Per-level step between the second and third anchors
pub const DEFAULT_EARLY_STEP: u64 = 33;

/// Ordered anchor list. Starts at level 1 with amount 0, levels strictly
/// increase and amounts never decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Anchor>", into = "Vec<Anchor>")]
pub struct AnchorTable {
    anchors: Vec<Anchor>,
}

impl AnchorTable {
    pub fn new(anchors: Vec<Anchor>) -> Result<Self, ConfigError> {
        let first = anchors.first().ok_or(ConfigError::EmptyAnchors)?;
        if first.level != 1 || first.amount != 0 {
            return Err(ConfigError::BadFirstAnchor {
                level: first.level,
                amount: first.amount,
            });
        }

        for pair in anchors.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.level <= prev.level {
                return Err(ConfigError::UnsortedAnchors {
                    previous: prev.level,
                    level: next.level,
                });
            }
            if next.amount < prev.amount {
                return Err(ConfigError::DecreasingAnchors {
                    level: next.level,
                    amount: next.amount,
                    previous: prev.amount,
                });
            }
        }

        Ok(Self { anchors })
    }

    /// Highest anchor, which is the top of the tabulated curve
    pub fn top(&self) -> Anchor {
        // Never empty once constructed
        self.anchors[self.anchors.len() - 1]
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Exact amount if `level` is an anchor, otherwise the surrounding pair
    fn locate(&self, level: u32) -> Located {
        match self.anchors.binary_search_by_key(&level, |a| a.level) {
            Ok(idx) => Located::Exact(self.anchors[idx].amount),
            Err(idx) => {
                // idx >= 1 since level >= 1 and the first anchor is level 1
                let prev = idx - 1;
                match self.anchors.get(idx) {
                    Some(_) => Located::Between(prev, idx),
                    None => Located::Above,
                }
            }
        }
    }
}

impl Default for AnchorTable {
    fn default() -> Self {
        Self {
            anchors: DEFAULT_ANCHORS.to_vec(),
        }
    }
}

impl TryFrom<Vec<Anchor>> for AnchorTable {
    type Error = ConfigError;

    fn try_from(anchors: Vec<Anchor>) -> Result<Self, Self::Error> {
        Self::new(anchors)
    }
}

impl From<AnchorTable> for Vec<Anchor> {
    fn from(table: AnchorTable) -> Self {
        table.anchors
    }
}

enum Located {
    Exact(u64),
    Between(usize, usize),
    Above,
}

/// What happens for levels past the top anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExtensionPolicy {
    /// Levels above the top anchor are an invalid argument
    #[default]
    Reject,
    /// Each level past the top anchor costs a fixed amount more
    Linear { per_level: u64 },
}

/// Serialized form of a curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub anchors: AnchorTable,
    #[serde(default = "default_early_step")]
    pub early_step: Option<u64>,
    #[serde(default)]
    pub extension: ExtensionPolicy,
}

fn default_early_step() -> Option<u64> {
    Some(DEFAULT_EARLY_STEP)
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            anchors: AnchorTable::default(),
            early_step: default_early_step(),
            extension: ExtensionPolicy::Reject,
        }
    }
}

/// Validated level requirement curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CurveConfig", into = "CurveConfig")]
pub struct ProgressionCurve {
    config: CurveConfig,
}

impl ProgressionCurve {
    pub fn new(config: CurveConfig) -> Result<Self, ConfigError> {
        if let ExtensionPolicy::Linear { per_level: 0 } = config.extension {
            return Err(ConfigError::ZeroExtensionStep);
        }

        let anchors = config.anchors.anchors();
        if let (Some(step), Some(low), Some(high)) =
            (config.early_step, anchors.get(1), anchors.get(2))
        {
            let last_stepped = u64::from(high.level - low.level - 1);
            let reached = step
                .checked_mul(last_stepped)
                .and_then(|v| v.checked_add(low.amount));
            if reached.map_or(true, |amount| amount > high.amount) {
                return Err(ConfigError::EarlyStepOvershoot {
                    step,
                    level: high.level,
                });
            }
        }

        let curve = Self { config };
        curve.check_monotonic()?;
        Ok(curve)
    }

    /// Both segment formulas are non-decreasing in level, so checking the
    /// first and last interior level of each segment covers the whole curve.
    fn check_monotonic(&self) -> Result<(), ConfigError> {
        for pair in self.anchors().windows(2) {
            let (low, high) = (pair[0], pair[1]);
            if high.level - low.level < 2 {
                continue;
            }
            let first = low.level + 1;
            if self.tabulated(first) < low.amount {
                return Err(ConfigError::NonMonotonic { level: first });
            }
            if self.tabulated(high.level) < self.tabulated(high.level - 1) {
                return Err(ConfigError::NonMonotonic { level: high.level });
            }
        }
        Ok(())
    }

    /// Highest tabulated level
    pub fn top_level(&self) -> u32 {
        self.config.anchors.top().level
    }

    pub fn extension(&self) -> ExtensionPolicy {
        self.config.extension
    }

    pub fn anchors(&self) -> &[Anchor] {
        self.config.anchors.anchors()
    }

    /// Cumulative wager needed to reach `level`
    pub fn required_wager(&self, level: u32) -> Result<u64, EngineError> {
        if level == 0 {
            return Err(EngineError::LevelZero);
        }

        let top = self.config.anchors.top();
        if level <= top.level {
            return Ok(self.tabulated(level));
        }

        match self.config.extension {
            ExtensionPolicy::Reject => Err(EngineError::LevelAboveCap {
                level,
                max: top.level,
            }),
            ExtensionPolicy::Linear { per_level } => {
                let extra = u64::from(level - top.level).saturating_mul(per_level);
                Ok(top.amount.saturating_add(extra))
            }
        }
    }

    /// Amount needed since the previous level. Level 1 returns its own requirement.
    pub fn incremental_cost(&self, level: u32) -> Result<u64, EngineError> {
        let required = self.required_wager(level)?;
        if level == 1 {
            return Ok(required);
        }
        let previous = self.required_wager(level - 1)?;
        Ok(required - previous)
    }

    /// Highest level whose requirement is covered by `total`
    pub fn level_for_wager(&self, total: u64) -> u32 {
        let top = self.config.anchors.top();
        if total >= top.amount {
            return match self.config.extension {
                ExtensionPolicy::Reject => top.level,
                ExtensionPolicy::Linear { per_level } => {
                    let extra = (total - top.amount) / per_level.max(1);
                    top.level.saturating_add(u32::try_from(extra).unwrap_or(u32::MAX))
                }
            };
        }

        // Requirement at `lo` is always covered, at `hi` never
        let (mut lo, mut hi) = (1, top.level);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.tabulated(mid) <= total {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Requirement for a level in `1..=top_level`
    fn tabulated(&self, level: u32) -> u64 {
        let anchors = self.config.anchors.anchors();
        match self.config.anchors.locate(level) {
            Located::Exact(amount) => amount,
            Located::Between(prev, next) => {
                let (low, high) = (anchors[prev], anchors[next]);
                match self.config.early_step {
                    Some(step) if prev == 1 => low.amount + u64::from(level - low.level) * step,
                    _ => interpolate(low, high, level),
                }
            }
            // Only reachable above the top anchor, which callers handle
            Located::Above => self.config.anchors.top().amount,
        }
    }
}

impl Default for ProgressionCurve {
    fn default() -> Self {
        Self {
            config: CurveConfig::default(),
        }
    }
}

impl TryFrom<CurveConfig> for ProgressionCurve {
    type Error = ConfigError;

    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<ProgressionCurve> for CurveConfig {
    fn from(curve: ProgressionCurve) -> Self {
        curve.config
    }
}

/// Linear interpolation between two anchors, truncated to a whole unit
fn interpolate(low: Anchor, high: Anchor, level: u32) -> u64 {
    let span = u128::from(high.amount - low.amount);
    let position = u128::from(level - low.level);
    let width = u128::from(high.level - low.level);
    let offset = span * position / width;
    low.amount + offset as u64
}
