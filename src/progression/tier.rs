//! Cosmetic tiers
//!
//! A tier is a rank band over levels. Bands are stored as the first level of
//! each tier, so the table can never overlap or leave a gap once validated.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EngineError};

/// Rank band derived from a player's level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    None,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Tier {
    /// All tiers, lowest first
    pub const ALL: [Tier; 6] = [
        Tier::None,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Diamond,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::None => "None",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
        }
    }

    /// Label shown to players in the Portuguese storefront
    pub fn local_name(&self) -> &'static str {
        match self {
            Tier::None => "Sem rank",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Prata",
            Tier::Gold => "Ouro",
            Tier::Platinum => "Platina",
            Tier::Diamond => "Diamante",
        }
    }

    /// Daily cashback rate on net losses, in percent
    pub fn cashback_percent(&self) -> f64 {
        match self {
            Tier::None => 0.0,
            Tier::Bronze => 1.5,
            Tier::Silver => 3.0,
            Tier::Gold => 6.0,
            Tier::Platinum => 12.0,
            Tier::Diamond => 24.0,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// First level of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    pub tier: Tier,
    pub min_level: u32,
}

/// Validated, ordered list of tier bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TierBand>", into = "Vec<TierBand>")]
pub struct TierBands {
    bands: Vec<TierBand>,
}

impl TierBands {
    pub fn new(bands: Vec<TierBand>) -> Result<Self, ConfigError> {
        let first = bands
            .first()
            .ok_or_else(|| ConfigError::TierBands("no bands defined".into()))?;
        if first.min_level != 1 {
            return Err(ConfigError::TierBands(format!(
                "first band ({}) must start at level 1, starts at {}",
                first.tier, first.min_level
            )));
        }

        for pair in bands.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.min_level <= prev.min_level {
                return Err(ConfigError::TierBands(format!(
                    "{} starts at level {} which does not follow {} at level {}",
                    next.tier, next.min_level, prev.tier, prev.min_level
                )));
            }
            if next.tier <= prev.tier {
                return Err(ConfigError::TierBands(format!(
                    "{} is listed after {}",
                    next.tier, prev.tier
                )));
            }
        }

        Ok(Self { bands })
    }

    /// Tier for a level. Levels past the last band's start stay in that band.
    pub fn tier_for(&self, level: u32) -> Result<Tier, EngineError> {
        if level == 0 {
            return Err(EngineError::LevelZero);
        }
        let idx = self.bands.partition_point(|b| b.min_level <= level);
        // idx >= 1 because the first band starts at level 1
        Ok(self.bands[idx - 1].tier)
    }

    /// Level range covered by each band. The last band ends at `top_level`.
    pub fn ranges(&self, top_level: u32) -> Vec<(Tier, u32, u32)> {
        self.bands
            .iter()
            .enumerate()
            .map(|(i, band)| {
                let last = self
                    .bands
                    .get(i + 1)
                    .map(|next| next.min_level - 1)
                    .unwrap_or(top_level.max(band.min_level));
                (band.tier, band.min_level, last)
            })
            .collect()
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }
}

impl Default for TierBands {
    fn default() -> Self {
        Self {
            bands: vec![
                TierBand { tier: Tier::None, min_level: 1 },
                TierBand { tier: Tier::Bronze, min_level: 2 },
                TierBand { tier: Tier::Silver, min_level: 25 },
                TierBand { tier: Tier::Gold, min_level: 50 },
                TierBand { tier: Tier::Platinum, min_level: 75 },
                TierBand { tier: Tier::Diamond, min_level: 100 },
            ],
        }
    }
}

impl TryFrom<Vec<TierBand>> for TierBands {
    type Error = ConfigError;

    fn try_from(bands: Vec<TierBand>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<TierBands> for Vec<TierBand> {
    fn from(bands: TierBands) -> Self {
        bands.bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier_boundaries() {
        let bands = TierBands::default();
        assert_eq!(bands.tier_for(1), Ok(Tier::None));
        assert_eq!(bands.tier_for(2), Ok(Tier::Bronze));
        assert_eq!(bands.tier_for(24), Ok(Tier::Bronze));
        assert_eq!(bands.tier_for(25), Ok(Tier::Silver));
        assert_eq!(bands.tier_for(49), Ok(Tier::Silver));
        assert_eq!(bands.tier_for(50), Ok(Tier::Gold));
        assert_eq!(bands.tier_for(74), Ok(Tier::Gold));
        assert_eq!(bands.tier_for(75), Ok(Tier::Platinum));
        assert_eq!(bands.tier_for(99), Ok(Tier::Platinum));
        assert_eq!(bands.tier_for(100), Ok(Tier::Diamond));
    }

    #[test]
    fn test_level_zero_rejected() {
        assert_eq!(TierBands::default().tier_for(0), Err(EngineError::LevelZero));
    }

    #[test]
    fn test_tiers_never_decrease() {
        let bands = TierBands::default();
        let mut prev = Tier::None;
        for level in 1..=100 {
            let tier = bands.tier_for(level).unwrap();
            assert!(tier >= prev, "tier dropped at level {}", level);
            prev = tier;
        }
    }

    #[test]
    fn test_ranges_cover_every_level() {
        let ranges = TierBands::default().ranges(100);
        assert_eq!(ranges[0], (Tier::None, 1, 1));
        assert_eq!(ranges[1], (Tier::Bronze, 2, 24));
        assert_eq!(ranges[5], (Tier::Diamond, 100, 100));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].2 + 1, pair[1].1);
        }
    }

    #[test]
    fn test_invalid_bands_rejected() {
        let not_from_one = vec![TierBand { tier: Tier::None, min_level: 2 }];
        assert!(TierBands::new(not_from_one).is_err());

        let overlapping = vec![
            TierBand { tier: Tier::None, min_level: 1 },
            TierBand { tier: Tier::Bronze, min_level: 10 },
            TierBand { tier: Tier::Silver, min_level: 10 },
        ];
        assert!(TierBands::new(overlapping).is_err());

        let out_of_order = vec![
            TierBand { tier: Tier::None, min_level: 1 },
            TierBand { tier: Tier::Gold, min_level: 10 },
            TierBand { tier: Tier::Silver, min_level: 20 },
        ];
        assert!(TierBands::new(out_of_order).is_err());

        assert!(TierBands::new(Vec::new()).is_err());
    }

    #[test]
    fn test_tier_metadata() {
        assert_eq!(Tier::Silver.local_name(), "Prata");
        assert_eq!(Tier::Diamond.cashback_percent(), 24.0);
        assert_eq!(Tier::None.cashback_percent(), 0.0);
        assert_eq!(Tier::Gold.to_string(), "Gold");
    }
}
