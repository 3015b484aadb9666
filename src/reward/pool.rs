//! Prize pools
//!
//! Weights are percentage points. Whatever the weights leave below 100 is
//! the chance of winning nothing.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Ceiling for the sum of a pool's weights
pub const MAX_TOTAL_WEIGHT: f64 = 100.0;

/// Float slack allowed when summing weights
const WEIGHT_EPSILON: f64 = 1e-9;

/// A single prize a draw can pay out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeEntry {
    pub label: String,
    pub base_value: f64,
    pub weight: f64,
}

impl PrizeEntry {
    pub fn new(label: impl Into<String>, base_value: f64, weight: f64) -> Self {
        Self {
            label: label.into(),
            base_value,
            weight,
        }
    }
}

/// Ordered, validated prize entries. Declaration order drives selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PrizeEntry>", into = "Vec<PrizeEntry>")]
pub struct PrizePool {
    entries: Vec<PrizeEntry>,
    total_weight: f64,
}

impl PrizePool {
    pub fn new(entries: Vec<PrizeEntry>) -> Result<Self, EngineError> {
        let mut total_weight = 0.0;
        for entry in &entries {
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(EngineError::InvalidWeight {
                    label: entry.label.clone(),
                    weight: entry.weight,
                });
            }
            if !entry.base_value.is_finite() || entry.base_value < 0.0 {
                return Err(EngineError::InvalidBaseValue {
                    label: entry.label.clone(),
                    value: entry.base_value,
                });
            }
            total_weight += entry.weight;
        }

        if total_weight > MAX_TOTAL_WEIGHT + WEIGHT_EPSILON {
            return Err(EngineError::WeightSumExceeded(total_weight));
        }

        Ok(Self {
            entries,
            total_weight: total_weight.min(MAX_TOTAL_WEIGHT),
        })
    }

    /// Built-in tables only. `data::pools` tests run these through `new`.
    pub(crate) fn from_table(table: &[(&str, f64, f64)]) -> Self {
        let entries: Vec<PrizeEntry> = table
            .iter()
            .map(|&(label, base_value, weight)| PrizeEntry::new(label, base_value, weight))
            .collect();
        let total_weight = entries.iter().map(|e| e.weight).sum::<f64>().min(MAX_TOTAL_WEIGHT);
        Self {
            entries,
            total_weight,
        }
    }

    pub fn entries(&self) -> &[PrizeEntry] {
        &self.entries
    }

    /// Sum of all weights, in `[0, 100]`
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose cumulative weight boundary lies above `point`
    pub fn select(&self, point: f64) -> Option<&PrizeEntry> {
        let mut cumulative = 0.0;
        self.entries.iter().find(|entry| {
            cumulative += entry.weight;
            point < cumulative
        })
    }
}

impl TryFrom<Vec<PrizeEntry>> for PrizePool {
    type Error = EngineError;

    fn try_from(entries: Vec<PrizeEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<PrizePool> for Vec<PrizeEntry> {
    fn from(pool: PrizePool) -> Self {
        pool.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_prizes() -> PrizePool {
        PrizePool::new(vec![PrizeEntry::new("A", 5.0, 30.0), PrizeEntry::new("B", 8.0, 20.0)])
            .unwrap()
    }

    #[test]
    fn test_total_weight() {
        assert_eq!(two_prizes().total_weight(), 50.0);
        assert_eq!(PrizePool::new(Vec::new()).unwrap().total_weight(), 0.0);
    }

    #[test]
    fn test_select_walks_declared_order() {
        let pool = two_prizes();
        assert_eq!(pool.select(0.0).unwrap().label, "A");
        assert_eq!(pool.select(29.99).unwrap().label, "A");
        assert_eq!(pool.select(30.0).unwrap().label, "B");
        assert_eq!(pool.select(49.99).unwrap().label, "B");
        assert!(pool.select(50.0).is_none());
    }

    #[test]
    fn test_zero_weight_entry_never_selected() {
        let pool = PrizePool::new(vec![
            PrizeEntry::new("never", 100.0, 0.0),
            PrizeEntry::new("sometimes", 1.0, 10.0),
        ])
        .unwrap();
        assert_eq!(pool.select(0.0).unwrap().label, "sometimes");
    }

    #[test]
    fn test_sum_above_hundred_rejected() {
        let result = PrizePool::new(vec![
            PrizeEntry::new("A", 1.0, 60.0),
            PrizeEntry::new("B", 1.0, 40.5),
        ]);
        assert!(matches!(result, Err(EngineError::WeightSumExceeded(_))));
    }

    #[test]
    fn test_exactly_hundred_accepted() {
        let pool = PrizePool::new(vec![
            PrizeEntry::new("A", 1.0, 60.0),
            PrizeEntry::new("B", 1.0, 40.0),
        ])
        .unwrap();
        assert_eq!(pool.total_weight(), 100.0);
    }

    #[test]
    fn test_invalid_entries_rejected() {
        assert!(matches!(
            PrizePool::new(vec![PrizeEntry::new("neg", 1.0, -1.0)]),
            Err(EngineError::InvalidWeight { .. })
        ));
        assert!(matches!(
            PrizePool::new(vec![PrizeEntry::new("nan", 1.0, f64::NAN)]),
            Err(EngineError::InvalidWeight { .. })
        ));
        assert!(matches!(
            PrizePool::new(vec![PrizeEntry::new("debt", -5.0, 10.0)]),
            Err(EngineError::InvalidBaseValue { .. })
        ));
    }
}
