//! Built-in prize pools
//!
//! One pool per game variant. Entries are (label, base value, weight).

use std::collections::BTreeMap;

use crate::reward::PrizePool;

const PREMIO_PIX: &[(&str, f64, f64)] = &[
    ("R$ 0,25", 0.25, 20.0),
    ("R$ 0,50", 0.50, 15.0),
    ("R$ 1,00", 1.00, 12.0),
    ("R$ 2,00", 2.00, 10.0),
    ("R$ 5,00", 5.00, 8.0),
    ("R$ 10,00", 10.00, 5.0),
    ("R$ 25,00", 25.00, 3.0),
    ("R$ 50,00", 50.00, 2.0),
    ("R$ 100,00", 100.00, 1.0),
    ("R$ 500,00", 500.00, 0.5),
    ("R$ 1.000,00", 1_000.00, 0.3),
    ("R$ 5.000,00", 5_000.00, 0.1),
    ("R$ 10.000,00", 10_000.00, 0.05),
    ("R$ 25.000,00", 25_000.00, 0.03),
    ("R$ 50.000,00", 50_000.00, 0.01),
    ("R$ 100.000,00", 100_000.00, 0.005),
];

const PREMIO_ME_MIMEI: &[(&str, f64, f64)] = &[
    ("R$ 0,50", 0.50, 18.0),
    ("R$ 1,00", 1.00, 15.0),
    ("R$ 2,00", 2.00, 12.0),
    ("R$ 5,00", 5.00, 10.0),
    ("R$ 10,00", 10.00, 8.0),
    ("R$ 20,00", 20.00, 6.0),
    ("R$ 50,00", 50.00, 4.0),
    ("R$ 100,00", 100.00, 2.5),
    ("R$ 250,00", 250.00, 1.5),
    ("R$ 500,00", 500.00, 0.8),
    ("R$ 1.000,00", 1_000.00, 0.4),
    ("R$ 5.000,00", 5_000.00, 0.2),
    ("R$ 10.000,00", 10_000.00, 0.08),
    ("R$ 25.000,00", 25_000.00, 0.04),
    ("R$ 50.000,00", 50_000.00, 0.02),
    ("R$ 100.000,00", 100_000.00, 0.008),
];

const PREMIO_ELETRONICOS: &[(&str, f64, f64)] = &[
    ("R$ 1,00", 1.00, 20.0),
    ("R$ 2,00", 2.00, 16.0),
    ("R$ 5,00", 5.00, 13.0),
    ("R$ 10,00", 10.00, 10.0),
    ("R$ 25,00", 25.00, 8.0),
    ("R$ 50,00", 50.00, 5.0),
    ("R$ 100,00", 100.00, 3.0),
    ("R$ 250,00", 250.00, 2.0),
    ("R$ 500,00", 500.00, 1.0),
    ("R$ 1.000,00", 1_000.00, 0.5),
    ("R$ 2.500,00", 2_500.00, 0.3),
    ("R$ 5.000,00", 5_000.00, 0.15),
    ("R$ 10.000,00", 10_000.00, 0.06),
    ("R$ 25.000,00", 25_000.00, 0.03),
    ("R$ 50.000,00", 50_000.00, 0.015),
    ("R$ 100.000,00", 100_000.00, 0.006),
];

/// Default pools keyed by game variant
pub fn default_pools() -> BTreeMap<String, PrizePool> {
    [
        ("premio-pix", PREMIO_PIX),
        ("premio-me-mimei", PREMIO_ME_MIMEI),
        ("premio-eletronicos", PREMIO_ELETRONICOS),
    ]
    .into_iter()
    .map(|(name, table)| (name.to_string(), PrizePool::from_table(table)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pools_pass_validation() {
        for (name, pool) in default_pools() {
            let checked = PrizePool::new(pool.entries().to_vec());
            assert!(checked.is_ok(), "pool {} failed validation: {:?}", name, checked.err());
            assert!(pool.total_weight() < 100.0, "pool {} guarantees a win", name);
        }
    }

    #[test]
    fn test_default_pool_totals() {
        let pools = default_pools();
        assert_eq!(pools.len(), 3);
        let pix = &pools["premio-pix"];
        assert_eq!(pix.entries().len(), 16);
        assert!((pix.total_weight() - 76.995).abs() < 1e-9);
    }
}
