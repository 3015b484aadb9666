//! Repeated draws for comparing the economics of the draw modes

use serde::{Deserialize, Serialize};

use super::draw::{draw, DrawMode, Multiplier};
use super::pool::PrizePool;
use super::sample::SampleSource;

/// Aggregate of a batch of draws
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub rounds: u64,
    pub wins: u64,
    pub total_paid: f64,
    pub win_rate: f64,
    /// Average paid per round, wins and losses included
    pub mean_payout: f64,
}

/// Run `rounds` draws, one sample each
pub fn simulate(
    pool: &PrizePool,
    multiplier: Multiplier,
    mode: DrawMode,
    rounds: u64,
    source: &mut impl SampleSource,
) -> SimulationSummary {
    let mut wins = 0;
    let mut total_paid = 0.0;

    for _ in 0..rounds {
        let outcome = draw(pool, multiplier, mode, source.next_sample());
        if outcome.won {
            wins += 1;
            total_paid += outcome.paid_value;
        }
    }

    if rounds == 0 {
        return SimulationSummary::default();
    }

    SimulationSummary {
        rounds,
        wins,
        total_paid,
        win_rate: wins as f64 / rounds as f64,
        mean_payout: total_paid / rounds as f64,
    }
}
