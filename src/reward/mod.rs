//! Reward draws
//!
//! Prize pools, samples, the draw itself, and batch simulation.

pub mod pool;
pub mod sample;
pub mod draw;
pub mod simulate;

pub use pool::{PrizeEntry, PrizePool, MAX_TOTAL_WEIGHT};
pub use sample::{RngSampler, Sample, SampleSource, ScriptedSamples, SAMPLE_CEILING};
pub use draw::{draw, effective_probability, try_draw, DrawMode, Multiplier, RollOutcome};
pub use simulate::{simulate, SimulationSummary};
