//! Random samples for draws
//!
//! A draw never generates randomness itself. Callers hand it a `Sample`,
//! usually taken from a `SampleSource`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Exclusive upper bound of a sample
pub const SAMPLE_CEILING: f64 = 100.0;

/// A value in `[0, 100)`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Sample(f64);

impl Sample {
    pub const ZERO: Sample = Sample(0.0);

    pub fn new(value: f64) -> Result<Self, EngineError> {
        if value.is_finite() && (0.0..SAMPLE_CEILING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::SampleOutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Sample {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sample> for f64 {
    fn from(sample: Sample) -> Self {
        sample.0
    }
}

/// Anything that can hand out samples, one per draw
pub trait SampleSource {
    fn next_sample(&mut self) -> Sample;
}

/// Uniform samples from a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> SampleSource for RngSampler<R> {
    fn next_sample(&mut self) -> Sample {
        Sample(self.rng.gen_range(0.0..SAMPLE_CEILING))
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
/// An empty script always yields zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSamples {
    samples: Vec<Sample>,
    cursor: usize,
}

impl ScriptedSamples {
    pub fn new(values: &[f64]) -> Result<Self, EngineError> {
        let samples = values
            .iter()
            .map(|&v| Sample::new(v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { samples, cursor: 0 })
    }
}

impl SampleSource for ScriptedSamples {
    fn next_sample(&mut self) -> Sample {
        if self.samples.is_empty() {
            return Sample::ZERO;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_bounds() {
        assert!(Sample::new(0.0).is_ok());
        assert!(Sample::new(99.999).is_ok());
        assert_eq!(Sample::new(100.0), Err(EngineError::SampleOutOfRange(100.0)));
        assert!(Sample::new(-0.1).is_err());
        assert!(Sample::new(f64::NAN).is_err());
        assert!(Sample::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rng_sampler_stays_in_range() {
        let mut sampler = RngSampler::new(StdRng::seed_from_u64(7));
        for _ in 0..10_000 {
            let value = sampler.next_sample().value();
            assert!((0.0..SAMPLE_CEILING).contains(&value));
        }
    }

    #[test]
    fn test_rng_sampler_is_reproducible() {
        let mut a = RngSampler::new(StdRng::seed_from_u64(42));
        let mut b = RngSampler::new(StdRng::seed_from_u64(42));
        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn test_scripted_samples_wrap() {
        let mut script = ScriptedSamples::new(&[10.0, 35.0]).unwrap();
        let values: Vec<f64> = (0..5).map(|_| script.next_sample().value()).collect();
        assert_eq!(values, vec![10.0, 35.0, 10.0, 35.0, 10.0]);
    }

    #[test]
    fn test_scripted_samples_validate() {
        assert!(ScriptedSamples::new(&[10.0, 100.0]).is_err());
        let mut empty = ScriptedSamples::default();
        assert_eq!(empty.next_sample(), Sample::ZERO);
    }
}
