//! Continuous uniform sampler over a half-open interval.
use rand::RngCore;

use crate::error::{Error, Result};
use crate::sampling::{next_down, rand01, rand01_f64, Precision};

/// Draws reals uniformly from `[low, high)`.
///
/// A degenerate interval (`low == high`) always yields `low`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSampler {
    low: f64,
    high: f64,
    precision: Precision,
}

impl UniformSampler {
    /// Create a sampler over `[low, high)` drawing at the given precision.
    pub fn new(low: f64, high: f64, precision: Precision) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(Error::InvalidRange {
                name: "uniform".into(),
                lo: low,
                hi: high,
            });
        }
        Ok(Self {
            low,
            high,
            precision,
        })
    }

    /// Lower bound (inclusive).
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound (exclusive unless degenerate).
    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Draw a single value.
    pub fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        if self.high <= self.low {
            return self.low;
        }
        let v = match self.precision {
            // Narrowed bounds may round outside `[low, high)` above 2^24.
            Precision::F32 => self.sample_f32(rng) as f64,
            Precision::F64 => self.sample_wide(rng),
        };
        v.clamp(self.low, self.high.next_down())
    }

    /// Draw a single value narrowed to `f32`, kept strictly below `high`.
    pub fn sample_f32(&self, rng: &mut dyn RngCore) -> f32 {
        let low = self.low as f32;
        let high = self.high as f32;
        if high <= low {
            return low;
        }
        // Keep strictly inside the upper edge after narrowing.
        let max = next_down(high);
        match self.precision {
            Precision::F32 => (low + rand01(rng) * (high - low)).clamp(low, max),
            Precision::F64 => (self.sample_wide(rng) as f32).clamp(low, max),
        }
    }

    fn sample_wide(&self, rng: &mut dyn RngCore) -> f64 {
        self.low + rand01_f64(rng) * (self.high - self.low)
    }
}
