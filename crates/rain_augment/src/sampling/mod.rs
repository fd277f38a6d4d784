//! Continuous uniform sampling primitives.
//!
//! This module defines the numeric target ([`Device`], [`Precision`]) that samplers
//! are bound to, the [`UniformSampler`] used by parameter generators, and the
//! low-level helpers turning raw RNG output into unit-interval floats.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod uniform;

pub use uniform::UniformSampler;

/// Target device for sampled values.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Device {
    /// Host memory.
    #[default]
    Cpu,
}

/// Floating-point precision of the underlying uniform draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    /// 32 random bits per draw, computed in `f32`.
    #[default]
    F32,
    /// 53 random bits per draw, computed in `f64`.
    F64,
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Generate a random double in the range [0, 1) from the top 53 bits of a `u64`.
#[inline]
pub(crate) fn rand01_f64(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, useful for
/// ensuring bounds are strictly inside a half-open interval. Handles edge cases
/// safely including very small positive values and zero.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}

/// Draw `n` values from `sampler`.
///
/// With `same_on_batch` a single value is drawn and repeated `n` times.
/// Nothing is drawn when `n` is zero.
pub fn sample_batch(
    sampler: &UniformSampler,
    n: usize,
    same_on_batch: bool,
    rng: &mut dyn RngCore,
) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    if same_on_batch {
        let v = sampler.sample(rng);
        vec![v; n]
    } else {
        (0..n).map(|_| sampler.sample(rng)).collect()
    }
}
