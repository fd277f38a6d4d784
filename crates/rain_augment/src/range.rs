//! Range normalization for sampler configuration.
//!
//! [`range_bound`] turns a user-supplied factor into a validated `(lo, hi)` pair
//! that stays inside absolute bounds. A factor is either an explicit pair or a
//! scalar spread symmetrically around a center.
use crate::error::{Error, Result};

/// User-supplied range factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeFactor {
    /// Symmetric spread around a center: `(center - s, center + s)`.
    Scalar(f64),
    /// Explicit `(lo, hi)` pair.
    Pair(f64, f64),
}

impl From<f64> for RangeFactor {
    fn from(value: f64) -> Self {
        RangeFactor::Scalar(value)
    }
}

impl From<(f64, f64)> for RangeFactor {
    fn from((lo, hi): (f64, f64)) -> Self {
        RangeFactor::Pair(lo, hi)
    }
}

impl From<(u32, u32)> for RangeFactor {
    fn from((lo, hi): (u32, u32)) -> Self {
        RangeFactor::Pair(lo as f64, hi as f64)
    }
}

/// Normalizes `factor` into a `(lo, hi)` pair inside `bounds`.
///
/// Scalars must be non-negative and are clamped to `bounds` after expansion.
/// Pairs are taken as given and must already lie inside `bounds`.
pub fn range_bound(
    factor: impl Into<RangeFactor>,
    name: &str,
    center: f64,
    bounds: (f64, f64),
) -> Result<(f64, f64)> {
    let (lo, hi) = match factor.into() {
        RangeFactor::Scalar(s) => {
            if !s.is_finite() || s < 0.0 {
                return Err(Error::InvalidRange {
                    name: name.to_owned(),
                    lo: center - s,
                    hi: center + s,
                });
            }
            (
                (center - s).clamp(bounds.0, bounds.1),
                (center + s).clamp(bounds.0, bounds.1),
            )
        }
        RangeFactor::Pair(lo, hi) => (lo, hi),
    };

    check_range(name, lo, hi, bounds)?;
    Ok((lo, hi))
}

fn check_range(name: &str, lo: f64, hi: f64, bounds: (f64, f64)) -> Result<()> {
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(Error::InvalidRange {
            name: name.to_owned(),
            lo,
            hi,
        });
    }
    if lo < bounds.0 || hi > bounds.1 {
        return Err(Error::OutOfBounds {
            name: name.to_owned(),
            lo,
            hi,
            min: bounds.0,
            max: bounds.1,
        });
    }
    Ok(())
}
