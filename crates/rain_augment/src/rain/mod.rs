//! Rain-streak augmentation parameters: configuration, generator, and output.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod generator;
pub mod params;

pub use generator::{RainGenerator, RainSamplers};
pub use params::{RainImageParams, RainParams};

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropRange {
    pub min: u32,
    pub max: u32,
}

impl DropRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range.
    pub fn center(&self) -> f64 {
        self.min as f64 / 2.0 + self.max as f64 / 2.0
    }

    /// Bounds the normalized range must stay inside: `(min, max + 1)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.min as f64, self.max as f64 + 1.0)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl From<(u32, u32)> for DropRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for DropRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}

/// User-facing ranges for the rain generator.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RainConfig {
    /// Number of drops drawn per image.
    pub number_of_drops: DropRange,
    /// Streak height in pixels.
    pub drop_height: DropRange,
    /// Streak width in pixels.
    pub drop_width: DropRange,
}

impl RainConfig {
    /// Creates a new [`RainConfig`] from three inclusive ranges.
    pub fn new(
        number_of_drops: impl Into<DropRange>,
        drop_height: impl Into<DropRange>,
        drop_width: impl Into<DropRange>,
    ) -> Self {
        Self {
            number_of_drops: number_of_drops.into(),
            drop_height: drop_height.into(),
            drop_width: drop_width.into(),
        }
    }

    /// Sets the drop count range.
    pub fn with_number_of_drops(mut self, range: impl Into<DropRange>) -> Self {
        self.number_of_drops = range.into();
        self
    }

    /// Sets the drop height range.
    pub fn with_drop_height(mut self, range: impl Into<DropRange>) -> Self {
        self.drop_height = range.into();
        self
    }

    /// Sets the drop width range.
    pub fn with_drop_width(mut self, range: impl Into<DropRange>) -> Self {
        self.drop_width = range.into();
        self
    }

    /// Named ranges in configuration order.
    pub fn ranges(&self) -> [(&'static str, DropRange); 3] {
        [
            ("number_of_drops", self.number_of_drops),
            ("drop_height", self.drop_height),
            ("drop_width", self.drop_width),
        ]
    }

    /// Validates the configuration, returning an error if any range is inverted.
    pub fn validate(&self) -> Result<()> {
        for (name, range) in self.ranges() {
            if range.min > range.max {
                return Err(Error::InvalidRange {
                    name: name.into(),
                    lo: range.min as f64,
                    hi: range.max as f64,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for RainConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "number_of_drops={}, drop_height={}, drop_width={}",
            self.number_of_drops, self.drop_height, self.drop_width
        )
    }
}
