#![forbid(unsafe_code)]
//! rain_augment: Randomized rain-streak parameters for image augmentation.
//!
//! Modules:
//! - range: normalize user ranges into bounded `(lo, hi)` pairs
//! - sampling: continuous uniform samplers bound to a device and precision
//! - batch: batch-shape validation shared by generators
//! - generator: the configure-then-sample contract for parameter generators
//! - rain: rain configuration, generator, and ragged per-image output
//!
//! Rendering the streaks is left to the caller.
pub mod batch;
pub mod error;
pub mod generator;
pub mod rain;
pub mod range;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use rain_augment::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::generator::ParamGenerator;
    pub use crate::rain::{
        DropRange, RainConfig, RainGenerator, RainImageParams, RainParams, RainSamplers,
    };
    pub use crate::range::{range_bound, RangeFactor};
    pub use crate::sampling::{Device, Precision, UniformSampler};
}
