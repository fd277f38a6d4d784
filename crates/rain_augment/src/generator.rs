//! Two-phase contract for randomized parameter generators.
//!
//! A generator is first bound to a numeric target with
//! [`ParamGenerator::make_samplers`], then asked for per-batch parameters with
//! [`ParamGenerator::generate`] as many times as needed. Reconfiguring replaces
//! the samplers installed by the previous call.
use rand::RngCore;

use crate::error::Result;
use crate::sampling::{Device, Precision};

/// Trait for randomized parameter generators.
pub trait ParamGenerator: Send + Sync {
    /// Parameters produced per batch.
    type Params;

    /// Build the samplers for the given device and precision.
    fn make_samplers(&mut self, device: Device, precision: Precision) -> Result<()>;

    /// Whether [`ParamGenerator::make_samplers`] has succeeded at least once.
    fn is_configured(&self) -> bool;

    /// Draw parameters for a batch. The first entry of `batch_shape` is the batch size.
    fn generate(
        &self,
        batch_shape: &[usize],
        same_on_batch: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Self::Params>;
}
