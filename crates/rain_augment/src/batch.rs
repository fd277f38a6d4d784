//! Batch-shape helpers shared by parameter generators.
use crate::error::{Error, Result};

/// Extract the batch size (first dimension) from `batch_shape`.
pub fn batch_size(batch_shape: &[usize]) -> Result<usize> {
    batch_shape
        .first()
        .copied()
        .ok_or_else(|| Error::InvalidBatch("batch_shape must not be empty".into()))
}

/// Validate the batch size / same-on-batch combination.
///
/// Every non-negative batch size is accepted in both modes. An empty batch in
/// same-on-batch mode has nothing to broadcast and produces empty outputs.
pub fn check_batch_params(batch_size: usize, same_on_batch: bool) -> Result<()> {
    if batch_size > isize::MAX as usize {
        return Err(Error::InvalidBatch(format!(
            "batch_size {batch_size} exceeds the addressable range (same_on_batch={same_on_batch})"
        )));
    }
    Ok(())
}
