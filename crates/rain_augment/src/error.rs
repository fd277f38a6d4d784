//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid or out-of-bounds ranges, rejected batch parameters, sampling before
//! configuration, inconsistent parameter sets, and drops larger than the target
//! image.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid range for '{name}': expected finite lo <= hi, got ({lo}, {hi})")]
    InvalidRange { name: String, lo: f64, hi: f64 },

    #[error("'{name}' out of bounds: expected inside ({min}, {max}), got ({lo}, {hi})")]
    OutOfBounds {
        name: String,
        lo: f64,
        hi: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid batch parameters: {0}")]
    InvalidBatch(String),

    #[error("samplers are not configured; call make_samplers first")]
    NotConfigured,

    #[error("inconsistent parameters: {0}")]
    Inconsistent(String),

    #[error("drop of {drop_width}x{drop_height} px does not fit an image of {image_width}x{image_height} px")]
    DropExceedsImage {
        drop_width: u32,
        drop_height: u32,
        image_width: u32,
        image_height: u32,
    },
}
