//! Per-batch rain parameters and per-image views.
//!
//! [`RainParams`] holds one drop count, height, and width per image plus a ragged
//! list of anchor coordinates: image `i` owns exactly `drop_count[i]` points in
//! `[0, 1)²`. Coordinate blocks are reference-counted so a block drawn once can be
//! shared by every image of a batch.
use std::sync::Arc;

use glam::{DVec2, UVec2};
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Randomized rain parameters for a batch of images.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RainParams {
    /// Number of drops per image.
    pub drop_count: Vec<u32>,
    /// Streak height per image, in pixels.
    pub drop_height: Vec<u32>,
    /// Streak width per image, in pixels.
    pub drop_width: Vec<u32>,
    /// Normalized anchor coordinates per image; `coordinates[i].len() == drop_count[i]`.
    pub coordinates: Vec<Arc<[Vector2<f32>]>>,
}

impl RainParams {
    pub fn batch_size(&self) -> usize {
        self.drop_count.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drop_count.is_empty()
    }

    /// Sum of drops over the batch.
    pub fn total_drops(&self) -> u64 {
        self.drop_count.iter().map(|&n| n as u64).sum()
    }

    /// Returns the parameters of image `index`, if it exists.
    pub fn image(&self, index: usize) -> Option<RainImageParams<'_>> {
        Some(RainImageParams {
            drop_count: *self.drop_count.get(index)?,
            drop_height: *self.drop_height.get(index)?,
            drop_width: *self.drop_width.get(index)?,
            coordinates: self.coordinates.get(index)?,
        })
    }

    /// Iterates over per-image views in batch order.
    pub fn iter(&self) -> impl Iterator<Item = RainImageParams<'_>> + '_ {
        (0..self.batch_size()).filter_map(move |i| self.image(i))
    }

    /// True when every image references the same coordinate block.
    pub fn shares_coordinates(&self) -> bool {
        match self.coordinates.split_first() {
            Some((first, rest)) => rest.iter().all(|c| Arc::ptr_eq(first, c)),
            None => false,
        }
    }

    /// Checks that all per-image sequences have the batch length and that each
    /// coordinate block matches its drop count.
    pub fn validate(&self) -> Result<()> {
        let n = self.batch_size();
        for (name, len) in [
            ("drop_height", self.drop_height.len()),
            ("drop_width", self.drop_width.len()),
            ("coordinates", self.coordinates.len()),
        ] {
            if len != n {
                return Err(Error::Inconsistent(format!(
                    "{name} has {len} entries, expected {n}"
                )));
            }
        }

        for (i, (count, coords)) in self.drop_count.iter().zip(&self.coordinates).enumerate() {
            if coords.len() != *count as usize {
                return Err(Error::Inconsistent(format!(
                    "image {i}: {} coordinates for {count} drops",
                    coords.len()
                )));
            }
        }
        Ok(())
    }
}

/// Borrowed view of a single image's rain parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainImageParams<'a> {
    pub drop_count: u32,
    pub drop_height: u32,
    pub drop_width: u32,
    pub coordinates: &'a [Vector2<f32>],
}

impl RainImageParams<'_> {
    /// Maps normalized anchors to top-left pixel positions for an image of
    /// `image_size` (width, height) so that every streak lies inside the image.
    ///
    /// The first component of an anchor is the column: `x` scales along the
    /// width to `[0, width - drop_width - 1]`. The second is the row: `y` scales
    /// along the height to `[0, height - drop_height - 1]`. Renderers that index
    /// anchors as `(row, column)` must swap the components.
    pub fn anchor_pixels(&self, image_size: (u32, u32)) -> Result<Vec<UVec2>> {
        let (image_width, image_height) = image_size;
        if self.drop_width >= image_width || self.drop_height >= image_height {
            return Err(Error::DropExceedsImage {
                drop_width: self.drop_width,
                drop_height: self.drop_height,
                image_width,
                image_height,
            });
        }

        // f64 keeps every u32 span exact.
        let span = DVec2::new(
            (image_width - self.drop_width - 1) as f64,
            (image_height - self.drop_height - 1) as f64,
        );
        Ok(self
            .coordinates
            .iter()
            .map(|c| (DVec2::new(c.x as f64, c.y as f64) * span).floor().as_uvec2())
            .collect())
    }
}
