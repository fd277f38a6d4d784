#![forbid(unsafe_code)]

use rain_augment::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber honoring `RUST_LOG` (default: `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// One line per image: drop count, streak size, and the first few anchors.
pub fn summarize(params: &RainParams, max_anchors: usize) -> Vec<String> {
    params
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let anchors: Vec<String> = image
                .coordinates
                .iter()
                .take(max_anchors)
                .map(|c| format!("({:.3}, {:.3})", c.x, c.y))
                .collect();
            let more = image.coordinates.len().saturating_sub(max_anchors);
            let suffix = if more > 0 {
                format!(" ... +{more}")
            } else {
                String::new()
            };
            format!(
                "image {i}: {} drops, {}x{} px, anchors [{}]{suffix}",
                image.drop_count,
                image.drop_width,
                image.drop_height,
                anchors.join(", ")
            )
        })
        .collect()
}
