use glam::UVec2;
use rain_augment::prelude::*;
use rain_augment_examples::{init_tracing, summarize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Light drizzle: few, short, thin streaks.
    let config = RainConfig::new((5, 15), (4, 12), (1, 2));
    let mut generator = RainGenerator::try_new(config)?;
    generator.make_samplers(Device::Cpu, Precision::F32)?;
    info!("Generator: {generator}");

    let mut rng = StdRng::seed_from_u64(2025);
    let image_size = (128, 96);
    let batch_shape = [4, 3, image_size.1 as usize, image_size.0 as usize];
    let params = generator.generate(&batch_shape, false, &mut rng)?;
    params.validate()?;

    for line in summarize(&params, 3) {
        info!("{line}");
    }

    // Pixel anchors as a renderer would use them.
    if let Some(first) = params.image(0) {
        let anchors: Vec<UVec2> = first.anchor_pixels(image_size)?;
        info!("Image 0 pixel anchors: {:?}", anchors);
    }

    info!("Total drops in batch: {}", params.total_drops());
    Ok(())
}
