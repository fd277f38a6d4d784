use rain_augment::prelude::*;
use rain_augment_examples::{init_tracing, summarize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut generator = RainGenerator::try_new(RainConfig::new((20, 40), (10, 20), (1, 3)))?;
    generator.make_samplers(Device::Cpu, Precision::F64)?;

    let mut rng = StdRng::seed_from_u64(7);

    // One draw shared by every image in the batch.
    let shared = generator.generate(&[3], true, &mut rng)?;
    info!("same_on_batch=true, shared block: {}", shared.shares_coordinates());
    for line in summarize(&shared, 2) {
        info!("{line}");
    }

    // Independent draws per image.
    let independent = generator.generate(&[3], false, &mut rng)?;
    info!("same_on_batch=false, shared block: {}", independent.shares_coordinates());
    for line in summarize(&independent, 2) {
        info!("{line}");
    }

    Ok(())
}
