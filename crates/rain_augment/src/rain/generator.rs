//! Random generator for rain-streak parameters.
//!
//! [`RainGenerator`] turns three inclusive integer ranges into continuous uniform
//! samplers over `[min, max + 1)`. Truncating a draw toward zero then gives every
//! integer in `[min, max]` the same probability mass. Anchor coordinates come from
//! a fourth sampler over `[0, 1)`.
//!
//! Integer samplers always draw in `f64`: every `u32` bound is exact there, while
//! `f32` rounds bounds above 2^24. The requested precision applies to coordinates.
use std::fmt;
use std::sync::Arc;

use mint::Vector2;
use rand::RngCore;
use tracing::{debug, trace};

use crate::batch::{batch_size, check_batch_params};
use crate::error::{Error, Result};
use crate::generator::ParamGenerator;
use crate::rain::params::RainParams;
use crate::rain::{DropRange, RainConfig};
use crate::range::range_bound;
use crate::sampling::{sample_batch, Device, Precision, UniformSampler};

/// Samplers installed by [`RainGenerator::make_samplers`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainSamplers {
    pub number_of_drops: UniformSampler,
    pub drop_height: UniformSampler,
    pub drop_width: UniformSampler,
    pub coordinates: UniformSampler,
    pub device: Device,
    pub precision: Precision,
}

/// Generates per-image drop counts, streak sizes, and anchor coordinates.
#[derive(Debug, Clone)]
pub struct RainGenerator {
    config: RainConfig,
    samplers: Option<RainSamplers>,
}

impl RainGenerator {
    /// Creates an unconfigured generator. Ranges are checked by
    /// [`RainGenerator::make_samplers`].
    pub fn new(config: RainConfig) -> Self {
        Self {
            config,
            samplers: None,
        }
    }

    /// Creates an unconfigured generator after validating `config`.
    pub fn try_new(config: RainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Currently installed samplers, if configured.
    pub fn samplers(&self) -> Option<&RainSamplers> {
        self.samplers.as_ref()
    }
}

fn integer_sampler(range: DropRange, name: &str) -> Result<UniformSampler> {
    let (lo, hi) = range_bound((range.min, range.max), name, range.center(), range.bounds())?;
    UniformSampler::new(lo, hi + 1.0, Precision::F64)
}

fn sample_integers(
    sampler: &UniformSampler,
    n: usize,
    same_on_batch: bool,
    rng: &mut dyn RngCore,
) -> Vec<u32> {
    // `as` truncates toward zero; draws are non-negative.
    sample_batch(sampler, n, same_on_batch, rng)
        .into_iter()
        .map(|v| v as u32)
        .collect()
}

fn sample_coordinates(
    sampler: &UniformSampler,
    count: u32,
    rng: &mut dyn RngCore,
) -> Arc<[Vector2<f32>]> {
    (0..count)
        .map(|_| {
            let x = sampler.sample_f32(rng);
            let y = sampler.sample_f32(rng);
            Vector2 { x, y }
        })
        .collect()
}

impl ParamGenerator for RainGenerator {
    type Params = RainParams;

    fn make_samplers(&mut self, device: Device, precision: Precision) -> Result<()> {
        let number_of_drops = integer_sampler(self.config.number_of_drops, "number_of_drops")?;
        let drop_height = integer_sampler(self.config.drop_height, "drop_height")?;
        let drop_width = integer_sampler(self.config.drop_width, "drop_width")?;

        let (lo, hi) = range_bound((0.0, 1.0), "drops_coordinate", 0.5, (0.0, 1.0))?;
        let coordinates = UniformSampler::new(lo, hi, precision)?;

        debug!(
            "Rain samplers on {:?}/{:?}: drops [{}, {}), height [{}, {}), width [{}, {}).",
            device,
            precision,
            number_of_drops.low(),
            number_of_drops.high(),
            drop_height.low(),
            drop_height.high(),
            drop_width.low(),
            drop_width.high()
        );

        self.samplers = Some(RainSamplers {
            number_of_drops,
            drop_height,
            drop_width,
            coordinates,
            device,
            precision,
        });
        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.samplers.is_some()
    }

    fn generate(
        &self,
        batch_shape: &[usize],
        same_on_batch: bool,
        rng: &mut dyn RngCore,
    ) -> Result<RainParams> {
        let batch_size = batch_size(batch_shape)?;
        check_batch_params(batch_size, same_on_batch)?;
        let samplers = self.samplers.as_ref().ok_or(Error::NotConfigured)?;

        let drop_count =
            sample_integers(&samplers.number_of_drops, batch_size, same_on_batch, rng);
        let drop_height = sample_integers(&samplers.drop_height, batch_size, same_on_batch, rng);
        let drop_width = sample_integers(&samplers.drop_width, batch_size, same_on_batch, rng);

        let coordinates = if same_on_batch {
            match drop_count.first() {
                Some(&count) => {
                    let shared = sample_coordinates(&samplers.coordinates, count, rng);
                    vec![shared; batch_size]
                }
                None => Vec::new(),
            }
        } else {
            drop_count
                .iter()
                .map(|&count| sample_coordinates(&samplers.coordinates, count, rng))
                .collect()
        };

        let params = RainParams {
            drop_count,
            drop_height,
            drop_width,
            coordinates,
        };
        trace!(
            "Sampled rain for batch of {} (same_on_batch: {}): {} drops.",
            batch_size,
            same_on_batch,
            params.total_drops()
        );
        Ok(params)
    }
}

impl fmt::Display for RainGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.config, f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::tests::FixedRng;

    fn configured(config: RainConfig) -> RainGenerator {
        let mut generator = RainGenerator::new(config);
        generator
            .make_samplers(Device::Cpu, Precision::F32)
            .expect("valid config");
        generator
    }

    fn small() -> RainGenerator {
        configured(RainConfig::new((1, 2), (1, 2), (1, 2)))
    }

    #[test]
    fn samplers_span_inclusive_range_plus_one() {
        let generator = configured(RainConfig::new((3, 7), (0, 0), (2, 5)));
        let s = generator.samplers().expect("configured");
        assert_eq!((s.number_of_drops.low(), s.number_of_drops.high()), (3.0, 8.0));
        assert_eq!((s.drop_height.low(), s.drop_height.high()), (0.0, 1.0));
        assert_eq!((s.drop_width.low(), s.drop_width.high()), (2.0, 6.0));
        assert_eq!((s.coordinates.low(), s.coordinates.high()), (0.0, 1.0));
    }

    #[test]
    fn independent_batch_matches_ranges_and_shapes() {
        let generator = small();
        let mut rng = StdRng::seed_from_u64(2025);
        let params = generator.generate(&[3], false, &mut rng).unwrap();

        assert_eq!(params.drop_count.len(), 3);
        assert_eq!(params.drop_height.len(), 3);
        assert_eq!(params.drop_width.len(), 3);
        assert_eq!(params.coordinates.len(), 3);
        for img in params.iter() {
            assert!((1..=2).contains(&img.drop_count));
            assert!((1..=2).contains(&img.drop_height));
            assert!((1..=2).contains(&img.drop_width));
            assert_eq!(img.coordinates.len(), img.drop_count as usize);
            for c in img.coordinates {
                assert!((0.0..1.0).contains(&c.x));
                assert!((0.0..1.0).contains(&c.y));
            }
        }
        params.validate().unwrap();
    }

    #[test]
    fn same_on_batch_shares_values_and_coordinates() {
        let generator = small();
        let mut rng = StdRng::seed_from_u64(7);
        let params = generator.generate(&[3], true, &mut rng).unwrap();

        assert!(params.drop_count.iter().all(|&n| n == params.drop_count[0]));
        assert!(params.drop_height.iter().all(|&n| n == params.drop_height[0]));
        assert!(params.drop_width.iter().all(|&n| n == params.drop_width[0]));
        assert!(Arc::ptr_eq(&params.coordinates[0], &params.coordinates[1]));
        assert!(Arc::ptr_eq(&params.coordinates[1], &params.coordinates[2]));
        assert!(params.shares_coordinates());
        params.validate().unwrap();
    }

    #[test]
    fn independent_batch_does_not_force_equal_counts() {
        let generator = configured(RainConfig::new((0, 100), (1, 1), (1, 1)));
        let mut rng = StdRng::seed_from_u64(11);
        let params = generator.generate(&[16], false, &mut rng).unwrap();
        let distinct: HashSet<_> = params.drop_count.iter().collect();
        assert!(distinct.len() > 1);
        assert!(!params.shares_coordinates());
    }

    #[test]
    fn draws_stay_inside_inclusive_range_and_reach_both_ends() {
        let generator = configured(RainConfig::new((2, 5), (10, 12), (0, 3)));
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let params = generator.generate(&[20], false, &mut rng).unwrap();
            for img in params.iter() {
                assert!(generator.config().number_of_drops.contains(img.drop_count));
                assert!(generator.config().drop_height.contains(img.drop_height));
                assert!(generator.config().drop_width.contains(img.drop_width));
                seen.insert(img.drop_count);
            }
        }
        assert_eq!(seen, HashSet::from([2, 3, 4, 5]));
    }

    #[test]
    fn max_rng_output_truncates_to_range_max() {
        let generator = small();
        let mut rng = FixedRng { value: u32::MAX };
        let params = generator.generate(&[2], false, &mut rng).unwrap();
        assert_eq!(params.drop_count, vec![2, 2]);
        assert_eq!(params.drop_height, vec![2, 2]);
        for c in params.coordinates.iter().flat_map(|b| b.iter()) {
            assert!(c.x < 1.0 && c.y < 1.0);
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let generator = configured(RainConfig::new((5, 50), (5, 20), (1, 3)));
        for same_on_batch in [false, true] {
            let mut rng_a = StdRng::seed_from_u64(123);
            let mut rng_b = StdRng::seed_from_u64(123);
            let a = generator.generate(&[4, 3, 64, 64], same_on_batch, &mut rng_a).unwrap();
            let b = generator.generate(&[4, 3, 64, 64], same_on_batch, &mut rng_b).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn precision_f64_respects_ranges() {
        let mut generator = RainGenerator::new(RainConfig::new((1, 2), (1, 2), (1, 2)));
        generator.make_samplers(Device::Cpu, Precision::F64).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let params = generator.generate(&[8], false, &mut rng).unwrap();
        assert!(params.drop_count.iter().all(|n| (1..=2).contains(n)));
        params.validate().unwrap();
    }

    #[test]
    fn empty_batch_yields_empty_params() {
        let generator = small();
        let mut rng = StdRng::seed_from_u64(1);
        for same_on_batch in [false, true] {
            let params = generator.generate(&[0], same_on_batch, &mut rng).unwrap();
            assert!(params.is_empty());
            assert!(params.coordinates.is_empty());
        }
    }

    #[test]
    fn generate_before_make_samplers_fails() {
        let generator = RainGenerator::new(RainConfig::new((1, 2), (1, 2), (1, 2)));
        assert!(!generator.is_configured());
        let mut rng = StdRng::seed_from_u64(1);
        let err = generator.generate(&[3], false, &mut rng).unwrap_err();
        assert!(matches!(err, Error::NotConfigured));
    }

    #[test]
    fn empty_batch_shape_fails() {
        let generator = small();
        let mut rng = StdRng::seed_from_u64(1);
        let err = generator.generate(&[], false, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidBatch(_)));
    }

    #[test]
    fn inverted_range_fails_configuration() {
        let mut generator = RainGenerator::new(RainConfig::new((5, 2), (1, 2), (1, 2)));
        let err = generator
            .make_samplers(Device::Cpu, Precision::F32)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange { ref name, .. } if name == "number_of_drops"));
        assert!(!generator.is_configured());
        assert!(RainGenerator::try_new(RainConfig::new((5, 2), (1, 2), (1, 2))).is_err());
    }

    #[test]
    fn reconfiguration_replaces_samplers() {
        let mut generator = small();
        generator.make_samplers(Device::Cpu, Precision::F64).unwrap();
        let s = generator.samplers().unwrap();
        assert_eq!(s.precision, Precision::F64);
        assert_eq!(s.coordinates.precision(), Precision::F64);
    }

    #[test]
    fn integer_draws_stay_in_range_above_f32_exact_limit() {
        let generator = configured(RainConfig::new(
            (1, 1),
            (16_777_217, 16_777_217),
            (16_777_219, 16_777_221),
        ));
        let mut rng = StdRng::seed_from_u64(17);
        let params = generator.generate(&[64], false, &mut rng).unwrap();

        assert!(params.drop_height.iter().all(|&h| h == 16_777_217));
        assert!(params
            .drop_width
            .iter()
            .all(|w| (16_777_219..=16_777_221).contains(w)));
        assert_eq!(params.drop_count, vec![1; 64]);
    }

    #[test]
    fn display_matches_config() {
        let generator = RainGenerator::new(RainConfig::new((1, 2), (3, 4), (5, 6)));
        assert_eq!(
            generator.to_string(),
            "number_of_drops=(1, 2), drop_height=(3, 4), drop_width=(5, 6)"
        );
    }
}
