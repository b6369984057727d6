use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const FEW_UNIQUE_KEYS: u64 = 16;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    group.sampling_mode(SamplingMode::Auto);
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
    group.sampling_mode(SamplingMode::Flat);
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    group.sampling_mode(SamplingMode::Flat);
}

/// Picks the runtime config for a benchmark over `size` elements.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4096 {
        apply_small_runtime_config(group);
    } else if size <= 16384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    FewUnique,
    Ascending,
    Descending,
    NearlySorted1pctSwaps,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::FewUnique,
    Distribution::Ascending,
    Distribution::Descending,
    Distribution::NearlySorted1pctSwaps,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewUnique => "few_unique",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }

    /// Presorted inputs, where a fixed pivot position can degrade to quadratic time.
    pub fn is_presorted(self) -> bool {
        matches!(
            self,
            Self::Ascending | Self::Descending | Self::NearlySorted1pctSwaps
        )
    }
}

pub fn generate_dataset<R: Rng + ?Sized>(rng: &mut R, dist: Distribution, size: usize) -> Vec<u64> {
    match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
        Distribution::FewUnique => (0..size)
            .map(|_| rng.random_range(0..FEW_UNIQUE_KEYS))
            .collect(),
        Distribution::Ascending => (0..size as u64).collect(),
        Distribution::Descending => (0..size as u64).rev().collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size == 0 {
                return data;
            }
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
            data
        }
    }
}

#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
