use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy)]
struct RuntimePreset {
    sample_size: usize,
    warm_up_ms: u64,
    measure_ms: u64,
}

const SMALL_RUNTIME: RuntimePreset = RuntimePreset {
    sample_size: 15,
    warm_up_ms: 100,
    measure_ms: 200,
};

const MEDIUM_RUNTIME: RuntimePreset = RuntimePreset {
    sample_size: 15,
    warm_up_ms: 500,
    measure_ms: 1000,
};

const LARGE_RUNTIME: RuntimePreset = RuntimePreset {
    sample_size: 10,
    warm_up_ms: 800,
    measure_ms: 1500,
};

fn apply<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, preset: RuntimePreset) {
    group.sample_size(preset.sample_size);
    group.warm_up_time(Duration::from_millis(preset.warm_up_ms));
    group.measurement_time(Duration::from_millis(preset.measure_ms));
}

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply(group, SMALL_RUNTIME);
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply(group, MEDIUM_RUNTIME);
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply(group, LARGE_RUNTIME);
}

/// Fixed-seed RNG shared by bench targets so datasets and pivot
/// sequences stay comparable across runs.
pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
