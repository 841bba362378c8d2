use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Input distributions the selection harness measures. The selectors
/// themselves must not care which one produced their input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ArrayCase {
    RandomUniform,
    SortedAscending,
    SortedDescending,
    HeavyDuplicates,
}

impl ArrayCase {
    pub const ALL: [ArrayCase; 4] = [
        ArrayCase::RandomUniform,
        ArrayCase::SortedAscending,
        ArrayCase::SortedDescending,
        ArrayCase::HeavyDuplicates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::SortedAscending => "sorted_ascending",
            Self::SortedDescending => "sorted_descending",
            Self::HeavyDuplicates => "heavy_duplicates",
        }
    }
}

/// Deterministic dataset of `size` elements for the given case and seed.
pub fn generate_case(case: ArrayCase, size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);

    match case {
        ArrayCase::RandomUniform => {
            let max = (size as i64).saturating_mul(10);
            (0..size).map(|_| rng.random_range(0..=max)).collect()
        }
        ArrayCase::SortedAscending => (0..size as i64).collect(),
        ArrayCase::SortedDescending => (0..size as i64).rev().collect(),
        ArrayCase::HeavyDuplicates => (0..size).map(|_| rng.random_range(0..=10)).collect(),
    }
}
