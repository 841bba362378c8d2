pub mod generator;
mod median_of_medians;
mod partition;
mod quickselect;

use thiserror::Error;

pub use median_of_medians::{MEDIAN_GROUP, SORT_CUTOFF, select_deterministic};
pub use partition::partition_3way;
pub use quickselect::{select_randomized, select_randomized_with};

/// The only recoverable failure: the requested rank does not satisfy
/// `k < len`. An empty input therefore rejects every rank. Raised before
/// any copying or partitioning, so a failed call has no side effect.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum SelectError {
    #[error("rank {k} out of range for sequence of length {len}")]
    OutOfRange { k: usize, len: usize },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SelectAlgorithm {
    Deterministic,
    Randomized,
}

pub const ALL_ALGORITHMS: [SelectAlgorithm; 2] = [
    SelectAlgorithm::Deterministic,
    SelectAlgorithm::Randomized,
];

pub fn algorithm_name(algo: SelectAlgorithm) -> &'static str {
    match algo {
        SelectAlgorithm::Deterministic => "median_of_medians",
        SelectAlgorithm::Randomized => "quickselect",
    }
}

/// Dispatch over [`ALL_ALGORITHMS`]. The randomized path uses the
/// thread-local RNG; call [`select_randomized_with`] directly to pin the
/// pivot sequence.
pub fn select(algo: SelectAlgorithm, data: &[i64], k: usize) -> Result<i64, SelectError> {
    match algo {
        SelectAlgorithm::Deterministic => select_deterministic(data, k),
        SelectAlgorithm::Randomized => select_randomized(data, k),
    }
}
