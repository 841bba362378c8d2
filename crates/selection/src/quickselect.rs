use rand::Rng;

use crate::SelectError;
use crate::median_of_medians::SORT_CUTOFF;
use crate::partition::partition_3way;

/// Expected-linear selection of the `k`-th smallest element with a
/// caller-supplied pivot RNG.
///
/// Same contract as [`crate::select_deterministic`], except the running
/// time is linear only in expectation over the pivot choices; there is
/// no worst-case bound. Fixing `rng` to a seeded generator makes the
/// pivot sequence, and therefore the full execution, reproducible.
pub fn select_randomized_with<R: Rng + ?Sized>(
    data: &[i64],
    k: usize,
    rng: &mut R,
) -> Result<i64, SelectError> {
    if k >= data.len() {
        return Err(SelectError::OutOfRange { k, len: data.len() });
    }

    let mut work = data.to_vec();
    Ok(select_in(&mut work, k, rng))
}

/// [`select_randomized_with`] using the thread-local RNG.
pub fn select_randomized(data: &[i64], k: usize) -> Result<i64, SelectError> {
    select_randomized_with(data, k, &mut rand::rng())
}

fn select_in<R: Rng + ?Sized>(mut a: &mut [i64], mut k: usize, rng: &mut R) -> i64 {
    // Explicit loop rather than tail recursion: a run of unlucky pivots
    // must not grow the stack.
    loop {
        debug_assert!(k < a.len());

        if a.len() <= SORT_CUTOFF {
            a.sort_unstable();
            return a[k];
        }

        let pivot = a[rng.random_range(0..a.len())];
        let (lt, gt) = partition_3way(a, pivot);

        if (lt..gt).contains(&k) {
            return pivot;
        }

        let (left, rest) = a.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);
        if k < lt {
            a = left;
        } else {
            a = right;
            k -= gt;
        }
    }
}
