use crate::SelectError;
use crate::partition::partition_3way;

/// Working slices at or below this length are sorted outright instead of
/// recursing further. Any small constant works, but it must exceed
/// roughly twice [`MEDIAN_GROUP`] for the medians recursion to strictly
/// shrink.
pub const SORT_CUTOFF: usize = 10;

/// Group width for the median-of-medians pivot. The guarantee that the
/// pivot discards at least 3/10 of each side is derived for width 5;
/// changing it invalidates the worst-case bound.
pub const MEDIAN_GROUP: usize = 5;

/// Worst-case linear selection of the `k`-th smallest element via
/// median-of-medians pivoting.
///
/// `data` itself is never mutated; the algorithm partitions a private
/// working copy. Fully deterministic: the result depends only on the
/// input multiset and `k`.
pub fn select_deterministic(data: &[i64], k: usize) -> Result<i64, SelectError> {
    if k >= data.len() {
        return Err(SelectError::OutOfRange { k, len: data.len() });
    }

    let mut work = data.to_vec();
    Ok(select_in(&mut work, k))
}

/// Recursive kernel over an in-place-narrowed working slice. Each call
/// recurses into at most one of the two disjoint sub-slices produced by
/// the partition, so the recursion depth is logarithmic in practice and
/// linear work overall.
fn select_in(a: &mut [i64], k: usize) -> i64 {
    debug_assert!(k < a.len());

    if a.len() <= SORT_CUTOFF {
        a.sort_unstable();
        return a[k];
    }

    // Median of each group of 5 (the last group may be shorter).
    let mut medians: Vec<i64> = a
        .chunks_mut(MEDIAN_GROUP)
        .map(|group| {
            group.sort_unstable();
            group[group.len() / 2]
        })
        .collect();

    let mid = medians.len() / 2;
    let pivot = select_in(&mut medians, mid);

    let (lt, gt) = partition_3way(a, pivot);
    if k < lt {
        select_in(&mut a[..lt], k)
    } else if k < gt {
        // Everything in the equal band compares equal to the pivot.
        pivot
    } else {
        select_in(&mut a[gt..], k - gt)
    }
}
