/// Dutch-national-flag 3-way partition of `data` around `pivot`.
///
/// After the call, `data[..lt]` holds the elements strictly below the
/// pivot, `data[lt..gt]` the elements equal to it, and `data[gt..]` the
/// elements strictly above it. The pivot does not have to occur in
/// `data`; the equal band is empty in that case, which is still a valid
/// split for the selection recursion. Single left-to-right pass, O(1)
/// extra space.
#[inline]
pub fn partition_3way(data: &mut [i64], pivot: i64) -> (usize, usize) {
    let mut lt = 0_usize;
    let mut i = 0_usize;
    let mut gt = data.len();

    while i < gt {
        if data[i] < pivot {
            data.swap(i, lt);
            lt += 1;
            i += 1;
        } else if data[i] > pivot {
            // Swapped-in element is unprocessed; do not advance `i`.
            gt -= 1;
            data.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}
