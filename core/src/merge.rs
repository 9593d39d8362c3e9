use alloc::vec::Vec;

/// Moves every present value to the front (dropping empty slots) and merges adjacent equal
/// values with `merge`.
///
/// Merging is a single left-greedy pass: once a pair merged, its result never merges again in
/// the same call, so `a, a, a` becomes `merge(a), a`.
///
/// ```
/// use slidegrid_core::move_and_merge_equal;
///
/// let merged = move_and_merge_equal([Some(2), None, Some(2), Some(2)], |v| v * 2);
/// assert_eq!(merged, vec![4, 2]);
/// ```
pub fn move_and_merge_equal<T: PartialEq>(
    values: impl IntoIterator<Item = Option<T>>,
    mut merge: impl FnMut(T) -> T,
) -> Vec<T> {
    let mut present = values.into_iter().flatten().peekable();
    let mut result = Vec::new();

    while let Some(current) = present.next() {
        match present.next_if_eq(&current) {
            Some(_) => result.push(merge(current)),
            None => result.push(current),
        }
    }

    result
}
