//! Permutation parity for the sliding-tile puzzle.
//!
//! A starting layout can only reach the sorted goal (hole last) when the permutation of its
//! tiles has an even number of inversions.

/// Every inversion `(i, j)` with `i < j` and `permutation[i] > permutation[j]`, in scan order.
fn inversions<T: PartialOrd>(permutation: &[T]) -> impl Iterator<Item = (usize, usize)> + '_ {
    permutation.iter().enumerate().flat_map(move |(i, left)| {
        permutation[i + 1..]
            .iter()
            .enumerate()
            .filter(move |&(_, right)| left > right)
            .map(move |(offset, _)| (i, i + 1 + offset))
    })
}

pub fn inversion_count<T: PartialOrd>(permutation: &[T]) -> usize {
    inversions(permutation).count()
}

pub fn is_even<T: PartialOrd>(permutation: &[T]) -> bool {
    inversion_count(permutation) % 2 == 0
}

/// Makes `permutation` even by transposing the last inversion found, if it is odd.
///
/// Returns whether a swap happened.
pub fn ensure_even_permutation<T: PartialOrd>(permutation: &mut [T]) -> bool {
    let mut count = 0usize;
    let mut last = None;
    for pair in inversions(permutation) {
        count += 1;
        last = Some(pair);
    }

    match last {
        Some((i, j)) if count % 2 == 1 => {
            permutation.swap(i, j);
            true
        }
        _ => false,
    }
}
