//! Unbiased random permutation.

use rand::Rng;

/// Returns a uniformly random permutation of `sequence`.
///
/// The input is copied first and never modified. Uses the thread-local RNG;
/// see [`shuffle_with`] for a caller-supplied generator.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a uniformly random permutation of `sequence` drawn from `rng`.
///
/// Fisher–Yates: walking down from the last position, each position is
/// swapped with a uniformly chosen position at or below it. Every one of
/// the `n!` orders is equally likely and the work is linear in `n`.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let first = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for index in (1..shuffled.len()).rev() {
        let target = rng.random_range(0..=index);
        shuffled.swap(index, target);
    }
    shuffled
}
