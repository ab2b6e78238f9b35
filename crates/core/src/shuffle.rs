//! Uniform in-place permutations.
//!
//! The randomness source is always passed in so callers can inject a seeded
//! generator; production sessions draw from the OS-seeded `StdRng`.

use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

/// Permute `items` in place, uniformly over all permutations (Fisher–Yates).
///
/// Sequences of length 0 or 1 are left untouched.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}

/// Shuffle only `items[range]`; elements outside the range never move.
///
/// # Panics
///
/// Panics if `range` is out of bounds for `items`.
pub fn shuffle_range<T, R>(items: &mut [T], range: Range<usize>, rng: &mut R)
where
    R: Rng + ?Sized,
{
    shuffle(&mut items[range], rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 0..32 {
            let original: Vec<usize> = (0..len).collect();
            let mut items = original.clone();
            shuffle(&mut items, &mut rng);
            assert_eq!(items.len(), original.len());
            assert_eq!(sorted(items), original);
        }
    }

    #[test]
    fn shuffle_keeps_duplicates() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut items = vec![1, 1, 2, 2, 2, 9];
        shuffle(&mut items, &mut rng);
        assert_eq!(sorted(items), vec![1, 1, 2, 2, 2, 9]);
    }

    #[test]
    fn empty_and_singleton_are_noops() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![7];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn range_shuffle_never_moves_outside_elements() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut items: Vec<usize> = (0..10).collect();
            shuffle_range(&mut items, 3..7, &mut rng);
            assert_eq!(&items[..3], &[0, 1, 2]);
            assert_eq!(&items[7..], &[7, 8, 9]);
            assert_eq!(sorted(items[3..7].to_vec()), vec![3, 4, 5, 6]);
        }
    }
}
