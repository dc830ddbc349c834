//! Seedable random sources and permutation helpers.
//!
//! Every engine receives its generator explicitly; nothing in the crate
//! touches a thread-local or global RNG except [`seed_or_entropy`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns `seed` when set, otherwise draws a fresh one from the OS-backed
/// thread generator.
pub fn seed_or_entropy(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Shuffles a slice in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}

/// Two distinct indices from `0..n`, returned in ascending order.
///
/// Requires `n >= 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 2, "distinct_pair needs at least two indices");
    let a = rng.random_range(0..n);
    // Draw from the n-1 remaining slots and skip over `a`.
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
