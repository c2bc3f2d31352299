//! Recombination and mutation operators for character sequences.
//!
//! # Crossover
//!
//! - [`crossover`]: probabilistic single-point crossover producing two children
//! - [`crossover_at`]: the deterministic swap at a given split index
//!
//! # Mutation
//!
//! - [`mutate`]: independent per-position replacement from the alphabet
//!
//! Both operators flip their coins with [`coin`]: a draw on `(0, 1]` that
//! succeeds when `rate >= draw`. A rate of 0.0 never fires and a rate of 1.0
//! always fires.

use super::types::Alphabet;
use rand::Rng;

/// Returns `true` with probability `rate`, consuming exactly one draw.
pub fn coin<R: Rng>(rate: f64, rng: &mut R) -> bool {
    let draw = 1.0 - rng.random::<f64>();
    rate >= draw
}

/// Single-point crossover applied with probability `rate`.
///
/// On success, a split index `k` is drawn uniformly from `0..len` and the
/// tails are exchanged (see [`crossover_at`]). `k = 0` swaps the parents
/// entirely. On failure the children are copies of the parents.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn crossover<R: Rng>(
    parent1: &[char],
    parent2: &[char],
    rate: f64,
    rng: &mut R,
) -> (Vec<char>, Vec<char>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    if parent1.is_empty() || !coin(rate, rng) {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let k = rng.random_range(0..parent1.len());
    crossover_at(parent1, parent2, k)
}

/// Exchanges tails at index `k`.
///
/// `child1 = parent1[..k] + parent2[k..]`, `child2 = parent2[..k] + parent1[k..]`.
///
/// # Panics
/// Panics if parents have different lengths or `k > len`.
pub fn crossover_at(parent1: &[char], parent2: &[char], k: usize) -> (Vec<char>, Vec<char>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(k <= parent1.len(), "split index out of bounds");

    let mut child1 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..k]);
    child1.extend_from_slice(&parent2[k..]);

    let mut child2 = Vec::with_capacity(parent2.len());
    child2.extend_from_slice(&parent2[..k]);
    child2.extend_from_slice(&parent1[k..]);

    (child1, child2)
}

/// Per-character mutation.
///
/// Each position independently flips a coin with probability `rate`; on
/// success it is replaced by a uniform draw from `alphabet`, which may be the
/// same character.
pub fn mutate<R: Rng>(sequence: &mut [char], rate: f64, alphabet: &Alphabet, rng: &mut R) {
    for c in sequence.iter_mut() {
        if coin(rate, rng) {
            *c = alphabet.sample(rng);
        }
    }
}
