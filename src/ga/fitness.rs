//! Fitness evaluation and population statistics.

use super::types::{Alphabet, Individual, Target};
use rand::Rng;

/// Counts positions where `sequence[i] == target[i]`.
///
/// Compares up to the shorter of the two lengths. The result is at most
/// `target.len()`.
pub fn score(sequence: &[char], target: &[char]) -> usize {
    sequence
        .iter()
        .zip(target.iter())
        .filter(|(a, b)| a == b)
        .count()
}

/// Creates `n` random individuals, each evaluated immediately.
pub fn populate<R: Rng>(
    n: usize,
    target: &Target,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Vec<Individual> {
    (0..n)
        .map(|_| Individual::random(target, alphabet, rng))
        .collect()
}

/// Returns the fittest individual.
///
/// Scans with `>=`, so among equally fit individuals the last one wins.
///
/// # Panics
/// Panics if `population` is empty.
pub fn find_best(population: &[Individual]) -> &Individual {
    let (first, rest) = population
        .split_first()
        .expect("population must not be empty");
    rest.iter()
        .fold(first, |best, ind| if ind.fitness >= best.fitness { ind } else { best })
}

/// Mean of `fitness / target_len` over the population.
///
/// Returns 0.0 for an empty population.
pub fn mean_fitness(population: &[Individual], target_len: usize) -> f64 {
    if population.is_empty() || target_len == 0 {
        return 0.0;
    }
    let total: f64 = population
        .iter()
        .map(|ind| ind.fitness as f64 / target_len as f64)
        .sum();
    total / population.len() as f64
}
