//! Selection strategies for building the breeding pool.
//!
//! Each strategy turns a population of `N` individuals into `N` parent
//! indices (repetition allowed). Fitness is maximized: more matching
//! characters means higher selection pressure.
//!
//! Rank and Boltzmann selection share the same sampling scheme: build a
//! cumulative distribution, draw `u ∈ [0, 1)`, and take the **first** index
//! whose cumulative value is `>= u`.
//!
//! # References
//!
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"
//! - Goldberg (1990), "A Note on Boltzmann Tournament Selection for Genetic
//!   Algorithms and Population-Oriented Simulated Annealing"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use crate::error::ConfigError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Selection strategy for choosing the breeding pool.
///
/// # Examples
///
/// ```
/// use u_strmatch::ga::Selection;
///
/// let sel: Selection = "ts".parse().unwrap();
/// assert_eq!(sel, Selection::Tournament);
/// assert!("xs".parse::<Selection>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Linear rank selection.
    ///
    /// The population is sorted ascending by fitness and the individual at
    /// rank `r` gets weight `r`, normalized by `N(N-1)/2`. The least fit
    /// individual (rank 0) therefore has probability zero.
    ///
    /// # Complexity
    /// O(n log n) sort, O(n) per draw
    Rank,

    /// Boltzmann (exponential) selection.
    ///
    /// Weight `e^fitness` over the population in its current order. Raw
    /// fitness is used, not fitness divided by sequence length, so one extra
    /// matching character multiplies the odds by `e`.
    ///
    /// # Complexity
    /// O(n) per draw
    Boltzmann,

    /// Binary tournament with replacement.
    ///
    /// Two uniform picks; the first wins unless the second is strictly
    /// fitter.
    ///
    /// # Complexity
    /// O(1) per draw
    Tournament,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament
    }
}

impl Selection {
    /// Short tag used on the command line.
    pub fn tag(&self) -> &'static str {
        match self {
            Selection::Rank => "rs",
            Selection::Boltzmann => "bs",
            Selection::Tournament => "ts",
        }
    }

    /// Draws a breeding pool of exactly `population.len()` indices.
    ///
    /// The population is not reordered; returned indices refer to the
    /// caller's order.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn breeding_pool<R: Rng>(&self, population: &[Individual], rng: &mut R) -> Vec<usize> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Rank => rank(population, rng),
            Selection::Boltzmann => boltzmann(population, rng),
            Selection::Tournament => tournament(population, rng),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Selection::Rank => "rank",
            Selection::Boltzmann => "boltzmann",
            Selection::Tournament => "tournament",
        };
        f.write_str(name)
    }
}

impl FromStr for Selection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rs" | "rank" => Ok(Selection::Rank),
            "bs" | "boltzmann" => Ok(Selection::Boltzmann),
            "ts" | "tournament" => Ok(Selection::Tournament),
            other => Err(ConfigError::UnknownSelection(other.to_string())),
        }
    }
}

/// Rank probabilities for a population of size `n`, in ascending rank order.
///
/// `p[r] = r / (n(n-1)/2)`. Returns all zeros for `n < 2`.
pub fn rank_probabilities(n: usize) -> Vec<f64> {
    let rank_sum = (n * n.saturating_sub(1) / 2) as f64;
    if rank_sum == 0.0 {
        return vec![0.0; n];
    }
    (0..n).map(|r| r as f64 / rank_sum).collect()
}

/// Boltzmann probabilities `e^f_i / Σ e^f_j`, in population order.
///
/// Exponents are shifted by the population maximum so long targets do not
/// overflow; the normalized values are unchanged.
pub fn boltzmann_probabilities(population: &[Individual]) -> Vec<f64> {
    let max = match population.iter().map(|ind| ind.fitness).max() {
        Some(max) => max as f64,
        None => return Vec::new(),
    };
    let weights: Vec<f64> = population
        .iter()
        .map(|ind| (ind.fitness as f64 - max).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    weights.iter().map(|w| w / total).collect()
}

/// Running sum of `probabilities`.
pub fn cumulative(probabilities: &[f64]) -> Vec<f64> {
    probabilities
        .iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}

/// First index whose cumulative value is `>= draw`.
///
/// When rounding leaves every value below `draw`, the last index is
/// returned so the pool is never short.
///
/// # Panics
/// Panics if `cumulative` is empty.
pub fn first_at_least(cumulative: &[f64], draw: f64) -> usize {
    assert!(!cumulative.is_empty(), "empty cumulative distribution");
    cumulative
        .iter()
        .position(|&c| c >= draw)
        .unwrap_or(cumulative.len() - 1)
}

fn sample_pool<R: Rng>(cumulative: &[f64], n: usize, rng: &mut R) -> Vec<usize> {
    (0..n)
        .map(|_| first_at_least(cumulative, rng.random::<f64>()))
        .collect()
}

fn rank<R: Rng>(population: &[Individual], rng: &mut R) -> Vec<usize> {
    let n = population.len();

    // Stable ascending sort on a working copy of indices.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| population[i].fitness);

    let cumulative = cumulative(&rank_probabilities(n));
    sample_pool(&cumulative, n, rng)
        .into_iter()
        .map(|r| order[r])
        .collect()
}

fn boltzmann<R: Rng>(population: &[Individual], rng: &mut R) -> Vec<usize> {
    let cumulative = cumulative(&boltzmann_probabilities(population));
    sample_pool(&cumulative, population.len(), rng)
}

fn tournament<R: Rng>(population: &[Individual], rng: &mut R) -> Vec<usize> {
    let n = population.len();
    (0..n)
        .map(|_| {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if population[a].fitness >= population[b].fitness {
                a
            } else {
                b
            }
        })
        .collect()
}
