//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the string-matching GA.
///
/// Supplied once and immutable for the run. Builder methods store values
/// as given; [`validate`](Self::validate) rejects anything out of range
/// rather than clamping it.
///
/// # Defaults
///
/// ```
/// use u_strmatch::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_strmatch::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Rank)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals `N`. Must be even and at least 2.
    pub population_size: usize,

    /// Selection strategy used to build the breeding pool.
    pub selection: Selection,

    /// Probability of crossing a parent pair (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-character mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Generation budget `G`. Generations `0..=G` are evaluated.
    pub max_generations: usize,

    /// Report every `D` generations (and always at generation `G`).
    pub display_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            selection: Selection::default(),
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            max_generations: 500,
            display_interval: 50,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-character mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the display interval.
    pub fn with_display_interval(mut self, d: usize) -> Self {
        self.display_interval = d;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Odd population sizes are rejected: offspring are produced two per
    /// parent pair and the population must be replaced exactly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }
        check_rate("crossover rate", self.crossover_rate)?;
        check_rate("mutation rate", self.mutation_rate)?;
        if self.display_interval == 0 {
            return Err(ConfigError::ZeroDisplayInterval);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
