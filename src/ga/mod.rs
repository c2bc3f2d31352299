//! String-matching Genetic Algorithm.
//!
//! Evolves fixed-length character sequences toward a [`Target`] by counting
//! positional matches. One generation runs:
//!
//! 1. Report the best individual (every `display_interval` generations)
//! 2. Build a breeding pool of `N` parents with a [`Selection`] strategy
//! 3. Pair consecutive parents, apply single-point crossover, then mutate
//!    each child per character
//! 4. Replace the population with the `N` offspring
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final state, best individual and emitted reports
//! - [`GenerationObserver`]: Hook for per-generation progress
//!
//! # Submodules
//!
//! - [`fitness`]: Positional-match scoring and population statistics
//! - [`operators`]: Single-point crossover and per-character mutation
//! - [`selection`]: Rank, Boltzmann and tournament selection helpers
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod report;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use report::{ConsoleReporter, GenerationReport, RunOutcome};
pub use runner::{GaResult, GaRunner, GenerationObserver, RunState};
pub use selection::Selection;
pub use types::{Alphabet, Individual, Target, DEFAULT_TARGET};
