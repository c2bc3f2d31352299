//! String-matching genetic algorithm.
//!
//! Evolves a population of candidate character sequences toward an exact
//! match with a fixed target sequence:
//!
//! - **Selection**: rank-based, Boltzmann (exponential) or binary tournament
//! - **Recombination**: probabilistic single-point crossover
//! - **Mutation**: independent per-character replacement from an alphabet
//!
//! Every random draw goes through one explicitly passed generator, so a run
//! is fully determined by its seed.
//!
//! # Example
//!
//! ```
//! use u_strmatch::ga::{Alphabet, GaConfig, GaRunner, Selection, Target};
//!
//! let config = GaConfig::default()
//!     .with_population_size(40)
//!     .with_selection(Selection::Tournament)
//!     .with_max_generations(200)
//!     .with_seed(7);
//! let target = Target::new("HELLO").unwrap();
//! let result = GaRunner::run(&target, &Alphabet::standard(), &config, &mut ()).unwrap();
//! println!("{:?} after {} generations", result.state, result.generations);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::ConfigError;
