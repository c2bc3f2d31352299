//! Error types for u-strmatch.
//!
//! Every recoverable failure in this crate is a configuration problem
//! detected before the generation loop starts. Invariant violations inside
//! the operators (unequal parents, empty populations) panic instead.

use thiserror::Error;

/// A run configuration that the engine refuses to start with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than two individuals; rank normalization needs `N(N-1)/2 > 0`.
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Offspring are produced in pairs, so the population must be even.
    #[error("population size must be even, got {0}")]
    OddPopulation(usize),

    /// A probability outside `[0, 1]` (or NaN).
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// The display interval is used as a modulus.
    #[error("display interval must be at least 1")]
    ZeroDisplayInterval,

    /// Selection tag not one of `rs`, `bs`, `ts`.
    #[error("unknown selection strategy '{0}' (expected rs, bs or ts)")]
    UnknownSelection(String),

    #[error("target sequence must not be empty")]
    EmptyTarget,

    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,
}
