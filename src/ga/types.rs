//! Core data types: the target, the alphabet, and individuals.
//!
//! Sequences are `Vec<char>` of exactly `target.len()` characters. An
//! [`Individual`] pairs a sequence with its cached fitness; the cache is
//! filled on construction and never set independently.

use super::fitness::score;
use crate::error::ConfigError;
use rand::Rng;
use std::fmt;

/// The sequence the population evolves toward.
pub const DEFAULT_TARGET: &str = "I think this is a reasonable medium sized string!!";

const LOWER_CASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER_CASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+=-[]{}|;':/,.<>?\\\"";
const SPACE: &str = " ";

/// Immutable target sequence for a run.
///
/// # Examples
///
/// ```
/// use u_strmatch::ga::Target;
///
/// let target = Target::default();
/// assert_eq!(target.len(), 50);
///
/// let short = Target::new("HELLO").unwrap();
/// assert_eq!(short.to_string(), "HELLO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    chars: Vec<char>,
}

impl Target {
    /// Builds a target from a string.
    ///
    /// Returns [`ConfigError::EmptyTarget`] for an empty string.
    pub fn new(s: &str) -> Result<Self, ConfigError> {
        if s.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        Ok(Self {
            chars: s.chars().collect(),
        })
    }

    /// Number of characters; also the maximum achievable fitness.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: construction rejects empty targets.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            chars: DEFAULT_TARGET.chars().collect(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chars(f, &self.chars)
    }
}

/// The set of characters any sequence position may hold.
///
/// Order is preserved from construction and duplicates are dropped, so
/// uniform sampling over the alphabet is uniform over distinct characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from arbitrary characters.
    ///
    /// Returns [`ConfigError::EmptyAlphabet`] if no characters remain.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self, ConfigError> {
        let mut out: Vec<char> = Vec::new();
        for c in chars {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        if out.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(Self { chars: out })
    }

    /// Lowercase, uppercase, digits, punctuation and space (93 characters).
    pub fn standard() -> Self {
        let chars = [LOWER_CASE, UPPER_CASE, DIGITS, SYMBOLS, SPACE]
            .iter()
            .flat_map(|s| s.chars())
            .collect();
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Draws one character uniformly at random.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.chars[rng.random_range(0..self.chars.len())]
    }

    /// Draws `len` independent characters, in position order.
    pub fn random_sequence<R: Rng>(&self, len: usize, rng: &mut R) -> Vec<char> {
        (0..len).map(|_| self.sample(rng)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

/// A candidate solution: a sequence and its positional-match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub(crate) sequence: Vec<char>,
    pub(crate) fitness: usize,
}

impl Individual {
    /// Wraps a sequence and scores it against `target`.
    pub fn evaluated(sequence: Vec<char>, target: &Target) -> Self {
        let fitness = score(&sequence, target.chars());
        Self { sequence, fitness }
    }

    /// Creates a random individual of `target.len()` characters.
    pub fn random<R: Rng>(target: &Target, alphabet: &Alphabet, rng: &mut R) -> Self {
        Self::evaluated(alphabet.random_sequence(target.len(), rng), target)
    }

    pub fn sequence(&self) -> &[char] {
        &self.sequence
    }

    /// Number of positions matching the target.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// The sequence rendered as a `String`.
    pub fn to_sequence_string(&self) -> String {
        self.sequence.iter().collect()
    }
}

fn write_chars(f: &mut fmt::Formatter<'_>, chars: &[char]) -> fmt::Result {
    for c in chars {
        fmt::Write::write_char(f, *c)?;
    }
    Ok(())
}
