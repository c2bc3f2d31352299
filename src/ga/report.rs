//! Per-generation reports and the console reporter.
//!
//! Report lines:
//!
//! ```text
//! 0( 3/50 = 0.06):  <sequence>
//! Target string reached: <sequence>
//! Target not matched. Best canidate: <sequence>
//! Average fitness: <value>
//! ```
//!
//! Floats print with at least one decimal place (`1.0`, `0.0`, `0.06`).

use super::runner::{GenerationObserver, RunState};
use super::types::Individual;
use std::fmt;
use std::io::Write;

/// Snapshot of the best individual at a report point.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    pub best: Individual,
    pub target_len: usize,
}

impl GenerationReport {
    /// Best fitness divided by target length.
    pub fn ratio(&self) -> f64 {
        self.best.fitness() as f64 / self.target_len as f64
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing `.0` on whole-number ratios.
        write!(
            f,
            "{}( {}/{} = {:?}):  {}",
            self.generation,
            self.best.fitness(),
            self.target_len,
            self.ratio(),
            self.best.to_sequence_string()
        )
    }
}

/// Final state of a run as seen by observers.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// [`RunState::Converged`] or [`RunState::Exhausted`].
    pub state: RunState,
    /// Generation at which the loop stopped.
    pub generation: usize,
    pub best: Individual,
    /// Mean of `fitness / target_len` over the final population.
    pub mean_fitness: f64,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seq = self.best.to_sequence_string();
        match self.state {
            RunState::Converged => writeln!(f, "Target string reached: {seq}")?,
            _ => writeln!(f, "Target not matched. Best canidate: {seq}")?,
        }
        write!(f, "Average fitness: {:?}", self.mean_fitness)
    }
}

/// Writes report lines to any [`Write`] sink.
///
/// Write failures are logged and otherwise ignored; the run is not
/// interrupted by a closed pipe.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> GenerationObserver for ConsoleReporter<W> {
    fn on_report(&mut self, report: &GenerationReport) {
        if let Err(e) = writeln!(self.out, "{report}") {
            tracing::warn!(error = %e, "failed to write generation report");
        }
    }

    fn on_finish(&mut self, outcome: &RunOutcome) {
        if let Err(e) = writeln!(self.out, "{outcome}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write run outcome");
        }
    }
}
