//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → report → selection → crossover → mutation → replace.
//!
//! The loop visits generations `0..=max_generations`. Termination is only
//! checked at report points (every `display_interval` generations and at the
//! final one): the run converges when the best individual matches the target
//! exactly, and is exhausted when the budget runs out.

use super::config::GaConfig;
use super::fitness::{find_best, mean_fitness, populate};
use super::operators::{crossover, mutate};
use super::report::{GenerationReport, RunOutcome};
use super::types::{Alphabet, Individual, Target};
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, info, trace, warn};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Only held inside the generation loop; never returned in a
    /// [`GaResult`] or passed in a [`RunOutcome`].
    Running,
    /// The best individual matched every target position.
    Converged,
    /// The generation budget ran out first.
    Exhausted,
}

/// Receives progress from [`GaRunner`].
///
/// All methods default to no-ops. `()` is the silent observer.
pub trait GenerationObserver {
    /// Called at the start of every generation with the current population.
    fn on_generation(&mut self, _generation: usize, _population: &[Individual]) {}

    /// Called at every report point.
    fn on_report(&mut self, _report: &GenerationReport) {}

    /// Called once when the run stops.
    fn on_finish(&mut self, _outcome: &RunOutcome) {}
}

impl GenerationObserver for () {}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// [`RunState::Converged`] or [`RunState::Exhausted`].
    pub state: RunState,

    /// Best individual of the final population.
    pub best: Individual,

    /// Generation at which the loop stopped.
    pub generations: usize,

    /// Mean of `fitness / target_len` over the final population.
    pub mean_fitness: f64,

    /// Every report emitted, in order.
    pub reports: Vec<GenerationReport>,
}

impl GaResult {
    pub fn converged(&self) -> bool {
        self.state == RunState::Converged
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_strmatch::ga::{Alphabet, GaConfig, GaRunner, Target};
///
/// let target = Target::new("HELLO").unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = GaRunner::run(&target, &Alphabet::standard(), &config, &mut ()).unwrap();
/// assert!(result.generations <= 50);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// Returns an error without touching the observer if the configuration
    /// is invalid.
    pub fn run<O: GenerationObserver>(
        target: &Target,
        alphabet: &Alphabet,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(target, alphabet, config, observer, &mut rng)
    }

    /// Runs the GA drawing every random value from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<O: GenerationObserver, R: Rng>(
        target: &Target,
        alphabet: &Alphabet,
        config: &GaConfig,
        observer: &mut O,
        rng: &mut R,
    ) -> Result<GaResult, ConfigError> {
        config.validate()?;
        if target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }

        let missing = target
            .chars()
            .iter()
            .filter(|&&c| !alphabet.contains(c))
            .count();
        if missing > 0 {
            warn!(
                missing,
                "target contains characters outside the alphabet; convergence is impossible"
            );
        }

        info!(
            population_size = config.population_size,
            selection = %config.selection,
            crossover_rate = config.crossover_rate,
            mutation_rate = config.mutation_rate,
            max_generations = config.max_generations,
            display_interval = config.display_interval,
            target_len = target.len(),
            "starting string-matching GA"
        );

        let target_len = target.len();
        let mut population = populate(config.population_size, target, alphabet, rng);
        let mut reports = Vec::new();
        let mut state = RunState::Running;

        for gen in 0..=config.max_generations {
            observer.on_generation(gen, &population);
            trace!(gen, best = find_best(&population).fitness(), "generation");

            if gen % config.display_interval == 0 || gen == config.max_generations {
                let best = find_best(&population).clone();
                let report = GenerationReport {
                    generation: gen,
                    best,
                    target_len,
                };
                debug!(gen, fitness = report.best.fitness(), "report");
                observer.on_report(&report);

                if report.best.fitness() == target_len {
                    state = RunState::Converged;
                } else if gen == config.max_generations {
                    state = RunState::Exhausted;
                }
                reports.push(report);

                if state != RunState::Running {
                    return Ok(finish(state, gen, &population, target_len, reports, observer));
                }
            }

            population = breed(&population, target, alphabet, config, rng);
        }

        // The final generation is always a report point.
        unreachable!("generation loop exited without reaching a terminal state")
    }
}

/// Produces the next generation from a breeding pool.
fn breed<R: Rng>(
    population: &[Individual],
    target: &Target,
    alphabet: &Alphabet,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let pool = config.selection.breeding_pool(population, rng);
    let mut offspring = Vec::with_capacity(pool.len());

    for pair in pool.chunks_exact(2) {
        let parent1 = &population[pair[0]];
        let parent2 = &population[pair[1]];

        let (mut child1, mut child2) = crossover(
            &parent1.sequence,
            &parent2.sequence,
            config.crossover_rate,
            rng,
        );
        mutate(&mut child1, config.mutation_rate, alphabet, rng);
        mutate(&mut child2, config.mutation_rate, alphabet, rng);

        offspring.push(Individual::evaluated(child1, target));
        offspring.push(Individual::evaluated(child2, target));
    }

    debug_assert_eq!(offspring.len(), population.len());
    offspring
}

fn finish<O: GenerationObserver>(
    state: RunState,
    generation: usize,
    population: &[Individual],
    target_len: usize,
    reports: Vec<GenerationReport>,
    observer: &mut O,
) -> GaResult {
    let best = find_best(population).clone();
    let mean = mean_fitness(population, target_len);

    let outcome = RunOutcome {
        state,
        generation,
        best: best.clone(),
        mean_fitness: mean,
    };
    observer.on_finish(&outcome);

    info!(
        state = ?state,
        generation,
        best_fitness = best.fitness(),
        mean_fitness = mean,
        "GA finished"
    );

    GaResult {
        state,
        best,
        generations: generation,
        mean_fitness: mean,
        reports,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fitness::score;
    use crate::ga::Selection;
    use crate::random::create_rng;

    /// Records what the runner tells its observer.
    #[derive(Default)]
    struct Recorder {
        generations: Vec<usize>,
        sizes: Vec<usize>,
        reports: Vec<usize>,
        outcome: Option<RunOutcome>,
    }

    impl GenerationObserver for Recorder {
        fn on_generation(&mut self, generation: usize, population: &[Individual]) {
            self.generations.push(generation);
            self.sizes.push(population.len());
        }

        fn on_report(&mut self, report: &GenerationReport) {
            self.reports.push(report.generation);
        }

        fn on_finish(&mut self, outcome: &RunOutcome) {
            self.outcome = Some(outcome.clone());
        }
    }

    fn hello_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_crossover_rate(0.9)
            .with_mutation_rate(0.05)
            .with_max_generations(500)
            .with_display_interval(50)
            .with_seed(42)
    }

    #[test]
    fn test_hello_terminates_with_constant_population() {
        let target = Target::new("HELLO").unwrap();
        let alphabet = Alphabet::standard();

        for selection in [Selection::Rank, Selection::Boltzmann, Selection::Tournament] {
            let config = hello_config().with_selection(selection);
            let mut recorder = Recorder::default();
            let result = GaRunner::run(&target, &alphabet, &config, &mut recorder).unwrap();

            assert!(
                matches!(result.state, RunState::Converged | RunState::Exhausted),
                "{selection}: unexpected state {:?}",
                result.state
            );
            assert!(result.generations <= 500);
            assert!(recorder.generations.len() <= 501);
            assert!(
                recorder.sizes.iter().all(|&n| n == 20),
                "{selection}: population size drifted"
            );
            assert_eq!(recorder.outcome.unwrap().state, result.state);
        }
    }

    #[test]
    fn test_running_state_never_escapes() {
        let target = Target::new("HELLO").unwrap();
        for (alphabet, generations) in [
            (Alphabet::new(['x']).unwrap(), 5),
            (Alphabet::new("HELO".chars()).unwrap(), 300),
        ] {
            let config = GaConfig::default()
                .with_population_size(8)
                .with_max_generations(generations)
                .with_display_interval(5)
                .with_seed(11);
            let mut recorder = Recorder::default();
            let result = GaRunner::run(&target, &alphabet, &config, &mut recorder).unwrap();

            assert_ne!(result.state, RunState::Running);
            assert_ne!(recorder.outcome.unwrap().state, RunState::Running);
        }
    }

    #[test]
    fn test_report_points() {
        let target = Target::new("HELLO").unwrap();
        let alphabet = Alphabet::new(['x', 'y']).unwrap();
        // Unreachable target: the run must exhaust the budget.
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(23)
            .with_display_interval(10)
            .with_seed(1);
        let mut recorder = Recorder::default();
        let result = GaRunner::run(&target, &alphabet, &config, &mut recorder).unwrap();

        assert_eq!(result.state, RunState::Exhausted);
        assert_eq!(result.generations, 23);
        assert_eq!(recorder.reports, vec![0, 10, 20, 23]);
        assert_eq!(recorder.generations, (0..=23).collect::<Vec<_>>());
        assert_eq!(result.reports.len(), 4);
        assert_eq!(result.best.fitness(), 0);
        assert_eq!(result.mean_fitness, 0.0);
    }

    #[test]
    fn test_zero_generations_reports_once() {
        let target = Target::new("HELLO").unwrap();
        let alphabet = Alphabet::new(['q']).unwrap();
        let config = GaConfig::default()
            .with_population_size(2)
            .with_max_generations(0)
            .with_display_interval(7)
            .with_seed(3);
        let mut recorder = Recorder::default();
        let result = GaRunner::run(&target, &alphabet, &config, &mut recorder).unwrap();

        assert_eq!(result.state, RunState::Exhausted);
        assert_eq!(result.generations, 0);
        assert_eq!(recorder.reports, vec![0]);
    }

    #[test]
    fn test_single_char_alphabet_converges_immediately() {
        let target = Target::new("aaaa").unwrap();
        let alphabet = Alphabet::new(['a']).unwrap();
        let config = GaConfig::default()
            .with_population_size(6)
            .with_display_interval(5)
            .with_seed(9);
        let result = GaRunner::run(&target, &alphabet, &config, &mut ()).unwrap();

        assert!(result.converged());
        assert_eq!(result.generations, 0);
        assert_eq!(result.best.to_sequence_string(), "aaaa");
        assert!((result.mean_fitness - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_convergence_only_checked_at_report_points() {
        let target = Target::new("ab").unwrap();
        let alphabet = Alphabet::new(['a', 'b']).unwrap();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(400)
            .with_display_interval(4)
            .with_seed(5);
        let result = GaRunner::run(&target, &alphabet, &config, &mut ()).unwrap();

        assert!(result.converged());
        assert_eq!(result.generations % 4, 0);
        assert_eq!(result.best.fitness(), 2);
    }

    #[test]
    fn test_same_seed_same_result() {
        let target = Target::new("HELLO").unwrap();
        let alphabet = Alphabet::standard();
        let config = hello_config().with_max_generations(60);

        let a = GaRunner::run(&target, &alphabet, &config, &mut ()).unwrap();
        let b = GaRunner::run(&target, &alphabet, &config, &mut ()).unwrap();
        assert_eq!(a.state, b.state);
        assert_eq!(a.generations, b.generations);
        assert_eq!(a.best, b.best);
        assert_eq!(a.reports, b.reports);
    }

    #[test]
    fn test_run_with_rng_matches_seeded_run() {
        let target = Target::new("HELLO").unwrap();
        let alphabet = Alphabet::standard();
        let config = hello_config().with_max_generations(30);

        let a = GaRunner::run(&target, &alphabet, &config, &mut ()).unwrap();
        let b = GaRunner::run_with_rng(&target, &alphabet, &config, &mut (), &mut create_rng(42))
            .unwrap();
        assert_eq!(a.reports, b.reports);
    }

    #[test]
    fn test_fitness_cache_matches_sequence() {
        struct Check<'a>(&'a Target);
        impl GenerationObserver for Check<'_> {
            fn on_generation(&mut self, _: usize, population: &[Individual]) {
                for ind in population {
                    assert_eq!(ind.fitness(), score(ind.sequence(), self.0.chars()));
                    assert!(ind.fitness() <= self.0.len());
                    assert_eq!(ind.sequence().len(), self.0.len());
                }
            }
        }

        let target = Target::default();
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(40)
            .with_selection(Selection::Boltzmann)
            .with_seed(8);
        GaRunner::run(&target, &Alphabet::standard(), &config, &mut Check(&target)).unwrap();
    }

    #[test]
    fn test_no_variation_keeps_pool_sequences() {
        // Without crossover or mutation every child is a copy of a parent.
        struct Pool(Vec<Vec<Vec<char>>>);
        impl GenerationObserver for Pool {
            fn on_generation(&mut self, _: usize, population: &[Individual]) {
                self.0
                    .push(population.iter().map(|i| i.sequence().to_vec()).collect());
            }
        }

        let target = Target::default();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0)
            .with_max_generations(5)
            .with_seed(2);
        let mut pool = Pool(Vec::new());
        GaRunner::run(&target, &Alphabet::standard(), &config, &mut pool).unwrap();

        for window in pool.0.windows(2) {
            for child in &window[1] {
                assert!(window[0].contains(child));
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected_before_run() {
        let target = Target::new("HELLO").unwrap();
        let config = GaConfig::default().with_population_size(7);
        let mut recorder = Recorder::default();
        let err = GaRunner::run(&target, &Alphabet::standard(), &config, &mut recorder)
            .unwrap_err();

        assert_eq!(err, ConfigError::OddPopulation(7));
        assert!(recorder.generations.is_empty());
    }

    #[test]
    fn test_default_target_makes_progress() {
        let target = Target::default();
        let config = GaConfig::default()
            .with_population_size(100)
            .with_selection(Selection::Tournament)
            .with_mutation_rate(0.01)
            .with_max_generations(300)
            .with_display_interval(100)
            .with_seed(42);
        let result = GaRunner::run(&target, &Alphabet::standard(), &config, &mut ()).unwrap();

        let first = result.reports.first().unwrap().best.fitness();
        assert!(
            result.best.fitness() > first,
            "expected improvement: first={first}, final={}",
            result.best.fitness()
        );
    }
}
