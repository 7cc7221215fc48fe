//! Generational search over hard-feasible schedules.
//!
//! # Generation
//!
//! 1. Mutate every individual in place and rescore it.
//! 2. Rank the population, best first.
//! 3. Form the next population with the configured [`SelectionStrategy`].
//! 4. Rank again and report the top-3 fitness values.
//!
//! The search stops once the best individual reaches fitness 1, or
//! when `max_generations` is set and reached. Every individual must be
//! hard-feasible at the start of every generation.

use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::builder::ScheduleBuilder;
use super::config::{GaConfig, SelectionStrategy};
use super::fitness::FitnessEvaluator;
use super::operators::GeneticOperators;
use super::population::{Population, ScoredSchedule};
use crate::error::{Result, TimetableError};
use crate::models::{Catalog, Schedule};

/// Number of leading fitness values carried in each report.
pub const REPORTED_TOP: usize = 3;

/// Progress record emitted after each generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    /// Fitness of the best individuals, best first (at most 3).
    pub top_fitness: Vec<f64>,
}

/// Receives a [`GenerationReport`] after every generation.
pub trait ProgressObserver {
    fn on_generation(&mut self, report: &GenerationReport);
}

impl<F: FnMut(&GenerationReport)> ProgressObserver for F {
    fn on_generation(&mut self, report: &GenerationReport) {
        self(report)
    }
}

/// Observer that ignores all reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn on_generation(&mut self, _report: &GenerationReport) {}
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best schedule of the final population.
    pub best: Schedule,
    /// Its fitness.
    pub best_fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// Whether a perfect schedule was found.
    pub converged: bool,
    /// One report per generation.
    pub history: Vec<GenerationReport>,
}

/// Population engine for one catalog and configuration.
#[derive(Debug, Clone)]
pub struct GaEngine<'a> {
    config: GaConfig,
    evaluator: FitnessEvaluator<'a>,
    builder: ScheduleBuilder<'a>,
    operators: GeneticOperators<'a>,
}

impl<'a> GaEngine<'a> {
    /// Creates an engine after validating `config`.
    pub fn new(catalog: &'a Catalog, config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            evaluator: FitnessEvaluator::new(catalog),
            builder: ScheduleBuilder::new(
                catalog,
                config.grid(),
                config.max_placement_attempts,
            ),
            operators: GeneticOperators::new(
                catalog,
                config.grid(),
                config.max_placement_attempts,
            ),
            config,
        })
    }

    /// Builds `population_size` independent schedules and ranks them.
    pub fn seed<R: Rng>(&self, rng: &mut R) -> Result<Population> {
        let individuals = (0..self.config.population_size)
            .map(|_| {
                self.builder
                    .build(rng)
                    .map(|s| ScoredSchedule::new(s, &self.evaluator))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Population::new(individuals))
    }

    /// Runs one generation: mutate, rank, select, rank.
    pub fn evolve<R: Rng>(&self, population: Population, rng: &mut R) -> Result<Population> {
        let mut individuals = population.into_individuals();
        for individual in &mut individuals {
            self.operators
                .mutate(&mut individual.schedule, self.config.mutation_rate, rng)?;
            individual.rescore(&self.evaluator);
        }
        let ranked = Population::new(individuals);

        let next = match self.config.strategy {
            SelectionStrategy::ElitistCollapse => self.collapse(&ranked),
            SelectionStrategy::Tournament => self.tournament_generation(&ranked, rng),
        };
        Ok(Population::new(next))
    }

    fn collapse(&self, ranked: &Population) -> Vec<ScoredSchedule> {
        match ranked.best() {
            Some(best) => vec![best.clone(); self.config.population_size],
            None => Vec::new(),
        }
    }

    fn tournament_generation<R: Rng>(&self, ranked: &Population, rng: &mut R) -> Vec<ScoredSchedule> {
        let size = self.config.population_size;
        let mut next: Vec<ScoredSchedule> = ranked
            .individuals()
            .iter()
            .take(self.config.elite_size)
            .cloned()
            .collect();
        let mut offspring = 0usize;

        while next.len() < size {
            let Some(first) = ranked.tournament(self.config.tournament_size, rng) else {
                break;
            };
            if rng.random_bool(self.config.crossover_rate) {
                if let Some(second) = ranked.tournament(self.config.tournament_size, rng) {
                    let child = self
                        .operators
                        .crossover(&first.schedule, &second.schedule, rng);
                    next.push(ScoredSchedule::new(child, &self.evaluator));
                    offspring += 1;
                    continue;
                }
            }
            next.push(first.clone());
        }

        debug!(
            elite = self.config.elite_size.min(ranked.len()),
            offspring,
            "tournament selection"
        );
        next
    }

    /// Seeds a population and evolves it until termination.
    pub fn run<R: Rng, O: ProgressObserver>(&self, rng: &mut R, observer: &mut O) -> Result<GaResult> {
        let started = Instant::now();
        info!(
            event = "search_start",
            population_size = self.config.population_size,
            strategy = ?self.config.strategy,
            mutation_rate = self.config.mutation_rate,
        );

        let mut population = self.seed(rng)?;
        let mut history = Vec::new();
        let mut generation = 0usize;

        let converged = loop {
            let best = population
                .best()
                .ok_or_else(|| TimetableError::InvalidConfig("population is empty".into()))?;
            if best.is_perfect() {
                break true;
            }
            if self
                .config
                .max_generations
                .is_some_and(|max| generation >= max)
            {
                warn!(
                    generations = generation,
                    best_fitness = best.fitness,
                    "generation limit reached without a perfect schedule"
                );
                break false;
            }
            if !population.all_feasible() {
                return Err(TimetableError::InfeasibleIndividual { generation });
            }

            generation += 1;
            population = self.evolve(population, rng)?;

            let report = GenerationReport {
                generation,
                top_fitness: population.top_fitness(REPORTED_TOP),
            };
            info!(
                event = "generation",
                generation,
                best_fitness = report.top_fitness.first().copied().unwrap_or(0.0),
            );
            observer.on_generation(&report);
            history.push(report);
        };

        let best = population
            .into_individuals()
            .into_iter()
            .next()
            .ok_or_else(|| TimetableError::InvalidConfig("population is empty".into()))?;

        info!(
            event = "search_end",
            generations = generation,
            converged,
            best_fitness = best.fitness,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(GaResult {
            best: best.schedule,
            best_fitness: best.fitness,
            generations: generation,
            converged,
            history,
        })
    }
}
