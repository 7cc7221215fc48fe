//! GA run configuration.
//!
//! # Examples
//!
//! ```
//! use u_timetable::ga::{GaConfig, SelectionStrategy};
//!
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_mutation_rate(0.2)
//!     .with_strategy(SelectionStrategy::Tournament)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Loading from TOML, missing keys fall back to defaults:
//!
//! ```
//! use u_timetable::ga::{GaConfig, SelectionStrategy};
//!
//! let config = GaConfig::from_toml_str(r#"
//!     population_size = 10
//!     strategy = "tournament"
//! "#).unwrap();
//! assert_eq!(config.population_size, 10);
//! assert_eq!(config.strategy, SelectionStrategy::Tournament);
//! assert_eq!(config.slots_per_day, 4);
//! assert_eq!(config.grid().weekly_slots(), 20);
//! ```

use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};
use crate::models::{Day, WeekGrid};

/// How the next generation is formed from the ranked population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Replace the whole population with copies of the best individual.
    #[default]
    ElitistCollapse,
    /// Keep the elite, fill the rest with tournament winners and
    /// feasibility-preserving crossover offspring.
    Tournament,
}

/// Configuration for the timetabling GA.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of schedules per generation.
    pub population_size: usize,

    /// Fraction of entries re-placed per schedule per generation.
    pub mutation_rate: f64,

    /// Next-generation policy.
    pub strategy: SelectionStrategy,

    /// Individuals carried over unchanged (`Tournament` only).
    pub elite_size: usize,

    /// Individuals sampled per tournament (`Tournament` only).
    pub tournament_size: usize,

    /// Probability a tournament winner is crossed with a second winner.
    pub crossover_rate: f64,

    /// Teaching days per week, counted from Monday.
    pub days_per_week: u8,

    /// Teaching slots per day; slots are numbered `1..=slots_per_day`.
    pub slots_per_day: u8,

    /// Random draws per entry before placement is declared infeasible.
    pub max_placement_attempts: usize,

    /// Generation cap; `None` runs until a perfect schedule is found.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: 0.1,
            strategy: SelectionStrategy::ElitistCollapse,
            elite_size: 2,
            tournament_size: 10,
            crossover_rate: 0.5,
            days_per_week: 5,
            slots_per_day: 4,
            max_placement_attempts: 10_000,
            max_generations: None,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    pub fn with_tournament_size(mut self, n: usize) -> Self {
        self.tournament_size = n;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_days_per_week(mut self, days: u8) -> Self {
        self.days_per_week = days;
        self
    }

    pub fn with_slots_per_day(mut self, slots: u8) -> Self {
        self.slots_per_day = slots;
        self
    }

    pub fn with_max_placement_attempts(mut self, n: usize) -> Self {
        self.max_placement_attempts = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Week grid the search places entries on.
    pub fn grid(&self) -> WeekGrid {
        WeekGrid::new(self.days_per_week, self.slots_per_day)
    }

    /// Random source for a run: seeded when `seed` is set.
    pub fn make_rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(TimetableError::InvalidConfig(msg));

        if self.population_size == 0 {
            return invalid("population_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid(format!(
                "mutation_rate ({}) must be within [0, 1]",
                self.mutation_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return invalid(format!(
                "crossover_rate ({}) must be within [0, 1]",
                self.crossover_rate
            ));
        }
        if self.days_per_week == 0 || self.days_per_week as usize > Day::ALL.len() {
            return invalid(format!(
                "days_per_week ({}) must be within [1, {}]",
                self.days_per_week,
                Day::ALL.len()
            ));
        }
        if self.slots_per_day == 0 {
            return invalid("slots_per_day must be at least 1".into());
        }
        if self.max_placement_attempts == 0 {
            return invalid("max_placement_attempts must be at least 1".into());
        }
        if self.strategy == SelectionStrategy::Tournament {
            if self.elite_size > self.population_size {
                return invalid(format!(
                    "elite_size ({}) exceeds population_size ({})",
                    self.elite_size, self.population_size
                ));
            }
            if self.tournament_size == 0 || self.tournament_size > self.population_size {
                return invalid(format!(
                    "tournament_size ({}) must be within [1, population_size]",
                    self.tournament_size
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 20);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.elite_size, 2);
        assert_eq!(config.tournament_size, 10);
        assert_eq!(config.strategy, SelectionStrategy::ElitistCollapse);
        assert_eq!(config.max_generations, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_mutation_rate() {
        assert!(GaConfig::default().with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(-0.1).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_grid() {
        assert!(GaConfig::default().with_days_per_week(0).validate().is_err());
        assert!(GaConfig::default().with_days_per_week(6).validate().is_err());
        assert!(GaConfig::default().with_slots_per_day(0).validate().is_err());

        let config = GaConfig::default().with_days_per_week(3).with_slots_per_day(6);
        assert!(config.validate().is_ok());
        assert_eq!(config.grid().days().len(), 3);
        assert_eq!(config.grid().weekly_slots(), 18);
    }

    #[test]
    fn test_validate_tournament_sizes() {
        let config = GaConfig::default()
            .with_strategy(SelectionStrategy::Tournament)
            .with_population_size(5)
            .with_tournament_size(10);
        assert!(config.validate().is_err());

        // Tournament settings are ignored by the collapse strategy
        let config = GaConfig::default()
            .with_population_size(5)
            .with_tournament_size(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = GaConfig::from_toml_str(
            r#"
            population_size = 8
            mutation_rate = 0.25
            strategy = "elitist_collapse"
            max_generations = 100
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.population_size, 8);
        assert_eq!(config.max_generations, Some(100));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tournament_size, 10);
    }

    #[test]
    fn test_from_toml_rejects_unknown_strategy() {
        let err = GaConfig::from_toml_str("strategy = \"roulette\"").unwrap_err();
        assert!(matches!(err, TimetableError::Toml(_)));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GaConfig::default().with_seed(42);
        let a: u64 = config.make_rng().random();
        let b: u64 = config.make_rng().random();
        assert_eq!(a, b);
    }
}
