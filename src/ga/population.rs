//! Ranked collection of scored schedules.
//!
//! Each individual owns its schedule outright; copies between
//! generations go through `Clone`, so no two individuals share entries.

use rand::Rng;

use super::constraints::is_feasible;
use super::fitness::FitnessEvaluator;
use crate::models::Schedule;

/// A schedule with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSchedule {
    pub schedule: Schedule,
    /// Fitness in (0, 1]; higher is better.
    pub fitness: f64,
}

impl ScoredSchedule {
    /// Scores `schedule` with `evaluator`.
    pub fn new(schedule: Schedule, evaluator: &FitnessEvaluator<'_>) -> Self {
        let fitness = evaluator.fitness(&schedule);
        Self { schedule, fitness }
    }

    /// Recomputes the cached fitness after the schedule changed.
    pub fn rescore(&mut self, evaluator: &FitnessEvaluator<'_>) {
        self.fitness = evaluator.fitness(&self.schedule);
    }

    #[inline]
    pub fn is_perfect(&self) -> bool {
        self.fitness == 1.0
    }
}

/// Fixed-size population kept in descending fitness order.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<ScoredSchedule>,
}

impl Population {
    /// Creates a population and ranks it.
    pub fn new(individuals: Vec<ScoredSchedule>) -> Self {
        let mut population = Self { individuals };
        population.sort_by_fitness();
        population
    }

    /// Stable sort, best first. Sorting twice gives the same order.
    pub fn sort_by_fitness(&mut self) {
        self.individuals
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Best individual, assuming the population is sorted.
    pub fn best(&self) -> Option<&ScoredSchedule> {
        self.individuals.first()
    }

    pub fn individuals(&self) -> &[ScoredSchedule] {
        &self.individuals
    }

    pub fn individuals_mut(&mut self) -> &mut [ScoredSchedule] {
        &mut self.individuals
    }

    /// Fitness of the first `k` individuals.
    pub fn top_fitness(&self, k: usize) -> Vec<f64> {
        self.individuals.iter().take(k).map(|s| s.fitness).collect()
    }

    /// Whether every individual satisfies all hard constraints.
    pub fn all_feasible(&self) -> bool {
        self.individuals.iter().all(|s| is_feasible(&s.schedule))
    }

    /// Picks the fittest of `size` individuals sampled without replacement.
    ///
    /// `size` is clamped to `[1, len]`. Returns `None` when empty.
    pub fn tournament<R: Rng>(&self, size: usize, rng: &mut R) -> Option<&ScoredSchedule> {
        if self.individuals.is_empty() {
            return None;
        }
        let size = size.clamp(1, self.individuals.len());
        rand::seq::index::sample(rng, self.individuals.len(), size)
            .iter()
            .map(|i| &self.individuals[i])
            .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
    }

    pub fn into_individuals(self) -> Vec<ScoredSchedule> {
        self.individuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Entry};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn scored(tag: &str, fitness: f64) -> ScoredSchedule {
        let mut schedule = Schedule::new();
        schedule.push(Entry::new(Day::Monday, 1, tag, "G1", "Math", "Smith"));
        ScoredSchedule { schedule, fitness }
    }

    fn sample_population() -> Population {
        Population::new(vec![
            scored("a", 0.25),
            scored("b", 1.0),
            scored("c", 0.5),
            scored("d", 0.5),
            scored("e", 0.2),
        ])
    }

    #[test]
    fn test_sorted_descending() {
        let p = sample_population();
        assert_eq!(p.top_fitness(5), vec![1.0, 0.5, 0.5, 0.25, 0.2]);
        assert_eq!(p.best().map(|b| b.schedule.entries[0].room.as_str()), Some("b"));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut p = sample_population();
        let once: Vec<_> = p.individuals().to_vec();
        p.sort_by_fitness();
        assert_eq!(p.individuals(), once.as_slice());
        // Ties keep their relative order
        assert_eq!(once[1].schedule.entries[0].room, "c");
        assert_eq!(once[2].schedule.entries[0].room, "d");
    }

    #[test]
    fn test_top_fitness_shorter_population() {
        let p = Population::new(vec![scored("a", 0.5)]);
        assert_eq!(p.top_fitness(3), vec![0.5]);
    }

    #[test]
    fn test_tournament_full_size_picks_best() {
        let p = sample_population();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..10 {
            let winner = p.tournament(5, &mut rng).unwrap();
            assert_eq!(winner.fitness, 1.0);
        }
    }

    #[test]
    fn test_tournament_size_one_is_uniform_pick() {
        let p = sample_population();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen_non_best = false;
        for _ in 0..50 {
            if p.tournament(1, &mut rng).unwrap().fitness < 1.0 {
                seen_non_best = true;
            }
        }
        assert!(seen_non_best);
    }

    #[test]
    fn test_tournament_empty() {
        let p = Population::default();
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(p.tournament(3, &mut rng).is_none());
    }

    #[test]
    fn test_all_feasible() {
        let mut p = sample_population();
        assert!(p.all_feasible());

        let extra = Entry::new(Day::Monday, 1, "z", "G1", "Physics", "Jones");
        p.individuals_mut()[0].schedule.push(extra);
        assert!(!p.all_feasible());
    }
}
