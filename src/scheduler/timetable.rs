//! End-to-end timetable scheduler.
//!
//! # Pipeline
//!
//! 1. Validate the catalog; fail fast on fatal issues, log the rest.
//! 2. Run the GA with the configured strategy and seed.
//! 3. Summarize the winning schedule as KPIs.

use tracing::{info, warn};

use super::kpi::TimetableKpi;
use crate::error::{Result, TimetableError};
use crate::ga::{GaConfig, GaEngine, GaResult, ProgressObserver};
use crate::models::{Catalog, Schedule};
use crate::validation::{catalog_warnings, validate_catalog};

/// Outcome of [`TimetableScheduler::solve`].
#[derive(Debug, Clone)]
pub struct TimetableSolution {
    /// Raw GA outcome, including per-generation history.
    pub result: GaResult,
    /// Quality report for `result.best`.
    pub kpi: TimetableKpi,
}

impl TimetableSolution {
    /// The winning schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.result.best
    }
}

/// Catalog-plus-config front end for the GA.
///
/// # Example
///
/// ```
/// use u_timetable::ga::{GaConfig, SilentProgress};
/// use u_timetable::models::{Catalog, Course, Group, Room, Teacher};
/// use u_timetable::scheduler::TimetableScheduler;
///
/// let catalog = Catalog::new(
///     vec![Group::new("G1", 2)],
///     vec![Teacher::new("Smith").with_course("Math")],
///     vec![Course::new("Math", 1).with_group("G1")],
///     vec![Room::new("R1", 10)],
/// );
/// let scheduler = TimetableScheduler::new(catalog, GaConfig::default().with_seed(42));
/// let solution = scheduler.solve(&mut SilentProgress).unwrap();
/// assert_eq!(solution.result.best_fitness, 1.0);
/// assert_eq!(solution.schedule().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableScheduler {
    catalog: Catalog,
    config: GaConfig,
}

impl TimetableScheduler {
    pub fn new(catalog: Catalog, config: GaConfig) -> Self {
        Self { catalog, config }
    }

    /// Validates the catalog, runs the search and reports KPIs.
    ///
    /// # Errors
    /// - [`TimetableError::InvalidCatalog`] on duplicate names, a course
    ///   without teachers, or no rooms.
    /// - [`TimetableError::InvalidConfig`] on out-of-range parameters.
    /// - [`TimetableError::PlacementInfeasible`] when construction or
    ///   mutation exhausts its attempts.
    pub fn solve<O: ProgressObserver>(&self, observer: &mut O) -> Result<TimetableSolution> {
        validate_catalog(&self.catalog).map_err(TimetableError::InvalidCatalog)?;
        for issue in catalog_warnings(&self.catalog) {
            warn!(kind = ?issue.kind, "{}", issue.message);
        }

        info!(
            groups = self.catalog.groups().len(),
            teachers = self.catalog.teachers().len(),
            courses = self.catalog.courses().len(),
            rooms = self.catalog.rooms().len(),
            required_hours = self.catalog.required_hours(),
            "catalog validated"
        );

        let engine = GaEngine::new(&self.catalog, self.config.clone())?;
        let mut rng = self.config.make_rng();
        let result = engine.run(&mut rng, observer)?;
        let kpi = TimetableKpi::calculate(&result.best, &self.catalog, self.config.grid());

        Ok(TimetableSolution { result, kpi })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{is_feasible, SilentProgress};
    use crate::models::{Course, Group, Room, Teacher};
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_solve_small_catalog() {
        let catalog = Catalog::new(
            vec![Group::new("G1", 20), Group::new("G2", 25)],
            vec![
                Teacher::new("Smith").with_course("Math"),
                Teacher::new("Jones").with_course("Physics"),
            ],
            vec![
                Course::new("Math", 2).with_group("G1").with_group("G2"),
                Course::new("Physics", 1).with_group("G1"),
            ],
            vec![Room::new("R1", 30), Room::new("R2", 30)],
        );
        let config = GaConfig::default()
            .with_population_size(10)
            .with_mutation_rate(0.4)
            .with_max_generations(1_000)
            .with_seed(42);
        let solution = TimetableScheduler::new(catalog, config)
            .solve(&mut SilentProgress)
            .unwrap();

        assert!(solution.result.converged);
        assert!(is_feasible(solution.schedule()));
        assert_eq!(solution.kpi.entry_count, 5);
        assert_eq!(solution.kpi.penalties.total(), 0);
    }

    #[test]
    fn test_solve_rejects_invalid_catalog() {
        let catalog = Catalog::new(
            vec![Group::new("G1", 20)],
            vec![],
            vec![Course::new("Math", 2).with_group("G1")],
            vec![Room::new("R1", 30)],
        );
        let err = TimetableScheduler::new(catalog, GaConfig::default())
            .solve(&mut SilentProgress)
            .unwrap_err();

        match err {
            TimetableError::InvalidCatalog(errors) => assert!(errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::NoEligibleTeacher)),
            other => panic!("expected InvalidCatalog, got {other:?}"),
        }
    }

    #[test]
    fn test_solve_tolerates_unused_catalog_rows() {
        let catalog = Catalog::new(
            vec![Group::new("G1", 2)],
            vec![Teacher::new("T1").with_course("C1").with_course("Art")],
            vec![
                Course::new("C1", 1).with_group("G1"),
                Course::new("C2", 0).with_group("G1"),
                Course::new("C3", 2).with_group("G9"),
            ],
            vec![Room::new("R1", 10)],
        );
        let solution = TimetableScheduler::new(catalog, GaConfig::default().with_seed(42))
            .solve(&mut SilentProgress)
            .unwrap();

        assert_eq!(solution.schedule().len(), 1);
        assert_eq!(solution.schedule().entries[0].course, "C1");
        assert_eq!(solution.result.best_fitness, 1.0);
    }
}
