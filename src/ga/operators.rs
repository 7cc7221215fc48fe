//! Feasibility-preserving genetic operators for timetables.
//!
//! Every operator leaves a hard-feasible schedule hard-feasible: a
//! change is kept only if the whole schedule still validates, and is
//! rolled back otherwise.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_timetable::ga::{is_feasible, GeneticOperators, ScheduleBuilder};
//! use u_timetable::models::{Catalog, Course, Group, Room, Teacher, WeekGrid};
//!
//! let catalog = Catalog::new(
//!     vec![Group::new("G1", 20)],
//!     vec![Teacher::new("Smith").with_course("Math")],
//!     vec![Course::new("Math", 4).with_group("G1")],
//!     vec![Room::new("R1", 30), Room::new("R2", 30)],
//! );
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut schedule = ScheduleBuilder::new(&catalog, WeekGrid::new(5, 4), 1_000).build(&mut rng).unwrap();
//!
//! let ops = GeneticOperators::new(&catalog, WeekGrid::new(5, 4), 1_000);
//! ops.mutate(&mut schedule, 0.5, &mut rng).unwrap();
//! assert!(is_feasible(&schedule));
//! ```

use rand::Rng;

use super::builder::PlacementSampler;
use super::constraints::is_feasible;
use crate::error::{Result, TimetableError};
use crate::models::{Catalog, Schedule, WeekGrid};

/// Mutation and crossover bound to one catalog and week grid.
#[derive(Debug, Clone)]
pub struct GeneticOperators<'a> {
    catalog: &'a Catalog,
    sampler: PlacementSampler<'a>,
    max_attempts: usize,
}

impl<'a> GeneticOperators<'a> {
    pub fn new(catalog: &'a Catalog, grid: WeekGrid, max_attempts: usize) -> Self {
        Self {
            catalog,
            sampler: PlacementSampler::new(catalog, grid),
            max_attempts,
        }
    }

    /// Re-places `floor(len * rate)` distinct entries in place.
    ///
    /// Each selected entry gets a fresh random day, slot, room and
    /// eligible teacher; group and course stay. A draw is kept only if
    /// the schedule stays feasible. `rate` is clamped to `[0, 1]`.
    ///
    /// Returns the number of entries moved.
    ///
    /// # Errors
    /// [`TimetableError::PlacementInfeasible`] if an entry finds no feasible
    /// spot within `max_attempts` draws. That entry keeps its prior
    /// placement; entries moved before it stay moved.
    pub fn mutate<R: Rng>(&self, schedule: &mut Schedule, rate: f64, rng: &mut R) -> Result<usize> {
        let rate = rate.clamp(0.0, 1.0);
        let amount = (schedule.len() as f64 * rate).floor() as usize;
        let picked = rand::seq::index::sample(rng, schedule.len(), amount);

        for idx in picked.iter() {
            self.relocate(schedule, idx, rng)?;
        }
        Ok(amount)
    }

    fn relocate<R: Rng>(&self, schedule: &mut Schedule, idx: usize, rng: &mut R) -> Result<()> {
        let course = schedule.entries[idx].course.clone();
        let teachers = self.catalog.eligible_teachers(&course);
        if teachers.is_empty() {
            return Err(TimetableError::NoEligibleTeacher { course });
        }

        for _ in 0..self.max_attempts {
            let placement = self
                .sampler
                .sample(&teachers, rng)
                .ok_or(TimetableError::EmptyCatalog("rooms"))?;
            let previous = schedule.entries[idx].replace_placement(placement);
            if is_feasible(schedule) {
                return Ok(());
            }
            schedule.entries[idx].replace_placement(previous);
        }

        Err(TimetableError::PlacementInfeasible {
            group: schedule.entries[idx].group.clone(),
            course,
            attempts: self.max_attempts,
        })
    }

    /// Uniform crossover that never breaks feasibility.
    ///
    /// Starts from a copy of `primary`; for each entry index, with
    /// probability 1/2, adopts `secondary`'s placement for the same
    /// (group, course) requirement and keeps it only if the child stays
    /// feasible. Indices whose group or course differ are skipped.
    pub fn crossover<R: Rng>(&self, primary: &Schedule, secondary: &Schedule, rng: &mut R) -> Schedule {
        let mut child = primary.clone();

        for (idx, donor) in secondary.iter().enumerate().take(child.len()) {
            let entry = &child.entries[idx];
            if entry.group != donor.group || entry.course != donor.course {
                continue;
            }
            if entry.placement() == donor.placement() || !rng.random_bool(0.5) {
                continue;
            }
            let previous = child.entries[idx].replace_placement(donor.placement());
            if !is_feasible(&child) {
                child.entries[idx].replace_placement(previous);
            }
        }

        child
    }
}
