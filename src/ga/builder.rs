//! Randomized construction of hard-feasible schedules.
//!
//! # Algorithm
//!
//! For every group, for every course it is enrolled in, for every
//! required hour: draw a random (day, slot, room, eligible teacher),
//! append it, and keep it only if the whole schedule stays feasible.
//! Teachers are restricted to those eligible for the course; day, slot
//! and room are uniform.
//!
//! Draws are bounded by `max_attempts` per entry. Exhaustion yields
//! [`TimetableError::PlacementInfeasible`], which is how structurally
//! impossible catalogs (more simultaneous hours than slots x rooms, a
//! single teacher for too many hours, ...) surface.

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::constraints::is_feasible;
use crate::error::{Result, TimetableError};
use crate::models::{Catalog, Course, Entry, Group, Placement, Schedule, Teacher, WeekGrid};

/// Draws random placements over the week grid.
#[derive(Debug, Clone)]
pub struct PlacementSampler<'a> {
    rooms: Vec<&'a str>,
    grid: WeekGrid,
}

impl<'a> PlacementSampler<'a> {
    pub fn new(catalog: &'a Catalog, grid: WeekGrid) -> Self {
        Self {
            rooms: catalog.rooms().iter().map(|r| r.name.as_str()).collect(),
            grid,
        }
    }

    /// Draws a uniform (day, slot, room) and a teacher from `teachers`.
    ///
    /// Returns `None` if there are no rooms, no teachers, or an empty grid.
    pub fn sample<R: Rng>(&self, teachers: &[&Teacher], rng: &mut R) -> Option<Placement> {
        if self.grid.slots_per_day() == 0 {
            return None;
        }
        let day = *self.grid.days().choose(rng)?;
        let slot = rng.random_range(1..=self.grid.slots_per_day());
        let room = self.rooms.choose(rng)?;
        let teacher = teachers.choose(rng)?;
        Some(Placement {
            day,
            slot,
            room: room.to_string(),
            teacher: teacher.name.clone(),
        })
    }
}

/// Builds hard-feasible schedules for one catalog.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder<'a> {
    catalog: &'a Catalog,
    sampler: PlacementSampler<'a>,
    max_attempts: usize,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(catalog: &'a Catalog, grid: WeekGrid, max_attempts: usize) -> Self {
        Self {
            catalog,
            sampler: PlacementSampler::new(catalog, grid),
            max_attempts,
        }
    }

    /// Builds one complete schedule.
    ///
    /// # Errors
    /// - [`TimetableError::NoEligibleTeacher`] if an enrolled course has no teacher.
    /// - [`TimetableError::EmptyCatalog`] if hours must be placed but there are no rooms.
    /// - [`TimetableError::PlacementInfeasible`] if an hour cannot be placed
    ///   within `max_attempts` draws.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<Schedule> {
        let mut schedule = Schedule::with_capacity(self.catalog.required_hours());

        for group in self.catalog.groups() {
            for course in self.catalog.courses_for_group(&group.name) {
                if course.hours == 0 {
                    continue;
                }
                let teachers = self.catalog.eligible_teachers(&course.name);
                if teachers.is_empty() {
                    return Err(TimetableError::NoEligibleTeacher {
                        course: course.name.clone(),
                    });
                }
                for _ in 0..course.hours {
                    self.place(&mut schedule, group, course, &teachers, rng)?;
                }
            }
        }

        Ok(schedule)
    }

    fn place<R: Rng>(
        &self,
        schedule: &mut Schedule,
        group: &Group,
        course: &Course,
        teachers: &[&Teacher],
        rng: &mut R,
    ) -> Result<()> {
        for _ in 0..self.max_attempts {
            let p = self
                .sampler
                .sample(teachers, rng)
                .ok_or(TimetableError::EmptyCatalog("rooms"))?;
            schedule.push(Entry::new(
                p.day,
                p.slot,
                p.room,
                group.name.as_str(),
                course.name.as_str(),
                p.teacher,
            ));
            if is_feasible(schedule) {
                return Ok(());
            }
            schedule.pop();
        }

        Err(TimetableError::PlacementInfeasible {
            group: group.name.clone(),
            course: course.name.clone(),
            attempts: self.max_attempts,
        })
    }
}
