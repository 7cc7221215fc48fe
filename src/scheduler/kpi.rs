//! Timetable quality metrics (KPIs).
//!
//! Summarizes a finished schedule against its catalog.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Entries | Number of placed course-hours |
//! | Penalties | Capacity, eligibility and fragmentation violation counts |
//! | Fitness | 1 / (total penalties + 1) |
//! | Room Utilization | Occupied slots / weekly slots, per room |
//! | Teacher Load | Weekly hours taught, per teacher |
//! | Longest Group Day | Most hours any group has on a single day |

use std::collections::HashMap;

use crate::ga::{FitnessEvaluator, Penalties};
use crate::models::{Catalog, Schedule, WeekGrid};

/// Schedule quality indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Placed course-hours.
    pub entry_count: usize,
    /// Soft-constraint violations by source.
    pub penalties: Penalties,
    /// Fitness in (0, 1].
    pub fitness: f64,
    /// Per-room utilization (0.0..1.0), every catalog room included.
    pub room_utilization: HashMap<String, f64>,
    /// Mean utilization over all rooms.
    pub avg_room_utilization: f64,
    /// Weekly hours per teacher, every catalog teacher included.
    pub teacher_load: HashMap<String, usize>,
    /// Most hours any group has on one day.
    pub max_group_day_hours: usize,
}

impl TimetableKpi {
    /// Computes KPIs for `schedule`.
    ///
    /// # Arguments
    /// * `schedule` - The finished schedule.
    /// * `catalog` - The catalog it was built from.
    /// * `grid` - The week grid searched, for utilization.
    pub fn calculate(schedule: &Schedule, catalog: &Catalog, grid: WeekGrid) -> Self {
        let penalties = FitnessEvaluator::new(catalog).penalties(schedule);
        let weekly_slots = grid.weekly_slots() as f64;

        let mut room_utilization: HashMap<String, f64> = catalog
            .rooms()
            .iter()
            .map(|r| (r.name.clone(), 0.0))
            .collect();
        let mut teacher_load: HashMap<String, usize> = catalog
            .teachers()
            .iter()
            .map(|t| (t.name.clone(), 0))
            .collect();

        for entry in schedule {
            if weekly_slots > 0.0 {
                *room_utilization.entry(entry.room.clone()).or_insert(0.0) += 1.0 / weekly_slots;
            }
            *teacher_load.entry(entry.teacher.clone()).or_insert(0) += 1;
        }

        let avg_room_utilization = if room_utilization.is_empty() {
            0.0
        } else {
            room_utilization.values().sum::<f64>() / room_utilization.len() as f64
        };

        let max_group_day_hours = schedule
            .group_day_slots()
            .values()
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        Self {
            entry_count: schedule.len(),
            penalties,
            fitness: penalties.fitness(),
            room_utilization,
            avg_room_utilization,
            teacher_load,
            max_group_day_hours,
        }
    }
}
