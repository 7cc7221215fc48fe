//! Timetable scheduler front end and KPI evaluation.
//!
//! `TimetableScheduler` validates a catalog, runs the GA and reports
//! `TimetableKpi` quality metrics for the winning schedule.

mod kpi;
mod timetable;

pub use kpi::TimetableKpi;
pub use timetable::{TimetableScheduler, TimetableSolution};
