//! Timetabling domain models.
//!
//! Provides the entity catalogs a timetable is built from and the
//! schedule type the search produces.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | University | Training Center |
//! |-------------|--------|------------|-----------------|
//! | Group | Class | Cohort | Course Batch |
//! | Teacher | Teacher | Lecturer | Trainer |
//! | Course | Subject | Module | Program Unit |
//! | Room | Classroom | Lecture Hall | Lab |

mod catalog;
mod schedule;

pub use catalog::{Catalog, Course, Group, Room, Teacher};
pub use schedule::{Day, Entry, Placement, Schedule, WeekGrid};
