//! Weekly class timetabling for the U-Engine ecosystem.
//!
//! Assigns (day, slot, room, teacher) to every required course-hour of
//! every student group. Hard constraints (no room, teacher, or group
//! double-booked in the same slot) hold for every candidate at all
//! times; a genetic algorithm minimizes soft penalties (room capacity,
//! teacher eligibility, gaps in a group's day).
//!
//! # Modules
//!
//! - **`models`**: Catalog entities (`Group`, `Teacher`, `Course`, `Room`)
//!   and the `Schedule` / `Entry` solution types
//! - **`validation`**: Catalog integrity checks (duplicate names, dangling references)
//! - **`ga`**: Builder, validator, fitness, operators, and the population engine
//! - **`scheduler`**: End-to-end front end and KPI report
//! - **`io`**: CSV catalog loading and schedule export
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::{GaConfig, GaEngine, SilentProgress};
//! use u_timetable::models::{Catalog, Course, Group, Room, Teacher};
//!
//! let catalog = Catalog::new(
//!     vec![Group::new("G1", 20)],
//!     vec![Teacher::new("Smith").with_course("Math")],
//!     vec![Course::new("Math", 2).with_group("G1")],
//!     vec![Room::new("R1", 30)],
//! );
//! let config = GaConfig::default().with_mutation_rate(0.5).with_seed(42);
//! let engine = GaEngine::new(&catalog, config.clone()).unwrap();
//! let result = engine.run(&mut config.make_rng(), &mut SilentProgress).unwrap();
//! assert!(result.converged);
//! ```

pub mod error;
pub mod ga;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TimetableError};
