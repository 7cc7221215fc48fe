//! GA-based timetable optimization.
//!
//! Every individual is a complete [`Schedule`](crate::models::Schedule)
//! that satisfies all hard constraints at all times; the search only
//! trades off soft penalties.
//!
//! # Submodules
//!
//! - [`constraints`]: hard-constraint validator (room / teacher / group clashes)
//! - [`fitness`]: soft-constraint penalties and the `1 / (p + 1)` score
//! - [`builder`]: randomized bounded-retry construction
//! - [`operators`]: feasibility-preserving mutation and crossover
//! - [`population`]: ranking and tournament selection
//! - [`engine`]: the generational loop
//! - [`config`]: run parameters and strategy selection

pub mod builder;
pub mod config;
pub mod constraints;
pub mod engine;
pub mod fitness;
pub mod operators;
pub mod population;

pub use builder::{PlacementSampler, ScheduleBuilder};
pub use config::{GaConfig, SelectionStrategy};
pub use constraints::{count_conflicts, is_feasible};
pub use engine::{GaEngine, GaResult, GenerationReport, ProgressObserver, SilentProgress};
pub use fitness::{FitnessEvaluator, Penalties};
pub use operators::GeneticOperators;
pub use population::{Population, ScoredSchedule};
