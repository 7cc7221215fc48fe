//! Error types for timetable construction and search.

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for timetabling operations.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// I/O failure while writing results or reading the config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file could not be opened.
    #[error("Cannot open {file}: {source}")]
    CatalogFile {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is malformed (missing column, non-numeric value, ...).
    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration file could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog integrity checks failed.
    #[error("Invalid catalog: {} issue(s), first: {}", .0.len(), first_message(.0))]
    InvalidCatalog(Vec<ValidationError>),

    /// A catalog required for placement has no rows.
    #[error("Catalog '{0}' is empty")]
    EmptyCatalog(&'static str),

    /// No teacher is eligible for a course that must be placed.
    #[error("No eligible teacher for course '{course}'")]
    NoEligibleTeacher { course: String },

    /// Bounded placement search exhausted its attempts.
    #[error("No feasible placement found for group '{group}', course '{course}' after {attempts} attempts")]
    PlacementInfeasible {
        group: String,
        course: String,
        attempts: usize,
    },

    /// A population member violates a hard constraint.
    #[error("Hard constraint violated in population at generation {generation}")]
    InfeasibleIndividual { generation: usize },

    /// Refused to write a schedule without entries.
    #[error("Schedule has no entries")]
    EmptySchedule,
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("")
}

/// Result type alias for timetabling operations.
pub type Result<T> = std::result::Result<T, TimetableError>;
