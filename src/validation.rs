//! Input validation for timetabling catalogs.
//!
//! Checks structural integrity of groups, teachers, courses, and rooms
//! before any search starts. Detects:
//! - Duplicate names within a catalog
//! - Courses enrolling unknown groups
//! - Teachers listing unknown courses
//! - Courses no teacher is eligible for
//! - Courses with zero weekly hours
//! - A missing room catalog when hours must be placed
//!
//! Only duplicates, missing teachers and missing rooms stop a run; see
//! [`ValidationErrorKind::is_fatal`]. The rest never place an entry and
//! are reported by [`catalog_warnings`].

use crate::models::Catalog;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities in one catalog share the same name.
    DuplicateName,
    /// A course enrolls a group that doesn't exist.
    UnknownGroup,
    /// A teacher lists a course that doesn't exist.
    UnknownCourse,
    /// A course has enrolled groups but no eligible teacher.
    NoEligibleTeacher,
    /// A course requires zero hours.
    ZeroHours,
    /// Hours must be placed but there are no rooms.
    NoRooms,
}

impl ValidationErrorKind {
    /// Whether the issue makes a complete schedule impossible to build.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ValidationErrorKind::DuplicateName
                | ValidationErrorKind::NoEligibleTeacher
                | ValidationErrorKind::NoRooms
        )
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_duplicates<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate {kind} name: {name}"),
            ));
        }
    }
    seen
}

fn collect_issues(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let group_names = check_duplicates(
        "group",
        catalog.groups().iter().map(|g| g.name.as_str()),
        &mut errors,
    );
    check_duplicates(
        "teacher",
        catalog.teachers().iter().map(|t| t.name.as_str()),
        &mut errors,
    );
    check_duplicates(
        "course",
        catalog.courses().iter().map(|c| c.name.as_str()),
        &mut errors,
    );
    check_duplicates(
        "room",
        catalog.rooms().iter().map(|r| r.name.as_str()),
        &mut errors,
    );

    for course in catalog.courses() {
        for group in &course.groups {
            if !group_names.contains(group.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownGroup,
                    format!("Course '{}' enrolls unknown group '{}'", course.name, group),
                ));
            }
        }

        if course.hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroHours,
                format!("Course '{}' requires zero hours", course.name),
            ));
        }

        let placed = course.hours > 0
            && course.groups.iter().any(|g| group_names.contains(g.as_str()));
        if placed && catalog.eligible_teachers(&course.name).is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoEligibleTeacher,
                format!("No teacher is eligible for course '{}'", course.name),
            ));
        }
    }

    for teacher in catalog.teachers() {
        for course in &teacher.courses {
            if catalog.course(course).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourse,
                    format!(
                        "Teacher '{}' lists unknown course '{}'",
                        teacher.name, course
                    ),
                ));
            }
        }
    }

    if catalog.rooms().is_empty() && catalog.required_hours() > 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRooms,
            "Room catalog is empty but course hours must be placed",
        ));
    }

    errors
}

/// Validates the catalogs of a timetabling problem.
///
/// # Returns
/// `Ok(())` if no fatal issue is found, `Err(errors)` with every fatal issue.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let errors: Vec<_> = collect_issues(catalog)
        .into_iter()
        .filter(|e| e.kind.is_fatal())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Non-fatal issues: references and requirements that place nothing.
pub fn catalog_warnings(catalog: &Catalog) -> Vec<ValidationError> {
    collect_issues(catalog)
        .into_iter()
        .filter(|e| !e.kind.is_fatal())
        .collect()
}
