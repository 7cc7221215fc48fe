//! Entity catalogs: groups, teachers, courses, rooms.
//!
//! Catalogs are loaded once and stay immutable for a whole run. The
//! [`Catalog`] bundles all four and keeps name indexes for the lookups
//! the fitness evaluator performs per entry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A student group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group name.
    pub name: String,
    /// Number of students attending together.
    pub num_students: u32,
}

/// A teacher and the courses they may teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher name.
    pub name: String,
    /// Names of courses this teacher is eligible for.
    pub courses: Vec<String>,
}

/// A course with its weekly load and enrolled groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course name.
    pub name: String,
    /// Required hours per week, per enrolled group.
    pub hours: u32,
    /// Names of enrolled groups.
    pub groups: Vec<String>,
}

/// A room with seating capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Seats available.
    pub capacity: u32,
}

impl Group {
    pub fn new(name: impl Into<String>, num_students: u32) -> Self {
        Self {
            name: name.into(),
            num_students,
        }
    }
}

impl Teacher {
    /// Creates a teacher with no eligible courses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Adds an eligible course.
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.courses.push(course.into());
        self
    }

    /// Whether this teacher may teach `course`.
    pub fn can_teach(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }
}

impl Course {
    /// Creates a course with no enrolled groups.
    pub fn new(name: impl Into<String>, hours: u32) -> Self {
        Self {
            name: name.into(),
            hours,
            groups: Vec::new(),
        }
    }

    /// Enrolls a group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Whether `group` is enrolled.
    pub fn enrolls(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

impl Room {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// The four entity catalogs of one timetabling problem.
///
/// Lookups by name resolve to the first row with that name; duplicates
/// are reported by [`crate::validation::validate_catalog`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<Group>,
    teachers: Vec<Teacher>,
    courses: Vec<Course>,
    rooms: Vec<Room>,
    group_index: HashMap<String, usize>,
    teacher_index: HashMap<String, usize>,
    course_index: HashMap<String, usize>,
    room_index: HashMap<String, usize>,
}

fn index_by_name<T>(items: &[T], name: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index.entry(name(item).to_string()).or_insert(i);
    }
    index
}

impl Catalog {
    /// Builds a catalog and its name indexes.
    pub fn new(
        groups: Vec<Group>,
        teachers: Vec<Teacher>,
        courses: Vec<Course>,
        rooms: Vec<Room>,
    ) -> Self {
        Self {
            group_index: index_by_name(&groups, |g| &g.name),
            teacher_index: index_by_name(&teachers, |t| &t.name),
            course_index: index_by_name(&courses, |c| &c.name),
            room_index: index_by_name(&rooms, |r| &r.name),
            groups,
            teachers,
            courses,
            rooms,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.group_index.get(name).map(|&i| &self.groups[i])
    }

    pub fn teacher(&self, name: &str) -> Option<&Teacher> {
        self.teacher_index.get(name).map(|&i| &self.teachers[i])
    }

    pub fn course(&self, name: &str) -> Option<&Course> {
        self.course_index.get(name).map(|&i| &self.courses[i])
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.room_index.get(name).map(|&i| &self.rooms[i])
    }

    /// Courses a group is enrolled in, in catalog order.
    pub fn courses_for_group(&self, group: &str) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.enrolls(group)).collect()
    }

    /// Teachers eligible for a course, in catalog order.
    pub fn eligible_teachers(&self, course: &str) -> Vec<&Teacher> {
        self.teachers.iter().filter(|t| t.can_teach(course)).collect()
    }

    /// Total number of entries a complete schedule holds.
    ///
    /// Sum over (group, enrolled course) pairs of the course's hours.
    pub fn required_hours(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| self.courses_for_group(&g.name))
            .map(|c| c.hours as usize)
            .sum()
    }
}
