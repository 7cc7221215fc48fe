//! Schedule (solution) model.
//!
//! A schedule is an ordered list of entries, each placing one required
//! course-hour of one group at a (day, slot) with a room and a teacher.
//! Entries are plain values; schedules never share entry storage.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Teaching day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Day name as written in output tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Teaching days and slots available in one week.
///
/// Days are the first `days_per_week` of [`Day::ALL`]; slots are
/// numbered `1..=slots_per_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekGrid {
    days_per_week: u8,
    slots_per_day: u8,
}

impl WeekGrid {
    /// Creates a grid; `days_per_week` is capped at 5.
    pub fn new(days_per_week: u8, slots_per_day: u8) -> Self {
        Self {
            days_per_week: days_per_week.min(Day::ALL.len() as u8),
            slots_per_day,
        }
    }

    /// Teaching days in week order.
    pub fn days(&self) -> &'static [Day] {
        &Day::ALL[..self.days_per_week as usize]
    }

    pub fn slots_per_day(&self) -> u8 {
        self.slots_per_day
    }

    /// Number of (day, slot) pairs.
    pub fn weekly_slots(&self) -> usize {
        self.days_per_week as usize * self.slots_per_day as usize
    }
}

impl Default for WeekGrid {
    /// Monday to Friday, four slots a day.
    fn default() -> Self {
        Self::new(5, 4)
    }
}

/// One placed course-hour.
///
/// `group` and `course` are fixed at construction; `day`, `slot`, `room`
/// and `teacher` are rewritten by mutation and crossover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Teaching day.
    pub day: Day,
    /// Slot within the day (1-based).
    pub slot: u8,
    /// Room name.
    pub room: String,
    /// Student group name.
    pub group: String,
    /// Course name.
    pub course: String,
    /// Teacher name.
    pub teacher: String,
}

/// The movable part of an entry: where, when and by whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub day: Day,
    pub slot: u8,
    pub room: String,
    pub teacher: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(
        day: Day,
        slot: u8,
        room: impl Into<String>,
        group: impl Into<String>,
        course: impl Into<String>,
        teacher: impl Into<String>,
    ) -> Self {
        Self {
            day,
            slot,
            room: room.into(),
            group: group.into(),
            course: course.into(),
            teacher: teacher.into(),
        }
    }

    /// Time key used to bucket entries for conflict detection.
    #[inline]
    pub fn time_key(&self) -> (Day, u8) {
        (self.day, self.slot)
    }

    /// Copies out the movable fields.
    pub fn placement(&self) -> Placement {
        Placement {
            day: self.day,
            slot: self.slot,
            room: self.room.clone(),
            teacher: self.teacher.clone(),
        }
    }

    /// Overwrites the movable fields, returning the previous ones.
    pub fn replace_placement(&mut self, placement: Placement) -> Placement {
        Placement {
            day: std::mem::replace(&mut self.day, placement.day),
            slot: std::mem::replace(&mut self.slot, placement.slot),
            room: std::mem::replace(&mut self.room, placement.room),
            teacher: std::mem::replace(&mut self.teacher, placement.teacher),
        }
    }
}

/// A complete or partial timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Entries in construction order.
    pub entries: Vec<Entry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty schedule with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Removes and returns the last entry.
    pub fn pop(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Occupied slot numbers per (group, day), unsorted.
    pub fn group_day_slots(&self) -> HashMap<(&str, Day), Vec<u8>> {
        let mut slots: HashMap<(&str, Day), Vec<u8>> = HashMap::new();
        for e in &self.entries {
            slots.entry((e.group.as_str(), e.day)).or_default().push(e.slot);
        }
        slots
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
