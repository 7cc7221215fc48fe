//! Hard-constraint validation.
//!
//! A schedule is feasible when no two entries sharing a (day, slot) use
//! the same room, the same teacher, or the same group. Entries are
//! bucketed by time key and every repeated name in a bucket counts as
//! one conflict.
//!
//! # Complexity
//! O(n) expected per call for n entries. The builder and mutation
//! re-run it on the whole schedule after every tentative change.

use std::collections::{HashMap, HashSet};

use crate::models::{Day, Entry, Schedule};

#[derive(Default)]
struct SlotOccupancy<'a> {
    rooms: HashSet<&'a str>,
    teachers: HashSet<&'a str>,
    groups: HashSet<&'a str>,
}

/// Counts hard-constraint conflicts among `entries`.
pub fn count_conflicts(entries: &[Entry]) -> usize {
    let mut table: HashMap<(Day, u8), SlotOccupancy<'_>> = HashMap::new();
    let mut conflicts = 0;

    for entry in entries {
        let slot = table.entry(entry.time_key()).or_default();
        if !slot.rooms.insert(&entry.room) {
            conflicts += 1;
        }
        if !slot.teachers.insert(&entry.teacher) {
            conflicts += 1;
        }
        if !slot.groups.insert(&entry.group) {
            conflicts += 1;
        }
    }

    conflicts
}

/// Whether `schedule` satisfies every hard constraint.
pub fn is_feasible(schedule: &Schedule) -> bool {
    count_conflicts(&schedule.entries) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schedule_is_feasible() {
        assert!(is_feasible(&Schedule::new()));
    }

    #[test]
    fn test_disjoint_entries_are_feasible() {
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "R1", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Monday, 1, "R2", "G2", "Physics", "Jones"));
        s.push(Entry::new(Day::Monday, 2, "R1", "G1", "Math", "Smith"));
        assert!(is_feasible(&s));
    }

    #[test]
    fn test_room_double_booking() {
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "R1", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Monday, 1, "R1", "G2", "Physics", "Jones"));
        assert_eq!(count_conflicts(&s.entries), 1);
        assert!(!is_feasible(&s));
    }

    #[test]
    fn test_teacher_double_booking() {
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Friday, 4, "R1", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Friday, 4, "R2", "G2", "Math", "Smith"));
        assert_eq!(count_conflicts(&s.entries), 1);
    }

    #[test]
    fn test_group_double_booking() {
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Tuesday, 2, "R1", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Tuesday, 2, "R2", "G1", "Physics", "Jones"));
        assert_eq!(count_conflicts(&s.entries), 1);
    }

    #[test]
    fn test_identical_entries_conflict_on_all_three() {
        let e = Entry::new(Day::Monday, 1, "R1", "G1", "Math", "Smith");
        assert_eq!(count_conflicts(&[e.clone(), e]), 3);
    }

    #[test]
    fn test_same_resources_on_different_days() {
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "R1", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Tuesday, 1, "R1", "G1", "Math", "Smith"));
        assert!(is_feasible(&s));
    }
}
