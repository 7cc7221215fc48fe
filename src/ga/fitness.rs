//! Soft-constraint fitness evaluation.
//!
//! # Penalties
//!
//! | Source | One penalty per |
//! |--------|-----------------|
//! | Room capacity | entry whose group outnumbers its room's seats |
//! | Teacher eligibility | entry whose teacher may not teach its course |
//! | Daily fragmentation | gap between consecutive occupied slots of a group's day |
//!
//! Fitness is `1 / (penalties + 1)`: in (0, 1], exactly 1 iff no
//! penalties. It is not normalized by schedule length.
//!
//! Each occupied slot is counted once when looking for gaps.

use crate::models::{Catalog, Schedule};

/// Soft-constraint violation counts of one schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Penalties {
    /// Group size exceeds room capacity.
    pub capacity: usize,
    /// Teacher not eligible for the course.
    pub eligibility: usize,
    /// Gaps inside a group's teaching day.
    pub fragmentation: usize,
}

impl Penalties {
    /// Sum of all penalty sources.
    #[inline]
    pub fn total(&self) -> usize {
        self.capacity + self.eligibility + self.fragmentation
    }

    /// Fitness score derived from the penalty total.
    #[inline]
    pub fn fitness(&self) -> f64 {
        1.0 / (self.total() as f64 + 1.0)
    }
}

/// Scores schedules against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Counts soft-constraint violations.
    ///
    /// An entry naming an unknown group or room counts as a capacity
    /// violation; an unknown teacher counts as an eligibility violation.
    pub fn penalties(&self, schedule: &Schedule) -> Penalties {
        let mut penalties = Penalties::default();

        for entry in schedule {
            let students = self.catalog.group(&entry.group).map(|g| g.num_students);
            let seats = self.catalog.room(&entry.room).map(|r| r.capacity);
            match (students, seats) {
                (Some(students), Some(seats)) if students <= seats => {}
                _ => penalties.capacity += 1,
            }

            let eligible = self
                .catalog
                .teacher(&entry.teacher)
                .is_some_and(|t| t.can_teach(&entry.course));
            if !eligible {
                penalties.eligibility += 1;
            }
        }

        penalties.fragmentation = fragmentation_gaps(schedule);
        penalties
    }

    /// Fitness in (0, 1]; higher is better.
    pub fn fitness(&self, schedule: &Schedule) -> f64 {
        self.penalties(schedule).fitness()
    }
}

/// Counts gaps between consecutive occupied slots per (group, day).
pub fn fragmentation_gaps(schedule: &Schedule) -> usize {
    schedule
        .group_day_slots()
        .into_values()
        .map(|mut slots| {
            slots.sort_unstable();
            slots.windows(2).filter(|w| w[1] - w[0] > 1).count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Day, Entry, Group, Room, Teacher};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Group::new("G1", 20), Group::new("G2", 40)],
            vec![
                Teacher::new("Smith").with_course("Math"),
                Teacher::new("Jones").with_course("Physics"),
            ],
            vec![
                Course::new("Math", 2).with_group("G1").with_group("G2"),
                Course::new("Physics", 1).with_group("G1"),
            ],
            vec![Room::new("Small", 25), Room::new("Large", 50)],
        )
    }

    #[test]
    fn test_perfect_schedule() {
        let c = catalog();
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "Small", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Monday, 2, "Small", "G1", "Physics", "Jones"));
        s.push(Entry::new(Day::Monday, 1, "Large", "G2", "Math", "Jones"));
        // Jones cannot teach Math
        let eval = FitnessEvaluator::new(&c);
        assert_eq!(eval.penalties(&s).eligibility, 1);

        s.entries[2].teacher = "Smith".into();
        s.entries[2].slot = 3;
        assert_eq!(eval.penalties(&s), Penalties::default());
        assert_eq!(eval.fitness(&s), 1.0);
    }

    #[test]
    fn test_capacity_penalty() {
        let c = catalog();
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "Small", "G2", "Math", "Smith"));
        let p = FitnessEvaluator::new(&c).penalties(&s);
        assert_eq!(p.capacity, 1);
        assert_eq!(p.total(), 1);
        assert!((p.fitness() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_capacity_equal_to_group_size_is_fine() {
        let c = Catalog::new(
            vec![Group::new("G1", 25)],
            vec![Teacher::new("Smith").with_course("Math")],
            vec![Course::new("Math", 1).with_group("G1")],
            vec![Room::new("Small", 25)],
        );
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "Small", "G1", "Math", "Smith"));
        assert_eq!(FitnessEvaluator::new(&c).fitness(&s), 1.0);
    }

    #[test]
    fn test_fragmentation_gaps() {
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "Small", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Monday, 4, "Small", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Monday, 2, "Small", "G1", "Physics", "Jones"));
        // G1 Monday: 1,2,4 -> one gap
        assert_eq!(fragmentation_gaps(&s), 1);

        s.push(Entry::new(Day::Tuesday, 1, "Large", "G2", "Math", "Smith"));
        s.push(Entry::new(Day::Tuesday, 3, "Large", "G2", "Math", "Smith"));
        assert_eq!(fragmentation_gaps(&s), 2);
    }

    #[test]
    fn test_single_entry_day_has_no_gap() {
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 4, "Small", "G1", "Math", "Smith"));
        s.push(Entry::new(Day::Friday, 1, "Small", "G1", "Math", "Smith"));
        assert_eq!(fragmentation_gaps(&s), 0);
    }

    #[test]
    fn test_unknown_references_are_penalized() {
        let c = catalog();
        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "Attic", "G1", "Math", "Nobody"));
        let p = FitnessEvaluator::new(&c).penalties(&s);
        assert_eq!(p.capacity, 1);
        assert_eq!(p.eligibility, 1);
    }

    #[test]
    fn test_fitness_is_one_iff_no_penalties() {
        let c = catalog();
        let eval = FitnessEvaluator::new(&c);
        assert_eq!(eval.fitness(&Schedule::new()), 1.0);

        let mut s = Schedule::new();
        s.push(Entry::new(Day::Monday, 1, "Small", "G2", "Physics", "Smith"));
        let f = eval.fitness(&s);
        assert!(f > 0.0 && f < 1.0);
        assert!((f - 1.0 / 3.0).abs() < 1e-12);
    }
}
