//! Group of students and its in-place sorts.
//!
//! # Responsibility
//! - Own an ordered sequence of students independent of the caller's copy.
//! - Reorder that sequence by age, skill, or both.
//!
//! # Invariants
//! - Sorts are stable and only permute elements; nothing is added or lost.
//! - `reverse = true` flips the key order but keeps ties in input order.
//! - Ages are recomputed on every sort call from one clock reading.

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::model::repr::{self, ReprParseError};
use crate::model::student::Student;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Ordered collection of students.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    students: Vec<Student>,
}

impl Group {
    /// Creates a group holding its own copy of `students`.
    pub fn new(students: &[Student]) -> Self {
        Self {
            students: students.to_vec(),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn into_students(self) -> Vec<Student> {
        self.students
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Sorts by age in whole years, youngest first unless `reverse`.
    pub fn sort_by_age(&mut self, reverse: bool) {
        self.sort_by_age_at(&SystemClock, reverse);
    }

    pub fn sort_by_age_at(&mut self, clock: &impl Clock, reverse: bool) {
        let pinned = FixedClock::new(clock.today());
        log_sort("age", reverse, self.len());
        self.sort_by_key_directed(reverse, |student| student.full_ages_at(&pinned));
    }

    /// Sorts by skill, lowest first unless `reverse`.
    pub fn sort_by_skill(&mut self, reverse: bool) {
        log_sort("skill", reverse, self.len());
        self.sort_by_key_directed(reverse, Student::skill);
    }

    /// Sorts by `(age, skill)`; `reverse` flips both components together.
    pub fn sort_by_age_and_skill(&mut self, reverse: bool) {
        self.sort_by_age_and_skill_at(&SystemClock, reverse);
    }

    pub fn sort_by_age_and_skill_at(&mut self, clock: &impl Clock, reverse: bool) {
        let pinned = FixedClock::new(clock.today());
        log_sort("age_and_skill", reverse, self.len());
        self.sort_by_key_directed(reverse, |student| {
            (student.full_ages_at(&pinned), student.skill())
        });
    }

    fn sort_by_key_directed<K, F>(&mut self, reverse: bool, mut key: F)
    where
        K: Ord,
        F: FnMut(&Student) -> K,
    {
        // Both `sort_by_cached_key` variants are stable.
        if reverse {
            self.students.sort_by_cached_key(|student| Reverse(key(student)));
        } else {
            self.students.sort_by_cached_key(key);
        }
    }
}

fn log_sort(key: &str, reverse: bool, len: usize) {
    debug!(
        "event=group_sort module=group key={} reverse={} len={}",
        key, reverse, len
    );
}

/// Compares students pairwise up to the shorter group's length.
///
/// Lengths are not compared, so `Group([a, b]) == Group([a, b, c])`. The
/// relation is therefore not transitive and `Group` is not `Eq`.
impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.students
            .iter()
            .zip(other.students.iter())
            .all(|(left, right)| left == right)
    }
}

impl From<Vec<Student>> for Group {
    fn from(students: Vec<Student>) -> Self {
        Self { students }
    }
}

impl FromIterator<Student> for Group {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Group([")?;
        for (index, student) in self.students.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{student}")?;
        }
        f.write_str("])")
    }
}

impl FromStr for Group {
    type Err = ReprParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        repr::parse_complete(s, repr::group)
    }
}
