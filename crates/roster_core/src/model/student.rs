//! Student domain record.
//!
//! # Responsibility
//! - Extend a `Person` with a group (cohort) number and a skill score.
//!
//! # Invariants
//! - Birth date validation is delegated to `Person`; `group` and `skill`
//!   accept any integer.
//! - Equality compares the person first, then `group`, then `skill`.

use crate::clock::Clock;
use crate::model::person::{Person, PersonValidationError};
use crate::model::repr::{self, ReprParseError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A person enrolled in a group, with a skill score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudentRecord")]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    group: i64,
    skill: i64,
}

#[derive(Deserialize)]
struct StudentRecord {
    name: String,
    surname: String,
    sex: String,
    bday: String,
    group: i64,
    skill: i64,
}

impl TryFrom<StudentRecord> for Student {
    type Error = PersonValidationError;

    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        Student::from_text(
            record.name,
            record.surname,
            record.sex,
            &record.bday,
            record.group,
            record.skill,
        )
    }
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        sex: impl Into<String>,
        bday: NaiveDate,
        group: i64,
        skill: i64,
    ) -> Self {
        Self::from_person(Person::new(name, surname, sex, bday), group, skill)
    }

    pub fn from_person(person: Person, group: i64, skill: i64) -> Self {
        Self {
            person,
            group,
            skill,
        }
    }

    /// Creates a student from a textual birth date.
    ///
    /// # Errors
    /// - Returns the same `InvalidBirthday` error as [`Person::from_text`].
    pub fn from_text(
        name: impl Into<String>,
        surname: impl Into<String>,
        sex: impl Into<String>,
        bday: &str,
        group: i64,
        skill: i64,
    ) -> Result<Self, PersonValidationError> {
        let person = Person::from_text(name, surname, sex, bday)?;
        Ok(Self::from_person(person, group, skill))
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn surname(&self) -> &str {
        self.person.surname()
    }

    pub fn sex(&self) -> &str {
        self.person.sex()
    }

    pub fn bday(&self) -> NaiveDate {
        self.person.bday()
    }

    /// Group (cohort) number.
    pub fn group(&self) -> i64 {
        self.group
    }

    pub fn skill(&self) -> i64 {
        self.skill
    }

    pub fn full_ages(&self) -> i32 {
        self.person.full_ages()
    }

    pub fn full_ages_at(&self, clock: &impl Clock) -> i32 {
        self.person.full_ages_at(clock)
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Student(")?;
        repr::write_person_fields(f, &self.person)?;
        write!(f, ", {}, {})", self.group, self.skill)
    }
}

impl FromStr for Student {
    type Err = ReprParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        repr::parse_complete(s, repr::student)
    }
}
