//! Person domain record.
//!
//! # Responsibility
//! - Hold identity fields and the birth date of one individual.
//! - Derive age from the birth date and a clock.
//!
//! # Invariants
//! - `bday` is always a real calendar date. Untyped inputs (text, serde,
//!   canonical text form) are validated before a `Person` exists.
//! - Fields are never mutated after construction.
//! - Age is a whole-year difference: the birthday's month/day is ignored, so
//!   a person born in December is already counted one year older in January.

use crate::clock::{Clock, SystemClock};
use crate::model::repr::{self, ReprParseError};
use chrono::{Datelike, NaiveDate};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d{4,}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Validation error raised while building a person-derived record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// `bday` input is not a calendar date.
    InvalidBirthday { value: String },
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBirthday { .. } => write!(f, "bday must be date type"),
        }
    }
}

impl Error for PersonValidationError {}

/// One individual of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    name: String,
    surname: String,
    /// Free-form; no enumeration is enforced.
    sex: String,
    /// Serialized as `YYYY-MM-DD`.
    bday: NaiveDate,
}

/// Untrusted wire shape; `bday` is validated on conversion.
#[derive(Deserialize)]
struct PersonRecord {
    name: String,
    surname: String,
    sex: String,
    bday: String,
}

impl TryFrom<PersonRecord> for Person {
    type Error = PersonValidationError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        Person::from_text(record.name, record.surname, record.sex, &record.bday)
    }
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        sex: impl Into<String>,
        bday: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            sex: sex.into(),
            bday,
        }
    }

    /// Creates a person from a textual birth date.
    ///
    /// # Errors
    /// - Returns `InvalidBirthday` unless `bday` is an ISO `YYYY-MM-DD` date
    ///   that exists on the calendar.
    pub fn from_text(
        name: impl Into<String>,
        surname: impl Into<String>,
        sex: impl Into<String>,
        bday: &str,
    ) -> Result<Self, PersonValidationError> {
        let bday = parse_bday(bday)?;
        Ok(Self::new(name, surname, sex, bday))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    pub fn bday(&self) -> NaiveDate {
        self.bday
    }

    /// Whole years between `bday` and the current UTC year.
    pub fn full_ages(&self) -> i32 {
        self.full_ages_at(&SystemClock)
    }

    /// Whole years between `bday` and the year reported by `clock`.
    pub fn full_ages_at(&self, clock: &impl Clock) -> i32 {
        clock.current_year() - self.bday.year()
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Person(")?;
        repr::write_person_fields(f, self)?;
        f.write_str(")")
    }
}

impl FromStr for Person {
    type Err = ReprParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        repr::parse_complete(s, repr::person)
    }
}

/// Parses a birth date in `YYYY-MM-DD` form.
pub(crate) fn parse_bday(value: &str) -> Result<NaiveDate, PersonValidationError> {
    let parsed = if ISO_DATE_RE.is_match(value) {
        NaiveDate::from_str(value).ok()
    } else {
        None
    };

    parsed.ok_or_else(|| {
        warn!("event=person_validate module=model status=error field=bday");
        PersonValidationError::InvalidBirthday {
            value: value.to_string(),
        }
    })
}
