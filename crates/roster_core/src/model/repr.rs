//! Canonical text form of roster records.
//!
//! # Responsibility
//! - Render the shared `Person(...)` field list used by `Display` impls.
//! - Parse `Person(...)`, `Student(...)` and `Group([...])` back into values.
//!
//! # Invariants
//! - Text fields are JSON string literals, so any `String` round-trips.
//! - Dates are `YYYY-MM-DD` and go through the same validation as
//!   `Person::from_text`.

use crate::model::group::Group;
use crate::model::person::{parse_bday, Person, PersonValidationError};
use crate::model::student::Student;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static STRING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"(?:[^"\\]|\\.)*""#).expect("valid string literal regex"));
static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("valid integer regex"));
static DATE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^,\s()\[\]]+").expect("valid date token regex"));

/// Error while parsing a canonical text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReprParseError {
    /// Input at `offset` does not start with the `expected` token.
    UnexpectedToken {
        offset: usize,
        expected: &'static str,
    },
    /// A complete value was parsed but input continues at `offset`.
    TrailingInput { offset: usize },
    /// The date token is not a valid birth date.
    Validation(PersonValidationError),
}

impl Display for ReprParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { offset, expected } => {
                write!(f, "expected {expected} at offset {offset}")
            }
            Self::TrailingInput { offset } => {
                write!(f, "unexpected trailing input at offset {offset}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReprParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::UnexpectedToken { .. } | Self::TrailingInput { .. } => None,
        }
    }
}

impl From<PersonValidationError> for ReprParseError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

pub(crate) type ReprResult<T> = Result<T, ReprParseError>;

/// Writes `"name", "surname", "sex", bday` without the surrounding parens.
pub(crate) fn write_person_fields(f: &mut Formatter<'_>, person: &Person) -> std::fmt::Result {
    write_quoted(f, person.name())?;
    f.write_str(", ")?;
    write_quoted(f, person.surname())?;
    f.write_str(", ")?;
    write_quoted(f, person.sex())?;
    write!(f, ", {}", person.bday())
}

fn write_quoted(f: &mut Formatter<'_>, value: &str) -> std::fmt::Result {
    let quoted = serde_json::to_string(value).map_err(|_| std::fmt::Error)?;
    f.write_str(&quoted)
}

/// Runs `parser` over the whole input, rejecting trailing text.
pub(crate) fn parse_complete<T>(
    input: &str,
    parser: fn(&mut Cursor<'_>) -> ReprResult<T>,
) -> ReprResult<T> {
    let mut cursor = Cursor::new(input);
    let value = parser(&mut cursor)?;
    cursor.finish()?;
    Ok(value)
}

pub(crate) fn person(cursor: &mut Cursor<'_>) -> ReprResult<Person> {
    cursor.expect("Person")?;
    cursor.expect("(")?;
    let person = person_fields(cursor)?;
    cursor.expect(")")?;
    Ok(person)
}

pub(crate) fn student(cursor: &mut Cursor<'_>) -> ReprResult<Student> {
    cursor.expect("Student")?;
    cursor.expect("(")?;
    let person = person_fields(cursor)?;
    cursor.expect(",")?;
    let group = cursor.integer()?;
    cursor.expect(",")?;
    let skill = cursor.integer()?;
    cursor.expect(")")?;
    Ok(Student::from_person(person, group, skill))
}

pub(crate) fn group(cursor: &mut Cursor<'_>) -> ReprResult<Group> {
    cursor.expect("Group")?;
    cursor.expect("(")?;
    cursor.expect("[")?;
    let mut students = Vec::new();
    if !cursor.eat("]") {
        loop {
            students.push(student(cursor)?);
            if cursor.eat(",") {
                continue;
            }
            cursor.expect("]")?;
            break;
        }
    }
    cursor.expect(")")?;
    Ok(Group::from(students))
}

fn person_fields(cursor: &mut Cursor<'_>) -> ReprResult<Person> {
    let name = cursor.string()?;
    cursor.expect(",")?;
    let surname = cursor.string()?;
    cursor.expect(",")?;
    let sex = cursor.string()?;
    cursor.expect(",")?;
    let bday = cursor.date()?;
    Ok(Person::new(name, surname, sex, bday))
}

/// Whitespace-insensitive reader over canonical text.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    fn rest(&mut self) -> &'a str {
        let input = self.input;
        let remaining = &input[self.offset..];
        let trimmed = remaining.trim_start();
        self.offset += remaining.len() - trimmed.len();
        trimmed
    }

    fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.offset += literal.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, literal: &'static str) -> ReprResult<()> {
        if self.eat(literal) {
            Ok(())
        } else {
            Err(self.unexpected(literal))
        }
    }

    fn token(&mut self, re: &Regex) -> Option<&'a str> {
        let rest = self.rest();
        let matched = re.find(rest)?.as_str();
        self.offset += matched.len();
        Some(matched)
    }

    fn string(&mut self) -> ReprResult<String> {
        let start = self.offset;
        let literal = self
            .token(&STRING_RE)
            .ok_or_else(|| self.unexpected("string literal"))?;
        serde_json::from_str(literal).map_err(|_| ReprParseError::UnexpectedToken {
            offset: start,
            expected: "string literal",
        })
    }

    fn integer(&mut self) -> ReprResult<i64> {
        self.rest();
        let start = self.offset;
        let digits = self
            .token(&INTEGER_RE)
            .ok_or_else(|| self.unexpected("integer"))?;
        digits.parse().map_err(|_| ReprParseError::UnexpectedToken {
            offset: start,
            expected: "integer",
        })
    }

    fn date(&mut self) -> ReprResult<NaiveDate> {
        let token = self
            .token(&DATE_TOKEN_RE)
            .ok_or_else(|| self.unexpected("date"))?;
        Ok(parse_bday(token)?)
    }

    fn finish(mut self) -> ReprResult<()> {
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(ReprParseError::TrailingInput {
                offset: self.offset,
            })
        }
    }

    fn unexpected(&self, expected: &'static str) -> ReprParseError {
        ReprParseError::UnexpectedToken {
            offset: self.offset,
            expected,
        }
    }
}
