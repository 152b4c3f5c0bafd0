//! Roster domain model.
//!
//! # Responsibility
//! - Define the person, student and group records used by callers.
//! - Own the sort operations that reorder a group in place.
//!
//! # Invariants
//! - Records are immutable after construction; only group order changes.
//! - Every record has a canonical text form that parses back to an equal value.

pub mod group;
pub mod person;
mod repr;
pub mod student;

pub use repr::ReprParseError;
