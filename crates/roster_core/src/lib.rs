//! Core domain logic for the student roster.
//! People, students and groups live here, along with the group sorts.

pub mod clock;
pub mod logging;
pub mod model;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::group::Group;
pub use model::person::{Person, PersonValidationError};
pub use model::student::Student;
pub use model::ReprParseError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
