//! Domain core for the Spy Cat Agency.
//!
//! Pure business rules with no I/O: the shared ID/timestamp types, the
//! closed [`error::DomainError`] vocabulary every operation reports
//! failures through, field-level validation for cats and missions, and
//! the mission completion state machine.

pub mod cat_rules;
pub mod completion;
pub mod error;
pub mod mission_rules;
pub mod types;
