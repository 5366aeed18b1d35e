//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! `mission` additionally provides the enriched [`mission::MissionWithTargets`]
//! read model.

pub mod cat;
pub mod mission;
pub mod target;
