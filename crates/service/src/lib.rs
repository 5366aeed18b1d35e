//! Domain services for the Spy Cat Agency.
//!
//! This is the business-rule layer: every operation runs as one unit of
//! work against the store (begin, lock + check invariants, write, commit)
//! and reports failures through the closed
//! [`sca_core::error::DomainError`] vocabulary. The HTTP layer above is a
//! thin adapter; the repositories below are plain CRUD.

pub mod cat_service;
pub mod error;
pub mod mission_service;

pub use cat_service::CatService;
pub use error::{ServiceError, ServiceResult};
pub use mission_service::MissionService;
