//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Plain reads and single-statement writes accept `&PgPool`; methods that
//! participate in a multi-statement unit of work (row locks, guarded
//! writes) accept `&mut PgConnection` so the service layer can compose
//! them inside one transaction.

pub mod cat_repo;
pub mod mission_repo;
pub mod target_repo;

pub use cat_repo::CatRepo;
pub use mission_repo::MissionRepo;
pub use target_repo::TargetRepo;
