//! Cat entity model and DTOs.

use sca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cat {
    pub id: DbId,
    pub name: String,
    pub years_of_experience: i32,
    pub breed: String,
    pub salary: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new cat.
///
/// `name` and `breed` are expected pre-trimmed by the service layer; the
/// breed has already been validated against the breed registry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCat {
    pub name: String,
    pub years_of_experience: i32,
    pub breed: String,
    pub salary: i32,
}
