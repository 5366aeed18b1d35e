//! Target entity model and DTOs.

use sca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `targets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Target {
    pub id: DbId,
    pub mission_id: DbId,
    pub name: String,
    pub country: String,
    pub notes: Option<String>,
    pub is_complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a target as part of mission creation.
///
/// Targets are only ever created together with their mission; there is no
/// standalone target creation path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTarget {
    pub name: String,
    pub country: String,
    pub notes: Option<String>,
}

/// DTO for the single target update operation: set notes and/or mark the
/// target complete. Omitted fields leave state unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTarget {
    pub notes: Option<String>,
    pub is_complete: Option<bool>,
}
