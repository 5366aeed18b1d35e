//! Mission entity model and read models.

use sca_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::target::Target;

/// A row from the `missions` table.
///
/// `assigned_cat_id` is set at most once (assignment is one-shot) and
/// `is_complete` only ever transitions false -> true, driven by target
/// completion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub assigned_cat_id: Option<DbId>,
    pub is_complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A mission enriched with its targets, as returned by reads and by
/// mission creation.
#[derive(Debug, Clone, Serialize)]
pub struct MissionWithTargets {
    #[serde(flatten)]
    pub mission: Mission,
    pub targets: Vec<Target>,
}
