//! Repository for the `targets` table.

use sca_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::target::{CreateTarget, Target};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, mission_id, name, country, notes, is_complete, created_at, updated_at";

/// Provides CRUD operations for mission targets.
pub struct TargetRepo;

impl TargetRepo {
    /// Insert a target for a mission, returning the created row. Runs on
    /// a connection: targets are only created inside the mission-creation
    /// transaction.
    pub async fn create(
        conn: &mut PgConnection,
        mission_id: DbId,
        input: &CreateTarget,
    ) -> Result<Target, sqlx::Error> {
        let query = format!(
            "INSERT INTO targets (mission_id, name, country, notes, is_complete)
             VALUES ($1, $2, $3, $4, FALSE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_id)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.notes)
            .fetch_one(conn)
            .await
    }

    /// List all targets of a mission, ordered by ID.
    pub async fn list_by_mission(
        pool: &PgPool,
        mission_id: DbId,
    ) -> Result<Vec<Target>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM targets WHERE mission_id = $1 ORDER BY id");
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_id)
            .fetch_all(pool)
            .await
    }

    /// List targets for a set of missions in one round trip, ordered by ID.
    pub async fn list_by_missions(
        pool: &PgPool,
        mission_ids: &[DbId],
    ) -> Result<Vec<Target>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM targets WHERE mission_id = ANY($1) ORDER BY mission_id, id"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_ids)
            .fetch_all(pool)
            .await
    }

    /// Find a target by ID scoped to its mission, locking the row.
    ///
    /// Returns `None` when the target does not exist or belongs to a
    /// different mission.
    pub async fn lock_in_mission(
        conn: &mut PgConnection,
        id: DbId,
        mission_id: DbId,
    ) -> Result<Option<Target>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM targets WHERE id = $1 AND mission_id = $2 FOR UPDATE");
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(mission_id)
            .fetch_optional(conn)
            .await
    }

    /// Apply an update to a target, returning the updated row.
    ///
    /// Only non-`None` fields are applied; the service layer has already
    /// enforced the notes-freeze and monotonic-completion rules.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        notes: Option<&str>,
        is_complete: Option<bool>,
    ) -> Result<Target, sqlx::Error> {
        let query = format!(
            "UPDATE targets SET
                notes = COALESCE($2, notes),
                is_complete = COALESCE($3, is_complete)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(notes)
            .bind(is_complete)
            .fetch_one(conn)
            .await
    }

    /// Count a mission's targets: `(total, completed)`.
    pub async fn completion_counts(
        conn: &mut PgConnection,
        mission_id: DbId,
    ) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE is_complete)
             FROM targets WHERE mission_id = $1",
        )
        .bind(mission_id)
        .fetch_one(conn)
        .await
    }
}
