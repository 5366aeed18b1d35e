//! Repository for the `missions` table.

use sca_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::mission::Mission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, assigned_cat_id, is_complete, created_at, updated_at";

/// Provides CRUD operations for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission (incomplete, unassigned), returning the
    /// created row. Runs on a connection so targets can be inserted in
    /// the same transaction.
    pub async fn create(conn: &mut PgConnection) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (assigned_cat_id, is_complete)
             VALUES (NULL, FALSE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query).fetch_one(conn).await
    }

    /// Find a mission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all missions ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id");
        sqlx::query_as::<_, Mission>(&query).fetch_all(pool).await
    }

    /// Find a mission by ID and lock its row for the current transaction.
    ///
    /// Serializes concurrent assignment, deletion, and target updates
    /// touching the same mission.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Count incomplete missions assigned to the given cat.
    pub async fn count_active_for_cat(
        conn: &mut PgConnection,
        cat_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM missions
             WHERE assigned_cat_id = $1 AND is_complete = FALSE",
        )
        .bind(cat_id)
        .fetch_one(conn)
        .await
    }

    /// Set the assigned cat on a mission, returning the updated row.
    ///
    /// The caller has already verified the mission is unassigned and
    /// incomplete under the row lock; assignment is one-shot.
    pub async fn assign_cat(
        conn: &mut PgConnection,
        id: DbId,
        cat_id: DbId,
    ) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "UPDATE missions SET assigned_cat_id = $2 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .bind(cat_id)
            .fetch_one(conn)
            .await
    }

    /// Mark a mission complete. The transition is monotonic; callers only
    /// invoke this from the completion evaluation step.
    pub async fn mark_complete(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE missions SET is_complete = TRUE WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Delete a mission by ID; its targets cascade at the schema level.
    /// Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM missions WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
