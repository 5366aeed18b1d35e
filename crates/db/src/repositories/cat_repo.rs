//! Repository for the `cats` table.

use sca_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::cat::{Cat, CreateCat};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, years_of_experience, breed, salary, created_at, updated_at";

/// Provides CRUD operations for cats.
pub struct CatRepo;

impl CatRepo {
    /// Insert a new cat, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCat) -> Result<Cat, sqlx::Error> {
        let query = format!(
            "INSERT INTO cats (name, years_of_experience, breed, salary)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(&input.name)
            .bind(input.years_of_experience)
            .bind(&input.breed)
            .bind(input.salary)
            .fetch_one(pool)
            .await
    }

    /// Find a cat by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cats WHERE id = $1");
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cats ordered by ID, with offset/limit pagination.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Cat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cats ORDER BY id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Cat>(&query)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a cat's salary, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists. No other
    /// field is touched.
    pub async fn update_salary(
        pool: &PgPool,
        id: DbId,
        salary: i32,
    ) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!(
            "UPDATE cats SET salary = $2 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .bind(salary)
            .fetch_optional(pool)
            .await
    }

    /// Find a cat by ID and lock its row for the current transaction.
    ///
    /// Uses `SELECT ... FOR UPDATE` so check-then-write sequences against
    /// the same cat (delete guard, assignment exclusivity) serialize
    /// instead of racing.
    pub async fn lock_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cats WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Delete a cat by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cats WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
