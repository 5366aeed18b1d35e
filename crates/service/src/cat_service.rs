//! Lifecycle operations for agent cats.

use sca_breeds::BreedValidator;
use sca_core::cat_rules;
use sca_core::error::DomainError;
use sca_core::types::DbId;
use sca_db::models::cat::{Cat, CreateCat};
use sca_db::repositories::{CatRepo, MissionRepo};
use sqlx::PgPool;

use crate::error::ServiceResult;

/// Default page size for cat listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Business operations on cats.
pub struct CatService;

impl CatService {
    /// Create a cat after validating its fields and its breed against
    /// the breed registry.
    ///
    /// Name and breed are trimmed before persisting. Registry
    /// unavailability never surfaces here; only an actually unknown
    /// breed fails, with [`DomainError::InvalidBreed`].
    pub async fn create(
        pool: &PgPool,
        breeds: &BreedValidator,
        input: CreateCat,
    ) -> ServiceResult<Cat> {
        let name = input.name.trim().to_string();
        let breed = input.breed.trim().to_string();

        cat_rules::validate_cat_name(&name)?;
        cat_rules::validate_years_of_experience(input.years_of_experience)?;
        cat_rules::validate_salary(input.salary)?;

        if !breeds.is_valid(&breed).await {
            return Err(DomainError::InvalidBreed { breed }.into());
        }

        let cat = CatRepo::create(
            pool,
            &CreateCat {
                name,
                breed,
                years_of_experience: input.years_of_experience,
                salary: input.salary,
            },
        )
        .await?;

        tracing::info!(cat_id = cat.id, breed = %cat.breed, "Created cat");
        Ok(cat)
    }

    /// List cats with offset/limit pagination.
    pub async fn list(
        pool: &PgPool,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<Cat>> {
        let offset = offset.unwrap_or(0).max(0);
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).max(0);
        Ok(CatRepo::list(pool, offset, limit).await?)
    }

    /// Fetch a single cat.
    pub async fn get(pool: &PgPool, id: DbId) -> ServiceResult<Cat> {
        let cat = CatRepo::find_by_id(pool, id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Cat", id })?;
        Ok(cat)
    }

    /// Update a cat's salary. No other field is touched.
    pub async fn update_salary(pool: &PgPool, id: DbId, salary: i32) -> ServiceResult<Cat> {
        cat_rules::validate_salary(salary)?;
        let cat = CatRepo::update_salary(pool, id, salary)
            .await?
            .ok_or(DomainError::NotFound { entity: "Cat", id })?;
        Ok(cat)
    }

    /// Delete a cat, unless it is assigned to an incomplete mission.
    ///
    /// Runs as one transaction: the cat row is locked so a concurrent
    /// assignment cannot slip in between the active-mission check and
    /// the delete.
    pub async fn delete(pool: &PgPool, id: DbId) -> ServiceResult<()> {
        let mut tx = pool.begin().await?;

        CatRepo::lock_by_id(&mut tx, id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Cat", id })?;

        let active = MissionRepo::count_active_for_cat(&mut tx, id).await?;
        if active > 0 {
            return Err(DomainError::CatHasActiveMission { id }.into());
        }

        CatRepo::delete(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(cat_id = id, "Deleted cat");
        Ok(())
    }
}
