//! Lifecycle operations for missions and their targets.

use std::collections::HashMap;

use sca_core::completion::{self, Completion};
use sca_core::error::DomainError;
use sca_core::mission_rules;
use sca_core::types::DbId;
use sca_db::models::mission::{Mission, MissionWithTargets};
use sca_db::models::target::{CreateTarget, Target, UpdateTarget};
use sca_db::repositories::{CatRepo, MissionRepo, TargetRepo};
use sqlx::{PgConnection, PgPool};

use crate::error::ServiceResult;

/// Business operations on missions and targets.
pub struct MissionService;

impl MissionService {
    /// Create a mission together with its 1-3 targets, atomically.
    ///
    /// Target names and countries are trimmed; names must be unique
    /// within the mission case-insensitively. Either the mission and all
    /// its targets are persisted, or nothing is.
    pub async fn create(
        pool: &PgPool,
        targets: Vec<CreateTarget>,
    ) -> ServiceResult<MissionWithTargets> {
        mission_rules::validate_target_count(targets.len())?;

        let mut prepared = Vec::with_capacity(targets.len());
        for target in &targets {
            mission_rules::validate_target_name(&target.name)?;
            mission_rules::validate_target_country(&target.country)?;
            prepared.push(CreateTarget {
                name: target.name.trim().to_string(),
                country: target.country.trim().to_string(),
                // Empty notes are stored as absent.
                notes: target.notes.clone().filter(|n| !n.is_empty()),
            });
        }
        mission_rules::validate_unique_target_names(prepared.iter().map(|t| t.name.as_str()))?;

        let mut tx = pool.begin().await?;
        let mission = MissionRepo::create(&mut tx).await?;
        let mut created = Vec::with_capacity(prepared.len());
        for target in &prepared {
            created.push(TargetRepo::create(&mut tx, mission.id, target).await?);
        }
        tx.commit().await?;

        tracing::info!(
            mission_id = mission.id,
            targets = created.len(),
            "Created mission"
        );
        Ok(MissionWithTargets {
            mission,
            targets: created,
        })
    }

    /// List all missions with their targets.
    pub async fn list(pool: &PgPool) -> ServiceResult<Vec<MissionWithTargets>> {
        let missions = MissionRepo::list(pool).await?;
        let ids: Vec<DbId> = missions.iter().map(|m| m.id).collect();
        let targets = TargetRepo::list_by_missions(pool, &ids).await?;

        let mut by_mission: HashMap<DbId, Vec<Target>> = HashMap::new();
        for target in targets {
            by_mission.entry(target.mission_id).or_default().push(target);
        }

        Ok(missions
            .into_iter()
            .map(|mission| {
                let targets = by_mission.remove(&mission.id).unwrap_or_default();
                MissionWithTargets { mission, targets }
            })
            .collect())
    }

    /// Fetch a single mission with its targets.
    pub async fn get(pool: &PgPool, id: DbId) -> ServiceResult<MissionWithTargets> {
        let mission = MissionRepo::find_by_id(pool, id).await?.ok_or(
            DomainError::NotFound {
                entity: "Mission",
                id,
            },
        )?;
        let targets = TargetRepo::list_by_mission(pool, id).await?;
        Ok(MissionWithTargets { mission, targets })
    }

    /// Delete a mission, unless a cat is assigned to it. Its targets are
    /// deleted with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> ServiceResult<()> {
        let mut tx = pool.begin().await?;

        let mission = MissionRepo::lock_by_id(&mut tx, id).await?.ok_or(
            DomainError::NotFound {
                entity: "Mission",
                id,
            },
        )?;
        if mission.assigned_cat_id.is_some() {
            return Err(DomainError::MissionAssignedCannotDelete { id }.into());
        }

        MissionRepo::delete(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(mission_id = id, "Deleted mission");
        Ok(())
    }

    /// Assign a cat to a mission. One-shot: there is no unassign or
    /// reassign path.
    ///
    /// Locks both the mission row and the cat row, so two concurrent
    /// assignments of the same cat serialize and at most one passes the
    /// active-mission check.
    pub async fn assign_cat(
        pool: &PgPool,
        mission_id: DbId,
        cat_id: DbId,
    ) -> ServiceResult<MissionWithTargets> {
        let mut tx = pool.begin().await?;

        let mission = MissionRepo::lock_by_id(&mut tx, mission_id).await?.ok_or(
            DomainError::NotFound {
                entity: "Mission",
                id: mission_id,
            },
        )?;
        if mission.is_complete {
            return Err(DomainError::MissionAlreadyComplete { id: mission_id }.into());
        }

        CatRepo::lock_by_id(&mut tx, cat_id)
            .await?
            .ok_or(DomainError::CatNotFound { id: cat_id })?;

        let active = MissionRepo::count_active_for_cat(&mut tx, cat_id).await?;
        if active > 0 {
            return Err(DomainError::CatAlreadyHasActiveMission { id: cat_id }.into());
        }

        let mission = MissionRepo::assign_cat(&mut tx, mission_id, cat_id).await?;
        tx.commit().await?;

        tracing::info!(mission_id, cat_id, "Assigned cat to mission");
        let targets = TargetRepo::list_by_mission(pool, mission_id).await?;
        Ok(MissionWithTargets { mission, targets })
    }

    /// Update a target: set notes and/or mark it complete.
    ///
    /// Notes are frozen once the target or its mission completes; a
    /// request carrying notes for a frozen target fails even if it also
    /// sets `is_complete`. Completion is monotonic: `is_complete = true`
    /// on an already-complete target is a no-op. After any applied
    /// change the mission's completion state is re-evaluated inside the
    /// same transaction.
    pub async fn update_target(
        pool: &PgPool,
        mission_id: DbId,
        target_id: DbId,
        patch: UpdateTarget,
    ) -> ServiceResult<Target> {
        let mut tx = pool.begin().await?;

        let mission = MissionRepo::lock_by_id(&mut tx, mission_id).await?.ok_or(
            DomainError::NotFound {
                entity: "Mission",
                id: mission_id,
            },
        )?;
        let target = TargetRepo::lock_in_mission(&mut tx, target_id, mission_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Target",
                id: target_id,
            })?;

        if patch.notes.is_some()
            && !completion::notes_editable(mission.is_complete, target.is_complete)
        {
            return Err(DomainError::NotesFrozen { target_id }.into());
        }

        let notes = patch.notes.as_deref();
        let complete_now = patch.is_complete == Some(true) && !target.is_complete;

        if notes.is_none() && !complete_now {
            // Nothing to apply; return the target unchanged.
            return Ok(target);
        }

        let updated =
            TargetRepo::update(&mut tx, target_id, notes, complete_now.then_some(true)).await?;
        Self::evaluate_completion(&mut tx, &mission).await?;
        tx.commit().await?;

        tracing::debug!(
            mission_id,
            target_id,
            completed = complete_now,
            "Updated target"
        );
        Ok(updated)
    }

    /// Re-evaluate a mission's completion state from its target counts
    /// and commit the Incomplete -> Complete transition when it applies.
    ///
    /// This is the only path by which a mission becomes complete. The
    /// caller holds the mission row lock.
    async fn evaluate_completion(
        conn: &mut PgConnection,
        mission: &Mission,
    ) -> ServiceResult<()> {
        if mission.is_complete {
            return Ok(());
        }
        let (total, completed) = TargetRepo::completion_counts(conn, mission.id).await?;
        if Completion::of_counts(total, completed).is_complete() {
            MissionRepo::mark_complete(conn, mission.id).await?;
            tracing::info!(mission_id = mission.id, "Mission auto-completed");
        }
        Ok(())
    }
}
