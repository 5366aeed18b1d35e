use crate::types::DbId;

/// Closed set of domain failure conditions.
///
/// Every domain service operation reports failures through exactly one of
/// these variants, so callers (the HTTP layer in particular) can branch
/// exhaustively without string comparison.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// The breed did not validate against the breed registry.
    #[error("Breed '{breed}' is not a recognized breed")]
    InvalidBreed { breed: String },

    /// A generic lookup miss (cat, mission, or target).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The cat named in an assignment request does not exist.
    ///
    /// Distinct from [`DomainError::NotFound`] so assignment can report a
    /// missing cat separately from a missing mission.
    #[error("Cat with id {id} not found")]
    CatNotFound { id: DbId },

    /// The cat is assigned to an incomplete mission and cannot be deleted.
    #[error("Cat {id} has an active mission and cannot be deleted")]
    CatHasActiveMission { id: DbId },

    /// The cat is already assigned to an incomplete mission.
    #[error("Cat {id} already has an active mission")]
    CatAlreadyHasActiveMission { id: DbId },

    /// A mission must be created with between 1 and 3 targets.
    #[error("A mission requires between 1 and 3 targets, got {count}")]
    TargetsCountOutOfRange { count: usize },

    /// Two targets in the same mission share a name (case-insensitive,
    /// after trimming).
    #[error("Target name '{name}' is not unique within the mission")]
    TargetNameNotUniqueInMission { name: String },

    /// The mission is assigned to a cat and cannot be deleted.
    #[error("Mission {id} is assigned to a cat and cannot be deleted")]
    MissionAssignedCannotDelete { id: DbId },

    /// The mission has already completed; no cat can be assigned to it.
    #[error("Mission {id} is already complete")]
    MissionAlreadyComplete { id: DbId },

    /// Notes cannot be edited once the target or its mission is complete.
    #[error("Notes are frozen for target {target_id}: the target or its mission is complete")]
    NotesFrozen { target_id: DbId },

    /// A field-level constraint violation (empty name, negative salary, ...).
    #[error("Validation failed: {0}")]
    Validation(String),
}
