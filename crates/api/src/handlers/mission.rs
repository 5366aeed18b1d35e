//! Handlers for the `/missions` resource, including nested target updates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sca_core::types::DbId;
use sca_db::models::mission::MissionWithTargets;
use sca_db::models::target::{CreateTarget, UpdateTarget};
use sca_service::MissionService;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// One target within a mission creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct TargetRequest {
    #[validate(length(max = 120))]
    pub name: String,
    #[validate(length(max = 80))]
    pub country: String,
    pub notes: Option<String>,
}

/// Request body for mission creation.
///
/// The 1-3 target count rule is enforced by the domain service so the
/// caller receives the named failure rather than a schema error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMissionRequest {
    #[validate(nested)]
    pub targets: Vec<TargetRequest>,
}

/// Request body for cat assignment.
#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub cat_id: DbId,
}

/// Request body for the target update: notes and/or completion.
#[derive(Debug, Deserialize)]
pub struct UpdateTargetRequest {
    pub notes: Option<String>,
    pub is_complete: Option<bool>,
}

/// POST /api/v1/missions
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateMissionRequest>,
) -> AppResult<(StatusCode, Json<MissionWithTargets>)> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let targets = body
        .targets
        .into_iter()
        .map(|t| CreateTarget {
            name: t.name,
            country: t.country,
            notes: t.notes,
        })
        .collect();

    let mission = MissionService::create(&state.pool, targets).await?;
    Ok((StatusCode::CREATED, Json(mission)))
}

/// GET /api/v1/missions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MissionWithTargets>>> {
    let missions = MissionService::list(&state.pool).await?;
    Ok(Json(missions))
}

/// GET /api/v1/missions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MissionWithTargets>> {
    let mission = MissionService::get(&state.pool, id).await?;
    Ok(Json(mission))
}

/// DELETE /api/v1/missions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    MissionService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/missions/{id}/assign
pub async fn assign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<AssignRequest>,
) -> AppResult<Json<MissionWithTargets>> {
    let mission = MissionService::assign_cat(&state.pool, id, body.cat_id).await?;
    Ok(Json(mission))
}

/// PATCH /api/v1/missions/{mission_id}/targets/{target_id}
///
/// Returns the refreshed mission so the caller observes auto-completion
/// in the same response.
pub async fn update_target(
    State(state): State<AppState>,
    Path((mission_id, target_id)): Path<(DbId, DbId)>,
    Json(body): Json<UpdateTargetRequest>,
) -> AppResult<Json<MissionWithTargets>> {
    MissionService::update_target(
        &state.pool,
        mission_id,
        target_id,
        UpdateTarget {
            notes: body.notes,
            is_complete: body.is_complete,
        },
    )
    .await?;

    let mission = MissionService::get(&state.pool, mission_id).await?;
    Ok(Json(mission))
}
