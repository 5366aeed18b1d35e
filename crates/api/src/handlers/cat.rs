//! Handlers for the `/cats` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sca_core::types::DbId;
use sca_db::models::cat::{Cat, CreateCat};
use sca_service::CatService;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for cat creation.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCatRequest {
    #[validate(length(max = 120))]
    pub name: String,
    #[validate(range(min = 0))]
    pub years_of_experience: i32,
    #[validate(length(max = 80))]
    pub breed: String,
    #[validate(range(min = 0))]
    pub salary: i32,
}

/// Request body for the salary update.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSalaryRequest {
    #[validate(range(min = 0))]
    pub salary: i32,
}

/// Query parameters for cat listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/v1/cats
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCatRequest>,
) -> AppResult<(StatusCode, Json<Cat>)> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let cat = CatService::create(
        &state.pool,
        &state.breeds,
        CreateCat {
            name: body.name,
            years_of_experience: body.years_of_experience,
            breed: body.breed,
            salary: body.salary,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(cat)))
}

/// GET /api/v1/cats?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Cat>>> {
    let cats = CatService::list(&state.pool, params.skip, params.limit).await?;
    Ok(Json(cats))
}

/// GET /api/v1/cats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Cat>> {
    let cat = CatService::get(&state.pool, id).await?;
    Ok(Json(cat))
}

/// PATCH /api/v1/cats/{id}/salary
pub async fn update_salary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateSalaryRequest>,
) -> AppResult<Json<Cat>> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let cat = CatService::update_salary(&state.pool, id, body.salary).await?;
    Ok(Json(cat))
}

/// DELETE /api/v1/cats/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    CatService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
