//! Route definitions for the `/cats` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::cat;
use crate::state::AppState;

/// Routes mounted at `/cats`.
///
/// ```text
/// POST   /                 create
/// GET    /                 list (skip/limit)
/// GET    /{id}             get_by_id
/// PATCH  /{id}/salary      update_salary
/// DELETE /{id}             delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cat::list).post(cat::create))
        .route("/{id}", get(cat::get_by_id).delete(cat::delete))
        .route("/{id}/salary", patch(cat::update_salary))
}
