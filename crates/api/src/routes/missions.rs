//! Route definitions for the `/missions` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::mission;
use crate::state::AppState;

/// Routes mounted at `/missions`.
///
/// ```text
/// POST   /                                create (with 1-3 targets)
/// GET    /                                list
/// GET    /{id}                            get_by_id
/// DELETE /{id}                            delete (only while unassigned)
/// POST   /{id}/assign                     assign (one-shot)
/// PATCH  /{id}/targets/{target_id}        update_target (notes/completion)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mission::list).post(mission::create))
        .route("/{id}", get(mission::get_by_id).delete(mission::delete))
        .route("/{id}/assign", post(mission::assign))
        .route("/{id}/targets/{target_id}", patch(mission::update_target))
}
