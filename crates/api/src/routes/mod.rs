pub mod cats;
pub mod health;
pub mod missions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /cats        cat CRUD + salary updates
/// /missions    mission CRUD, assignment, target updates
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cats", cats::router())
        .nest("/missions", missions::router())
}
