use std::sync::Arc;

use sca_breeds::BreedValidator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sca_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Breed validator, constructed once at startup and shared.
    pub breeds: Arc<BreedValidator>,
}
