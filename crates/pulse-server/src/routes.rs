//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use pulse_core::Catalog;

use crate::error::ServerResult;
use crate::handlers::{self, AppState};

/// Create the dashboard router.
///
/// Fails if the catalog does not pass its load-time checks.
///
/// # Arguments
/// * `catalog` - Dashboard content
pub fn create_router(catalog: Catalog) -> ServerResult<Router> {
    Ok(router_for(catalog.validated()?))
}

/// Build the router over content that has already been validated.
pub(crate) fn router_for(catalog: Catalog) -> Router {
    let state = Arc::new(AppState { catalog });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Page
        .route("/", get(handlers::dashboard_page))
        // Scenario calculator
        .route("/api/v1/scenario", get(handlers::scenario))
        // Content
        .route("/api/v1/content", get(handlers::content))
        // State
        .with_state(state)
}
