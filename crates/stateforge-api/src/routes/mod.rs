//! Route modules.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod state_editor;

/// Returns every route of the API, without middleware.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/state-editor", state_editor::router())
}
