pub mod health;
pub mod scheduling;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/diff", post(scheduling::handle_diff))
        .route(
            "/api/recommendations",
            post(scheduling::handle_recommendations),
        )
        .route(
            "/api/sample/recommendations",
            get(scheduling::handle_sample_recommendations),
        )
        .with_state(state)
}
