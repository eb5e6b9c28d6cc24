//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, http::handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/txs/check", post(handlers::check_tx))
        .route("/v1/lint", post(handlers::lint))
        .route("/v1/policy", get(handlers::get_policy))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}
