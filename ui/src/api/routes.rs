/*
 * Responsibility
 * - URL layout of the UI service
 * - /health, /greeting, /random
 */
use axum::{Router, routing::get};

use crate::api::handlers::{fortunes::random_fortune, greeting::greeting, health::health};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/greeting", get(greeting))
        .route("/random", get(random_fortune))
}
