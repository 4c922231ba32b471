/*
 * Responsibility
 * - URL layout of the fortune store
 * - /health, /fortunes, /random
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    fortunes::{list_fortunes, random_fortune},
    health::health,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/fortunes", get(list_fortunes))
        .route("/random", get(random_fortune))
}
