/*
 * Responsibility
 * - GET /random
 * - Always 200: a store failure is answered with the fallback fortune
 */
use axum::{Json, extract::State};

use crate::{services::fortunes::Fortune, state::AppState};

pub async fn random_fortune(State(state): State<AppState>) -> Json<Fortune> {
    Json(state.fortunes.fetch_random().await)
}
