/*
 * Responsibility
 * - GET /greeting (configured text, untransformed)
 */
use axum::extract::State;

use crate::state::AppState;

pub async fn greeting(State(state): State<AppState>) -> String {
    state.greeting.to_string()
}
