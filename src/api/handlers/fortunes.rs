/*
 * Responsibility
 * - GET /fortunes (everything in the store)
 * - GET /random (one fortune picked by the store)
 */
use axum::{Json, extract::State};

use crate::{api::dto::fortunes::FortuneResponse, error::AppError, state::AppState};

pub async fn list_fortunes(
    State(state): State<AppState>,
) -> Result<Json<Vec<FortuneResponse>>, AppError> {
    let rows = state.fortunes.list_all().await?;

    Ok(Json(rows.into_iter().map(FortuneResponse::from).collect()))
}

pub async fn random_fortune(
    State(state): State<AppState>,
) -> Result<Json<FortuneResponse>, AppError> {
    let row = state.fortunes.random_fortune().await?;
    tracing::debug!(id = row.id, "picked random fortune");

    Ok(Json(row.into()))
}
