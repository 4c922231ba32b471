/*
 * Responsibility
 * - Shared AppError for the fortune store API
 * - IntoResponse (HTTP status + JSON error body)
 * - Map store errors onto HTTP semantics
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::fortune::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no fortunes available")]
    StoreEmpty,
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AppError::StoreEmpty => (StatusCode::SERVICE_UNAVAILABLE, "STORE_EMPTY"),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Empty => AppError::StoreEmpty,
            StoreError::Db(err) => {
                tracing::error!(error = %err, "fortune store query failed");
                AppError::Internal
            }
        }
    }
}
