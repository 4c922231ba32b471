/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Built once at startup from Config; clone is cheap
 */
use std::sync::Arc;

use crate::services::fortunes::FortuneClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub fortunes: FortuneClient,
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(fortunes: FortuneClient, greeting: impl Into<Arc<str>>) -> Self {
        Self {
            fortunes,
            greeting: greeting.into(),
        }
    }
}
