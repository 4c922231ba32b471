/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone is cheap (Arc inside)
 */
use std::sync::Arc;

use crate::repos::fortune::FortuneStore;

#[derive(Clone)]
pub struct AppState {
    pub fortunes: Arc<dyn FortuneStore>,
}

impl AppState {
    pub fn new(fortunes: Arc<dyn FortuneStore>) -> Self {
        Self { fortunes }
    }
}
