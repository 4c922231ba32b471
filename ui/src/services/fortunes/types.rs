/*
 * Responsibility
 * - Fortune as exchanged with the fortune store and returned to callers
 * - The fixed fallback fortune
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    pub id: i64,
    pub text: String,
}

impl Fortune {
    pub const FALLBACK_ID: i64 = 42;
    pub const FALLBACK_TEXT: &'static str = "Your future is unclear.";

    /// Served in place of a live fortune when the store cannot be reached.
    pub fn fallback() -> Self {
        Self {
            id: Self::FALLBACK_ID,
            text: Self::FALLBACK_TEXT.to_string(),
        }
    }
}
