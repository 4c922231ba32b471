//! Fortune store interface used by the HTTP handlers.
use async_trait::async_trait;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("fortune store is empty")]
    Empty,
    #[error("db error")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FortuneRow {
    pub id: i64,
    pub text: String,
}

/// Read-only access to the stored fortunes.
///
/// Implementations are shared across requests behind an `Arc`, so they must be
/// `Send + Sync` and must not rely on per-request mutable state.
#[async_trait]
pub trait FortuneStore: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Every stored fortune, in no particular order.
    async fn list_all(&self) -> StoreResult<Vec<FortuneRow>>;

    // One fortune picked uniformly at random.
    //
    // Returns `StoreError::Empty` when there is nothing to pick from.
    async fn random_fortune(&self) -> StoreResult<FortuneRow>;
}
