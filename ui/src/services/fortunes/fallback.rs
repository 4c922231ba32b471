//! Try-once-then-fallback combinator.
//!
//! A single attempt is bounded by a deadline. If it errors or the deadline
//! passes, the caller-supplied fallback produces the value instead. There is
//! no retry and no breaker state: every call starts from scratch.
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Why the fallback was taken.
#[derive(Debug, Error)]
pub enum CallFailure<E: Display> {
    #[error("{0}")]
    Failed(E),
    #[error("no response within {0:?}")]
    TimedOut(Duration),
}

/// Await `call` for at most `deadline`.
///
/// On timeout the future is dropped, which abandons any in-flight I/O; a late
/// result is never observed.
pub async fn try_within<T, E, Fut>(deadline: Duration, call: Fut) -> Result<T, CallFailure<E>>
where
    E: Display,
    Fut: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(CallFailure::Failed(e)),
        Err(_) => Err(CallFailure::TimedOut(deadline)),
    }
}

pub async fn with_fallback<T, E, Fut, F>(deadline: Duration, call: Fut, fallback: F) -> T
where
    E: Display,
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(CallFailure<E>) -> T,
{
    match try_within(deadline, call).await {
        Ok(value) => value,
        Err(failure) => fallback(failure),
    }
}
