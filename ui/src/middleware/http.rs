//! Transport-level middleware for the UI service: request id, access log,
//! body limit, and an overall request deadline.
//!
//! The deadline is derived from the fortune call timeout and always sits
//! above it, so a slow store is answered with the fallback before this layer
//! fires.

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header::HeaderName};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Floor for the whole-request deadline.
pub const MIN_REQUEST_DEADLINE: Duration = Duration::from_secs(30);
/// Room left after the fortune call times out to build the fallback response.
pub const DEADLINE_HEADROOM: Duration = Duration::from_secs(5);

/// Whole-request deadline for a given outbound call timeout.
pub fn request_deadline(call_timeout: Duration) -> Duration {
    MIN_REQUEST_DEADLINE.max(call_timeout.saturating_add(DEADLINE_HEADROOM))
}

pub fn apply(router: Router, deadline: Duration) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    let layers = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .layer(TimeoutLayer::new(deadline))
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_stays_above_call_timeout() {
        assert_eq!(request_deadline(Duration::from_secs(1)), MIN_REQUEST_DEADLINE);
        assert_eq!(request_deadline(Duration::from_secs(25)), MIN_REQUEST_DEADLINE);
        assert_eq!(
            request_deadline(Duration::from_secs(30)),
            Duration::from_secs(35)
        );
        assert_eq!(
            request_deadline(Duration::from_secs(35)),
            Duration::from_secs(40)
        );

        for ms in [1, 999, 24_999, 25_000, 25_001, 29_999, 30_000, 120_000] {
            let timeout = Duration::from_millis(ms);
            assert!(request_deadline(timeout) >= timeout + DEADLINE_HEADROOM);
        }
    }
}
