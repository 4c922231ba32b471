//! HTTP client for the fortune store.
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::services::discovery::{DiscoveryError, ServiceResolver};
use crate::services::fortunes::{Fortune, with_fallback};

const RANDOM_PATH: &str = "/random";

/// Everything that can go wrong talking to the fortune store.
///
/// Callers of [`FortuneClient::fetch_random`] never see these; they are logged
/// and replaced by [`Fortune::fallback`].
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("cannot resolve fortune service: {0}")]
    Resolve(#[from] DiscoveryError),
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid fortune payload: {0}")]
    Decode(#[source] reqwest::Error),
}

impl RemoteError {
    fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteError::Timeout
        } else {
            RemoteError::Transport(e)
        }
    }

    fn from_body(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteError::Timeout
        } else {
            RemoteError::Decode(e)
        }
    }
}

/// Builds the shared `reqwest::Client` with the call timeout applied to both
/// connect and the whole request.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
}

#[derive(Clone, Debug)]
pub struct FortuneClient {
    http: reqwest::Client,
    resolver: Arc<dyn ServiceResolver>,
    service_name: String,
    timeout: Duration,
}

impl FortuneClient {
    pub fn new(
        http: reqwest::Client,
        resolver: Arc<dyn ServiceResolver>,
        service_name: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            resolver,
            service_name: service_name.into(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// One GET to `{service}/random`. No timeout of its own beyond the
    /// `reqwest::Client` settings.
    pub async fn try_fetch_random(&self) -> Result<Fortune, RemoteError> {
        let base = self.resolver.resolve(&self.service_name)?;
        let url = endpoint(&base, RANDOM_PATH);

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(RemoteError::from_send)?;

        let status = res.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        res.json::<Fortune>().await.map_err(RemoteError::from_body)
    }

    /// A live fortune, or the fallback if the store fails or is too slow.
    pub async fn fetch_random(&self) -> Fortune {
        with_fallback(self.timeout, self.try_fetch_random(), |failure| {
            tracing::warn!(
                service = %self.service_name,
                error = %failure,
                "fortune service call failed, serving fallback"
            );
            Fortune::fallback()
        })
        .await
    }
}

// Append `path` to the base URL's path (`Url::join` would drop the last segment).
fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url
}
