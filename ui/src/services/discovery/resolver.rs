//! Logical service name -> base URL lookup.
//!
//! The fortune store is addressed by name (`fortune`), never by host. The
//! resolver is the seam where a real registry would plug in; the static
//! implementation reads a `name=url,name=url` list from configuration. A name
//! listed more than once has several instances; each lookup picks one of them
//! at random, spreading calls across the instances.
use std::collections::HashMap;
use std::fmt::Debug;
use std::str::FromStr;

use rand::seq::IndexedRandom;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("unknown service: {0}")]
    Unknown(String),
    #[error("malformed registry entry: {0}")]
    MalformedEntry(String),
    #[error("invalid url for service {name}: {reason}")]
    InvalidUrl { name: String, reason: String },
}

pub trait ServiceResolver: Debug + Send + Sync + 'static {
    fn resolve(&self, name: &str) -> Result<Url, DiscoveryError>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    services: HashMap<String, Vec<Url>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `base` as an instance of `name`; existing instances are kept.
    pub fn with_service(mut self, name: impl Into<String>, base: Url) -> Self {
        let instances = self.services.entry(name.into()).or_default();
        if !instances.contains(&base) {
            instances.push(base);
        }
        self
    }

    pub fn instances(&self, name: &str) -> &[Url] {
        self.services.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceResolver for StaticResolver {
    fn resolve(&self, name: &str) -> Result<Url, DiscoveryError> {
        self.instances(name)
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| DiscoveryError::Unknown(name.to_string()))
    }
}

impl FromStr for StaticResolver {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut resolver = Self::new();

        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, raw_url) = entry
                .split_once('=')
                .map(|(n, u)| (n.trim(), u.trim()))
                .filter(|(n, u)| !n.is_empty() && !u.is_empty())
                .ok_or_else(|| DiscoveryError::MalformedEntry(entry.to_string()))?;

            let base = Url::parse(raw_url).map_err(|e| DiscoveryError::InvalidUrl {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
            if !matches!(base.scheme(), "http" | "https") {
                return Err(DiscoveryError::InvalidUrl {
                    name: name.to_string(),
                    reason: format!("unsupported scheme {}", base.scheme()),
                });
            }

            resolver = resolver.with_service(name, base);
        }

        Ok(resolver)
    }
}
