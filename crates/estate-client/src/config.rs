//! Configuration types for the data-fetch adapter.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5189/graphql";

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How long a successful response is reused for an identical request.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// How queries are sent over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// `GET` with `query`, `operationName`, and `variables` URL parameters.
    #[default]
    Get,
    /// `POST` with a JSON body.
    Post,
}

impl Transport {
    /// Get a human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings for [`GraphQlClient`](crate::GraphQlClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// HTTP method used for queries.
    pub transport: Transport,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Response cache lifetime. `Duration::ZERO` disables caching.
    pub cache_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport: Transport::default(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl ClientConfig {
    /// Create a config for the given endpoint with default settings.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the cache lifetime.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
