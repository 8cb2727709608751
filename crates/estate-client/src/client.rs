//! HTTP transport for GraphQL requests.
//!
//! Sends [`GraphQlRequest`]s to the configured endpoint and resolves the
//! response envelope. Successful responses are cached for a short time so that
//! flipping back to an earlier page or reopening a property does not hit the
//! network again.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::config::{ClientConfig, Transport};
use crate::error::{ClientError, Result};
use crate::query::{GraphQlRequest, GraphQlResponse};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("estate-studio/", env!("CARGO_PKG_VERSION"));

/// Cached response data.
struct CachedData {
    /// The resolved `data` value.
    data: Value,
    /// When the entry was stored.
    fetched_at: Instant,
}

/// GraphQL-over-HTTP client.
pub struct GraphQlClient {
    client: reqwest::Client,
    endpoint: Url,
    transport: Transport,
    cache_ttl: Duration,
    cache: Mutex<HashMap<String, CachedData>>,
}

impl std::fmt::Debug for GraphQlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQlClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("transport", &self.transport)
            .field("cache_ttl", &self.cache_ttl)
            .finish_non_exhaustive()
    }
}

impl GraphQlClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ClientError::InvalidEndpoint(format!("{}: {e}", config.endpoint)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            transport: config.transport,
            cache_ttl: config.cache_ttl,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Execute a request, serving it from the cache when possible.
    pub async fn execute(&self, request: &GraphQlRequest) -> Result<Value> {
        let key = request.cache_key();
        if let Some(data) = self.cached(&key) {
            debug!(operation = request.operation_name, "Using cached response");
            return Ok(data);
        }

        let data = self.execute_uncached(request).await?;
        self.store(key, data.clone());
        Ok(data)
    }

    /// Execute a request against the network, bypassing the cache.
    pub async fn execute_uncached(&self, request: &GraphQlRequest) -> Result<Value> {
        debug!(
            operation = request.operation_name,
            transport = %self.transport,
            "Sending GraphQL request"
        );

        let builder = match self.transport {
            Transport::Get => self.client.get(self.get_url(request)?),
            Transport::Post => self.client.post(self.endpoint.clone()).json(request),
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("").to_string());
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GraphQlResponse = response.json().await?;
        envelope.into_data()
    }

    /// Download raw bytes (used for property images).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url).map_err(|e| ClientError::InvalidEndpoint(format!("{url}: {e}")))?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("").to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Build the URL for a GET request.
    pub fn get_url(&self, request: &GraphQlRequest) -> Result<Url> {
        let variables = serde_json::to_string(&request.variables)?;
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", request.query)
            .append_pair("operationName", request.operation_name)
            .append_pair("variables", &variables);
        Ok(url)
    }

    fn cached(&self, key: &str) -> Option<Value> {
        if self.cache_ttl.is_zero() {
            return None;
        }
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.cache_ttl)
            .map(|entry| entry.data.clone())
    }

    fn store(&self, key: String, data: Value) {
        if self.cache_ttl.is_zero() {
            return;
        }
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        let ttl = self.cache_ttl;
        cache.retain(|_, entry| entry.fetched_at.elapsed() < ttl);
        cache.insert(
            key,
            CachedData {
                data,
                fetched_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = GraphQlClient::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_get_url_encodes_request() {
        let client = GraphQlClient::new(&ClientConfig::default()).unwrap();
        let request = GraphQlRequest::get_property("abc");
        let url = client.get_url(&request).unwrap();

        let pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["operationName"], "GetPropertyById");
        assert_eq!(pairs["variables"], r#"{"id":"abc"}"#);
        assert!(pairs["query"].starts_with("query GetPropertyById"));
        assert_eq!(url.path(), "/graphql");
    }

    #[test]
    fn test_cache_round_trip_and_clear() {
        let client = GraphQlClient::new(&ClientConfig::default()).unwrap();
        client.store("k".to_string(), serde_json::json!({ "a": 1 }));
        assert_eq!(client.cached("k"), Some(serde_json::json!({ "a": 1 })));

        client.clear_cache();
        assert_eq!(client.cached("k"), None);
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let config = ClientConfig::default().with_cache_ttl(Duration::ZERO);
        let client = GraphQlClient::new(&config).unwrap();
        client.store("k".to_string(), serde_json::json!(1));
        assert_eq!(client.cached("k"), None);
    }
}
