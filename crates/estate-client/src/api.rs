//! GraphQL-backed property source.

use async_trait::async_trait;
use tracing::{debug, info};

use estate_model::{PaginatedResult, Property, PropertyFilters};

use crate::client::GraphQlClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::query::{self, GraphQlRequest};
use crate::source::PropertySource;

/// Property source that talks to the catalog's GraphQL API.
#[derive(Debug)]
pub struct PropertyApi {
    client: GraphQlClient,
}

impl PropertyApi {
    /// Create an API source from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = GraphQlClient::new(config)?;
        info!(endpoint = %client.endpoint(), transport = %config.transport, "Property API configured");
        Ok(Self { client })
    }

    /// Underlying transport.
    pub fn client(&self) -> &GraphQlClient {
        &self.client
    }
}

#[async_trait]
impl PropertySource for PropertyApi {
    async fn list_properties(&self, filters: &PropertyFilters) -> Result<PaginatedResult> {
        let request = GraphQlRequest::list_properties(filters)?;
        let data = self.client.execute(&request).await?;
        let page = query::decode_list(data)?;
        debug!(
            page = page.page,
            items = page.items.len(),
            total = page.total_count,
            "Fetched property page"
        );
        Ok(page)
    }

    async fn property(&self, id: &str) -> Result<Property> {
        let request = GraphQlRequest::get_property(id);
        let data = self.client.execute(&request).await?;
        query::decode_detail(id, data)
    }

    async fn image(&self, url: &str) -> Result<Vec<u8>> {
        self.client.fetch_bytes(url).await
    }
}
