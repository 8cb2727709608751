//! GraphQL documents, request envelopes, and response resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use estate_model::{PaginatedResult, Property, PropertyFilters};

use crate::error::{ClientError, Result};

/// Operation name of the list query.
pub const LIST_PROPERTIES_OPERATION: &str = "GetAllProperties";

/// Operation name of the detail query.
pub const GET_PROPERTY_OPERATION: &str = "GetPropertyById";

/// List query: one page of property summaries plus pagination metadata.
pub const LIST_PROPERTIES_QUERY: &str = r"query GetAllProperties(
  $query: String
  $minPrice: Decimal
  $maxPrice: Decimal
  $page: Int
  $pageSize: Int
) {
  properties(
    query: $query
    minPrice: $minPrice
    maxPrice: $maxPrice
    page: $page
    pageSize: $pageSize
  ) {
    items {
      idProperty
      name
      address
      price
      codeInternal
      year
      idOwner
      firstImage
    }
    totalCount
    page
    pageSize
    totalPages
    hasNextPage
    hasPreviousPage
  }
}";

/// Detail query: one property with images, traces, and owner.
pub const GET_PROPERTY_QUERY: &str = r"query GetPropertyById($id: String!) {
  property(id: $id) {
    idProperty
    name
    address
    price
    codeInternal
    year
    idOwner
    firstImage
    images
    traces {
      idPropertyTrace
      dateSale
      name
      value
      tax
    }
    owner {
      idOwner
      name
      photo
    }
  }
}";

// =============================================================================
// REQUEST
// =============================================================================

/// A GraphQL request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    /// Query document.
    pub query: &'static str,
    /// Operation to execute within the document.
    pub operation_name: &'static str,
    /// Operation variables.
    pub variables: Value,
}

impl GraphQlRequest {
    /// Build the list request. Absent filter fields are not transmitted.
    pub fn list_properties(filters: &PropertyFilters) -> Result<Self> {
        Ok(Self {
            query: LIST_PROPERTIES_QUERY,
            operation_name: LIST_PROPERTIES_OPERATION,
            variables: serde_json::to_value(filters)?,
        })
    }

    /// Build the detail request.
    pub fn get_property(id: &str) -> Self {
        Self {
            query: GET_PROPERTY_QUERY,
            operation_name: GET_PROPERTY_OPERATION,
            variables: serde_json::json!({ "id": id }),
        }
    }

    /// Key identifying this request in the response cache.
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.operation_name, self.variables)
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
    /// Error message.
    pub message: String,
}

/// Raw GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    /// Operation result, `null` when execution failed outright.
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors reported by the server.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Resolve the envelope to its data.
    ///
    /// Partial data is accepted even when errors are present; errors only fail
    /// the request when there is no data at all.
    pub fn into_data(self) -> Result<Value> {
        match self.data {
            Some(data) if !data.is_null() => {
                if !self.errors.is_empty() {
                    tracing::warn!(
                        errors = self.errors.len(),
                        "GraphQL response carried errors alongside data"
                    );
                }
                Ok(data)
            }
            _ if !self.errors.is_empty() => Err(ClientError::GraphQl {
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            }),
            _ => Err(ClientError::Decode("response contained no data".to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListData {
    #[serde(default)]
    properties: Option<PaginatedResult>,
}

#[derive(Debug, Deserialize)]
struct DetailData {
    #[serde(default)]
    property: Option<Property>,
}

/// Decode list data. A missing `properties` field normalizes to an empty page.
pub fn decode_list(data: Value) -> Result<PaginatedResult> {
    let list: ListData = serde_json::from_value(data)?;
    Ok(list.properties.unwrap_or_default())
}

/// Decode detail data. A `null` property is reported as not found.
pub fn decode_detail(id: &str, data: Value) -> Result<Property> {
    let detail: DetailData = serde_json::from_value(data)?;
    detail.property.ok_or_else(|| ClientError::NotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_request_drops_absent_fields() {
        let filters = PropertyFilters {
            query: None,
            min_price: Some(1000.0),
            max_price: None,
            page: 2,
            page_size: 12,
        };
        let request = GraphQlRequest::list_properties(&filters).unwrap();
        assert_eq!(
            request.variables,
            json!({ "minPrice": 1000.0, "page": 2, "pageSize": 12 })
        );
        assert_eq!(request.operation_name, "GetAllProperties");
    }

    #[test]
    fn test_cache_key_distinguishes_variables() {
        let a = GraphQlRequest::get_property("a");
        let b = GraphQlRequest::get_property("b");
        assert_ne!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), GraphQlRequest::get_property("a").cache_key());
    }

    #[test]
    fn test_errors_without_data_fail() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "boom" }]
        }))
        .unwrap();
        assert_eq!(
            response.into_data(),
            Err(ClientError::GraphQl {
                messages: vec!["boom".to_string()]
            })
        );
    }

    #[test]
    fn test_partial_data_is_accepted() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": { "properties": null },
            "errors": [{ "message": "owner resolver failed" }]
        }))
        .unwrap();
        let page = decode_list(response.into_data().unwrap()).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_null_property_is_not_found() {
        let err = decode_detail("missing", json!({ "property": null })).unwrap_err();
        assert_eq!(
            err,
            ClientError::NotFound {
                id: "missing".to_string()
            }
        );
    }
}
