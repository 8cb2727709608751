//! Property, owner, and transaction trace types.
//!
//! Field names follow the API's camelCase schema (`idProperty`, `firstImage`,
//! `dateSale`, ...). String fields that the API may return as `null` decode to
//! an empty string rather than failing the whole response.

use serde::{Deserialize, Deserializer, Serialize};

/// A listed real-estate unit.
///
/// List queries return the summary fields only. Detail queries additionally
/// populate `images`, `owner`, and `traces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique identifier.
    #[serde(rename = "idProperty")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Street address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// Price, currency-agnostic. Formatted at render time.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// Internal reference code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code_internal: String,
    /// Construction year.
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    /// Owner reference.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_owner: String,
    /// Primary image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_image: Option<String>,
    /// All image URLs (detail responses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Embedded owner (detail responses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    /// Transaction history (detail responses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traces: Option<Vec<PropertyTrace>>,
}

impl Property {
    /// Create a summary property with only id, name, and price set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            price,
            code_internal: String::new(),
            year: 0,
            id_owner: String::new(),
            first_image: None,
            images: None,
            owner: None,
            traces: None,
        }
    }

    /// Primary image URL, if one is present and non-blank.
    pub fn primary_image(&self) -> Option<&str> {
        self.first_image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Secondary gallery images.
    ///
    /// The first entry of `images` duplicates the primary image, so the
    /// gallery starts at the second entry.
    pub fn secondary_images(&self) -> &[String] {
        match self.images.as_deref() {
            Some([_, rest @ ..]) => rest,
            _ => &[],
        }
    }

    /// Transaction traces, empty when the field was absent.
    pub fn traces(&self) -> &[PropertyTrace] {
        self.traces.as_deref().unwrap_or_default()
    }

    /// Whether the trace section has anything to show.
    pub fn has_traces(&self) -> bool {
        !self.traces().is_empty()
    }
}

/// Property owner, embedded by reference in detail responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Unique identifier.
    #[serde(rename = "idOwner")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Photo URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
}

/// A historical sale recorded against a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTrace {
    /// Unique identifier.
    #[serde(rename = "idPropertyTrace")]
    pub id: String,
    /// Sale date as sent by the API (ISO 8601 date or date-time).
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_sale: String,
    /// Transaction name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Sale value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    /// Tax paid on the sale.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tax: f64,
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
