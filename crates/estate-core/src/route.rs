//! Addressable views.
//!
//! Two paths exist: `/` for the listing and `/property/{id}` for a detail
//! view. The identifier is the only state a path carries.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Path prefix of detail views.
const DETAIL_PREFIX: &str = "/property/";

/// A view the application can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Property listing at `/`.
    #[default]
    Listing,
    /// Property detail at `/property/{id}`.
    Detail(String),
}

/// Errors from parsing a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RouteError {
    /// The path does not start with `/`.
    #[error("path must start with '/': {0}")]
    NotAbsolute(String),

    /// A detail path without an identifier.
    #[error("missing property id in path: {0}")]
    MissingId(String),

    /// No view is registered for the path.
    #[error("no view for path: {0}")]
    Unknown(String),
}

impl Route {
    /// Parse a path. A trailing slash and a query string are ignored.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let without_query = trimmed.split(['?', '#']).next().unwrap_or_default();
        if !without_query.starts_with('/') {
            return Err(RouteError::NotAbsolute(path.to_string()));
        }

        let normalized = without_query.trim_end_matches('/');
        if normalized.is_empty() {
            return Ok(Self::Listing);
        }

        match normalized.strip_prefix(DETAIL_PREFIX) {
            Some(id) if id.is_empty() => Err(RouteError::MissingId(path.to_string())),
            Some(id) if id.contains('/') => Err(RouteError::Unknown(path.to_string())),
            Some(id) => Ok(Self::Detail(id.to_string())),
            None if normalized == DETAIL_PREFIX.trim_end_matches('/') => {
                Err(RouteError::MissingId(path.to_string()))
            }
            None => Err(RouteError::Unknown(path.to_string())),
        }
    }

    /// Path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Listing => "/".to_string(),
            Self::Detail(id) => format!("{DETAIL_PREFIX}{id}"),
        }
    }

    /// Absolute web address of this route under `base`.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Property detail route.
    pub fn detail(id: impl Into<String>) -> Self {
        Self::Detail(id.into())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing() {
        assert_eq!(Route::parse("/"), Ok(Route::Listing));
        assert_eq!(Route::parse("/?page=2"), Ok(Route::Listing));
    }

    #[test]
    fn test_parse_detail() {
        assert_eq!(Route::parse("/property/abc123"), Ok(Route::detail("abc123")));
        assert_eq!(Route::parse("/property/abc123/"), Ok(Route::detail("abc123")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Route::parse("property/1"), Err(RouteError::NotAbsolute(_))));
        assert!(matches!(Route::parse("/property/"), Err(RouteError::MissingId(_))));
        assert!(matches!(Route::parse("/property"), Err(RouteError::MissingId(_))));
        assert!(matches!(Route::parse("/owners/1"), Err(RouteError::Unknown(_))));
        assert!(matches!(Route::parse("/property/1/edit"), Err(RouteError::Unknown(_))));
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Listing, Route::detail("64f1a2")] {
            assert_eq!(Route::parse(&route.path()), Ok(route.clone()));
        }
        assert_eq!(Route::detail("x").to_string(), "/property/x");
    }

    #[test]
    fn test_url() {
        assert_eq!(Route::Listing.url("http://localhost:5173"), "http://localhost:5173/");
        assert_eq!(
            Route::detail("p1").url("https://homes.example.com/"),
            "https://homes.example.com/property/p1"
        );
    }
}
