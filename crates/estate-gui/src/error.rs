//! GUI-specific error types.
//!
//! A single error type for GUI operations. It crosses the message boundary
//! (it is `Clone`) and carries enough context for a user-facing message.

use estate_client::ClientError;
use estate_core::RouteError;
use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // CONFIGURATION
    // =========================================================================
    /// A configuration value is unusable.
    #[error("Invalid configuration: {reason}")]
    Config {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    /// The start path does not name a view.
    #[error("Invalid start path: {0}")]
    Route(#[from] RouteError),

    // =========================================================================
    // CATALOG
    // =========================================================================
    /// The property service request failed.
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// A photo was downloaded but could not be decoded.
    #[error("Could not decode image {url}: {reason}")]
    ImageDecode {
        /// Image address.
        url: String,
        /// Decoder message.
        reason: String,
    },

    // =========================================================================
    // DESKTOP INTEGRATION
    // =========================================================================
    /// The system browser could not be opened.
    #[error("Could not open {url}: {reason}")]
    OpenBrowser {
        /// Address that was being opened.
        url: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }

    /// Suggested fix, if one exists.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config { .. } => Some(
                "Check settings.toml, the ESTATE_* environment variables, and command-line flags.",
            ),
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Route(_) => Some("Use / for the listing or /property/<id> for a property."),
            Self::Fetch(err) if err.is_retryable() => {
                Some("Go back to the listing and open the property again.")
            }
            Self::Fetch(_) | Self::ImageDecode { .. } | Self::OpenBrowser { .. } => None,
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Configuration error from any displayable reason.
    pub fn config(reason: impl std::fmt::Display) -> Self {
        Self::Config {
            reason: reason.to_string(),
        }
    }

    /// Image decoding error.
    pub fn image_decode(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::ImageDecode {
            url: url.into(),
            reason: err.to_string(),
        }
    }
}
