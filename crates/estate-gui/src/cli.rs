//! Command-line arguments of the desktop application.

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use estate_client::Transport;

use crate::config::ConfigOverrides;
use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "estate-studio",
    version,
    about = "Estate Studio - browse and search the property catalog"
)]
pub struct Cli {
    /// GraphQL endpoint (overrides settings and ESTATE_GRAPHQL_API_URL).
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Public web address used for "Open in browser" (overrides ESTATE_APP_URL).
    #[arg(long = "app-url", value_name = "URL")]
    pub app_url: Option<String>,

    /// View to open at startup, e.g. "/" or "/property/<id>".
    #[arg(long = "route", value_name = "PATH", default_value = "/")]
    pub route: String,

    /// HTTP method used for GraphQL queries.
    #[arg(long = "transport", value_enum)]
    pub transport: Option<TransportArg>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

impl Cli {
    /// Configuration values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.clone(),
            app_url: self.app_url.clone(),
            transport: self.transport.map(Transport::from),
        }
    }
}

/// CLI transport choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TransportArg {
    Get,
    Post,
}

impl From<TransportArg> for Transport {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Get => Self::Get,
            TransportArg::Post => Self::Post,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "estate-studio",
            "--api-url",
            "https://api.example.com/graphql",
            "--route",
            "/property/p1",
            "--transport",
            "post",
            "-v",
        ]);
        assert_eq!(cli.route, "/property/p1");
        assert!(cli.verbosity.is_present());
        let overrides = cli.overrides();
        assert_eq!(
            overrides.api_url.as_deref(),
            Some("https://api.example.com/graphql")
        );
        assert_eq!(overrides.app_url, None);
        assert_eq!(overrides.transport, Some(Transport::Post));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["estate-studio"]);
        assert_eq!(cli.route, "/");
        assert!(!cli.verbosity.is_present());
        assert_eq!(cli.overrides(), ConfigOverrides::default());
    }
}
