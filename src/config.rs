//! Configuration for the `hips-survey` command line tool.
//!
//! Options can be given as command-line arguments or, for the HTTP client
//! and catalog settings, as environment variables with the `HIPS_` prefix:
//!
//! - `HIPS_TIMEOUT` - HTTP request timeout in seconds (default: 30)
//! - `HIPS_USER_AGENT` - User-Agent header (default: hips-survey/<version>)
//! - `HIPS_CATALOG_URL` - Survey list URL used by `list` (default: CDS MocServer)
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use hips_survey::config::{Cli, Command};
//!
//! let cli = Cli::parse();
//! if let Command::List(config) = &cli.command {
//!     println!("Listing surveys from {}", config.location());
//! }
//! ```

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::properties::{keys, split_property_line, TileFormat};

// =============================================================================
// Default Values
// =============================================================================

/// Default survey list: every HiPS image survey known to the CDS MocServer.
pub const DEFAULT_CATALOG_URL: &str = "http://alasky.unistra.fr/MocServer/query?\
hips_service_url=*&dataproduct_type=!catalog&dataproduct_type=!cube&get=record";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = concat!("hips-survey/", env!("CARGO_PKG_VERSION"));

/// Columns shown by `list` when none are requested.
pub const DEFAULT_LIST_COLUMNS: &[&str] =
    &[keys::CREATOR_DID, keys::OBS_TITLE, keys::HIPS_ORDER];

// =============================================================================
// CLI Arguments
// =============================================================================

/// hips-survey - Inspect HiPS survey properties and survey lists.
#[derive(Parser, Debug, Clone)]
#[command(name = "hips-survey")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub client: ClientConfig,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the typed fields of a properties file.
    Properties(PropertiesConfig),

    /// Compute the URL of a tile.
    TileUrl(TileUrlConfig),

    /// List surveys from a survey list.
    List(ListConfig),
}

/// HTTP client settings shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct ClientConfig {
    /// HTTP request timeout in seconds.
    #[arg(
        long = "timeout",
        global = true,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        env = "HIPS_TIMEOUT"
    )]
    pub timeout_secs: u64,

    /// User-Agent header sent with HTTP requests.
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT, env = "HIPS_USER_AGENT")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Arguments of the `properties` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PropertiesConfig {
    /// URL or path of the properties file.
    pub location: String,

    /// Print all raw entries as JSON instead of the typed summary.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Arguments of the `tile-url` subcommand.
#[derive(Args, Debug, Clone)]
pub struct TileUrlConfig {
    /// URL or path of the properties file.
    pub location: String,

    /// HiPS order; defaults to the survey's `hips_order`.
    #[arg(long)]
    pub order: Option<u32>,

    /// Tile index at the given order.
    #[arg(long)]
    pub ipix: u64,

    /// Tile format (jpeg, png, fits); defaults to the first listed format.
    #[arg(long)]
    pub format: Option<TileFormat>,

    /// Print only the directory URL.
    #[arg(long, default_value_t = false)]
    pub directory_only: bool,
}

/// Arguments of the `list` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ListConfig {
    /// URL of the survey list.
    #[arg(long, default_value = DEFAULT_CATALOG_URL, env = "HIPS_CATALOG_URL")]
    pub url: String,

    /// Read the survey list from a local file instead of `--url`.
    #[arg(long)]
    pub file: Option<String>,

    /// Columns to show (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Only show surveys where a column has a value, as `key=value`.
    #[arg(long = "where")]
    pub filter: Option<String>,

    /// Maximum number of rows to show.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print the table as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl ListConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.parse_filter()?;

        if self.limit == Some(0) {
            return Err("limit must be greater than 0".to_string());
        }
        if let Some(columns) = &self.columns {
            if columns.iter().all(|c| c.trim().is_empty()) {
                return Err("columns must name at least one column".to_string());
            }
        }
        Ok(())
    }

    /// Where to read the survey list from; `--file` wins over `--url`.
    pub fn location(&self) -> &str {
        self.file.as_deref().unwrap_or(&self.url)
    }

    /// Parse `--where key=value` with the properties line rules.
    pub fn parse_filter(&self) -> Result<Option<(String, String)>, String> {
        match &self.filter {
            None => Ok(None),
            Some(filter) => split_property_line(filter)
                .map(|(k, v)| Some((k.to_string(), v.to_string())))
                .ok_or_else(|| format!("invalid filter '{}': expected key=value", filter)),
        }
    }

    /// Requested columns, or the default set.
    pub fn columns_or_default(&self) -> Vec<&str> {
        match &self.columns {
            Some(columns) => columns
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect(),
            None => DEFAULT_LIST_COLUMNS.to_vec(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
