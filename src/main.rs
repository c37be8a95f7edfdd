//! hips-survey - Inspect HiPS survey properties and survey lists.
//!
//! This binary wires the CLI configuration to the library loaders.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hips_survey::{
    config::{Cli, ClientConfig, Command, ListConfig, PropertiesConfig, TileUrlConfig},
    properties::keys,
    AutoSource, FileSource, HipsSurveyProperties, HipsSurveyPropertiesList, HttpSource,
    PropertyError, SurveyError, SurveyTable,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = cli.client.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let source = match build_source(&cli.client) {
        Ok(source) => source,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Properties(config) => run_properties(&source, config).await,
        Command::TileUrl(config) => run_tile_url(&source, config).await,
        Command::List(config) => {
            let filter = match config.validate().and_then(|()| config.parse_filter()) {
                Ok(filter) => filter,
                Err(e) => {
                    error!("Configuration error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            run_list(&source, config, filter).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so that stdout stays clean for JSON output.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "hips_survey=debug"
    } else {
        "hips_survey=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_source(config: &ClientConfig) -> Result<AutoSource, SurveyError> {
    let http = HttpSource::new(config.timeout(), &config.user_agent)?;
    debug!(
        timeout_secs = config.timeout_secs,
        user_agent = %config.user_agent,
        "HTTP client ready"
    );
    Ok(AutoSource::new(http, FileSource::new()))
}

// =============================================================================
// Properties Command
// =============================================================================

async fn run_properties(source: &AutoSource, config: PropertiesConfig) -> Result<(), SurveyError> {
    let properties = HipsSurveyProperties::load(source, &config.location).await?;
    info!(entries = properties.len(), "Loaded {}", config.location);

    if config.json {
        println!("{}", to_json(&properties)?);
        return Ok(());
    }

    print_field("Title", properties.title());
    print_field("HiPS version", properties.hips_version());
    print_field("Frame", properties.hips_frame());
    print_field("Astropy frame", properties.astropy_frame());
    print_field("Order", properties.hips_order());
    print_field("Tile format", properties.tile_format());
    print_field("Tile width", properties.tile_width());
    print_field("Base URL", properties.base_url());
    print_field("Service URL", properties.hips_service_url());

    Ok(())
}

/// Print one typed field, or the reason it is unavailable.
fn print_field<T: std::fmt::Display>(label: &str, value: Result<T, PropertyError>) {
    match value {
        Ok(value) => println!("{:<14} {}", label, value),
        Err(e) => println!("{:<14} ({})", label, e),
    }
}

// =============================================================================
// Tile URL Command
// =============================================================================

async fn run_tile_url(source: &AutoSource, config: TileUrlConfig) -> Result<(), SurveyError> {
    let properties = HipsSurveyProperties::load(source, &config.location).await?;

    let order = match config.order {
        Some(order) => order,
        None => properties.hips_order()?,
    };

    let url = if config.directory_only {
        properties.tile_access_url(order, config.ipix)?
    } else {
        let format = match config.format {
            Some(format) => format,
            None => properties
                .tile_formats()?
                .first()
                .copied()
                .ok_or(PropertyError::MissingField(keys::HIPS_TILE_FORMAT))?,
        };
        properties.tile_url(order, config.ipix, format)?
    };

    println!("{}", url);
    Ok(())
}

// =============================================================================
// List Command
// =============================================================================

async fn run_list(
    source: &AutoSource,
    config: ListConfig,
    filter: Option<(String, String)>,
) -> Result<(), SurveyError> {
    let surveys = HipsSurveyPropertiesList::load(source, config.location()).await?;
    info!(surveys = surveys.len(), "Loaded survey list");

    let table = list_table(&surveys, &config, filter.as_ref());
    let total = table.row_count();
    let table = match config.limit {
        Some(limit) => table.head(limit),
        None => table,
    };

    if config.json {
        println!("{}", to_json(&table)?);
    } else {
        print_table(&table, total);
    }

    Ok(())
}

/// Filter then project the survey table, before any row limit.
fn list_table(
    surveys: &HipsSurveyPropertiesList,
    config: &ListConfig,
    filter: Option<&(String, String)>,
) -> SurveyTable {
    let mut table = surveys.as_table();
    if let Some((key, value)) = filter {
        table = table.filter_eq(key, value);
        debug!(rows = table.row_count(), "Applied filter {}={}", key, value);
    }
    table.select(&config.columns_or_default())
}

/// Print a table as tab-separated text, missing cells as `-`.
///
/// `total` is the row count before the limit was applied.
fn print_table(table: &SurveyTable, total: usize) {
    println!("{}", table.columns().join("\t"));

    for row in table.rows() {
        let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("-")).collect();
        println!("{}", cells.join("\t"));
    }

    if total > table.row_count() {
        println!("... {} more", total - table.row_count());
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, SurveyError> {
    serde_json::to_string_pretty(value).map_err(|e| SurveyError::Output(e.to_string()))
}
