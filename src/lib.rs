//! # hips-survey
//!
//! Reader for HiPS (Hierarchical Progressive Survey) metadata.
//!
//! A HiPS survey publishes a `properties` file of `key = value` lines that
//! describes it: title, coordinate frame, deepest order, tile format and
//! where its tiles live. Survey registries such as the CDS MocServer serve
//! lists of such records separated by blank lines.
//!
//! ## Features
//!
//! - **Lenient parsing**: malformed lines are skipped, the rest is kept
//! - **Typed accessors**: conversion happens on access and reports missing
//!   or malformed fields as [`PropertyError`]
//! - **Tile addressing**: `{base}/Norder{order}/Dir{dir}/Npix{ipix}.{ext}`
//! - **Survey lists**: parse a whole registry dump and query it as a sparse
//!   table
//! - **Pluggable sources**: HTTP, local files or anything implementing
//!   [`PropertiesSource`]
//!
//! ## Architecture
//!
//! - [`properties`] - single-record parser, typed accessors, tile URLs
//! - [`catalog`] - survey lists and the aggregated [`SurveyTable`]
//! - [`io`] - sources that retrieve the raw text
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use hips_survey::{HipsSurveyProperties, HipsSurveyPropertiesList, HttpSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpSource::default();
//!
//!     let dss = HipsSurveyProperties::load(
//!         &source,
//!         "http://alasky.unistra.fr/DSS/DSSColor/properties",
//!     )
//!     .await?;
//!     println!("{}", dss.tile_access_url(dss.hips_order()?, 23456)?);
//!
//!     let surveys = HipsSurveyPropertiesList::fetch(&source, None).await?;
//!     println!("{} surveys", surveys.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod io;
pub mod properties;

// Re-export commonly used types
pub use catalog::{HipsSurveyPropertiesList, SurveyTable};
pub use config::{Cli, ClientConfig, Command, ListConfig, PropertiesConfig, TileUrlConfig};
pub use error::{IoError, PropertyError, SurveyError};
pub use io::{decode_text, AutoSource, FileSource, HttpSource, Location, PropertiesSource};
pub use properties::{
    directory_index, tile_access_url, tile_url, HipsFrame, HipsSurveyProperties, TileFormat,
    DEFAULT_TILE_WIDTH, DIRECTORY_BUCKET_SIZE,
};
