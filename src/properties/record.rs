//! A single HiPS properties record.
//!
//! [`HipsSurveyProperties`] stores every entry of a properties block as raw
//! text. Typed accessors convert on demand and report a [`PropertyError`]
//! when the backing key is missing or malformed, so a record with a few
//! broken fields is still usable for the fields that are fine.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{IoError, PropertyError};
use crate::io::{decode_text, FileSource, PropertiesSource};

use super::frame::HipsFrame;
use super::keys;
use super::parser::parse_properties;
use super::tile::{self, TileFormat};

/// Tile width used when `hips_tile_width` is `0`.
pub const DEFAULT_TILE_WIDTH: u32 = 512;

/// HiPS survey properties.
///
/// # Example
///
/// ```
/// use hips_survey::HipsSurveyProperties;
///
/// let properties = HipsSurveyProperties::parse(
///     "obs_title = DSS colored\n\
///      hips_order = 9\n\
///      moc_access_url = http://alasky.u-strasbg.fr/DSS/DSSColor/Moc.fits\n",
/// );
///
/// assert_eq!(properties.title().unwrap(), "DSS colored");
/// assert_eq!(properties.hips_order().unwrap(), 9);
/// assert_eq!(
///     properties.tile_access_url(9, 23456).unwrap(),
///     "http://alasky.u-strasbg.fr/DSS/DSSColor/Norder9/Dir20000/"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HipsSurveyProperties {
    data: IndexMap<String, String>,
}

impl HipsSurveyProperties {
    /// Parse a properties block.
    ///
    /// Never fails: malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        Self {
            data: parse_properties(text),
        }
    }

    /// Load and parse a properties block from any source.
    pub async fn load<S>(source: &S, location: &str) -> Result<Self, IoError>
    where
        S: PropertiesSource + ?Sized,
    {
        let bytes = source.fetch(location).await?;
        Ok(Self::parse(&decode_text(&bytes)))
    }

    /// Read a properties file from the local filesystem.
    pub async fn read(path: &str) -> Result<Self, IoError> {
        Self::load(&FileSource::new(), path).await
    }

    // =========================================================================
    // Raw access
    // =========================================================================

    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entries in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The underlying ordered mapping.
    pub fn data(&self) -> &IndexMap<String, String> {
        &self.data
    }

    fn require(&self, key: &'static str) -> Result<&str, PropertyError> {
        self.get(key).ok_or(PropertyError::MissingField(key))
    }

    fn require_parsed<T>(&self, key: &'static str) -> Result<T, PropertyError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.require(key)?;
        value.parse().map_err(|e: T::Err| PropertyError::InvalidFormat {
            key,
            value: value.to_string(),
            reason: e.to_string(),
        })
    }

    // =========================================================================
    // Typed accessors
    // =========================================================================

    /// Survey title (`obs_title`).
    pub fn title(&self) -> Result<&str, PropertyError> {
        self.require(keys::OBS_TITLE)
    }

    /// HiPS version (`hips_version`), as written in the file.
    ///
    /// Not converted to a number: `1.4` and `1.40` are different strings and
    /// a float would hide that. Callers compare versions themselves.
    pub fn hips_version(&self) -> Result<&str, PropertyError> {
        self.require(keys::HIPS_VERSION)
    }

    /// Coordinate frame name (`hips_frame`).
    pub fn hips_frame(&self) -> Result<&str, PropertyError> {
        self.require(keys::HIPS_FRAME)
    }

    /// Coordinate frame as an enum.
    pub fn frame(&self) -> Result<HipsFrame, PropertyError> {
        self.hips_frame()?.parse()
    }

    /// Astropy frame name equivalent to `hips_frame`.
    pub fn astropy_frame(&self) -> Result<&'static str, PropertyError> {
        Ok(self.frame()?.astropy_frame())
    }

    /// Deepest HiPS order (`hips_order`).
    pub fn hips_order(&self) -> Result<u32, PropertyError> {
        self.require_parsed(keys::HIPS_ORDER)
    }

    /// Tile format list (`hips_tile_format`), as written in the file.
    pub fn tile_format(&self) -> Result<&str, PropertyError> {
        self.require(keys::HIPS_TILE_FORMAT)
    }

    /// Parsed tile formats, in the order listed.
    pub fn tile_formats(&self) -> Result<Vec<TileFormat>, PropertyError> {
        TileFormat::parse_list(self.tile_format()?)
    }

    /// Base URL of the survey: `moc_access_url` without its last segment.
    pub fn base_url(&self) -> Result<&str, PropertyError> {
        let moc_url = self.require(keys::MOC_ACCESS_URL)?;
        Ok(moc_url
            .rsplit_once('/')
            .map(|(parent, _)| parent)
            .unwrap_or(moc_url))
    }

    /// Tile width in pixels (`hips_tile_width`); `0` means the default 512.
    pub fn tile_width(&self) -> Result<u32, PropertyError> {
        let width: u32 = self.require_parsed(keys::HIPS_TILE_WIDTH)?;
        Ok(if width == 0 { DEFAULT_TILE_WIDTH } else { width })
    }

    /// HiPS service URL (`hips_service_url`).
    pub fn hips_service_url(&self) -> Result<&str, PropertyError> {
        self.require(keys::HIPS_SERVICE_URL)
    }

    // =========================================================================
    // Tile addressing
    // =========================================================================

    /// Directory index containing a tile.
    pub fn directory(&self, ipix: u64) -> u64 {
        tile::directory_index(ipix)
    }

    /// URL of the directory holding a tile.
    pub fn tile_access_url(&self, order: u32, ipix: u64) -> Result<String, PropertyError> {
        Ok(tile::tile_access_url(self.base_url()?, order, ipix))
    }

    /// URL of a tile file.
    pub fn tile_url(
        &self,
        order: u32,
        ipix: u64,
        format: TileFormat,
    ) -> Result<String, PropertyError> {
        Ok(tile::tile_url(self.base_url()?, order, ipix, format))
    }
}

impl From<IndexMap<String, String>> for HipsSurveyProperties {
    fn from(data: IndexMap<String, String>) -> Self {
        Self { data }
    }
}
