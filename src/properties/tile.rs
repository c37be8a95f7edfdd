//! HiPS tile addressing.
//!
//! Tiles of a HiPS survey are stored under
//! `{base_url}/Norder{order}/Dir{dir}/Npix{ipix}.{ext}`, where `dir` is the
//! lower bound of the bucket of 10000 consecutive tile indices containing
//! `ipix`:
//!
//! ```text
//! ipix 0..=9999      -> Dir0
//! ipix 10000..=19999 -> Dir10000
//! ipix 23456         -> Dir20000
//! ```
//!
//! These functions perform no I/O.

use std::fmt;
use std::str::FromStr;

use crate::error::PropertyError;

/// Number of consecutive tile indices grouped in one directory.
pub const DIRECTORY_BUCKET_SIZE: u64 = 10_000;

/// Directory index containing a tile.
#[inline]
pub fn directory_index(ipix: u64) -> u64 {
    (ipix / DIRECTORY_BUCKET_SIZE) * DIRECTORY_BUCKET_SIZE
}

/// URL of the directory holding a tile, with a trailing slash.
pub fn tile_access_url(base_url: &str, order: u32, ipix: u64) -> String {
    format!("{}/Norder{}/Dir{}/", base_url, order, directory_index(ipix))
}

/// File name of a tile inside its directory, e.g. `Npix23456.jpg`.
pub fn tile_file_name(ipix: u64, format: TileFormat) -> String {
    format!("Npix{}.{}", ipix, format.extension())
}

/// Full URL of a tile file.
pub fn tile_url(base_url: &str, order: u32, ipix: u64, format: TileFormat) -> String {
    let mut url = tile_access_url(base_url, order, ipix);
    url.push_str(&tile_file_name(ipix, format));
    url
}

/// Tile encoding listed in `hips_tile_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFormat {
    Jpeg,
    Png,
    Fits,
}

impl TileFormat {
    /// Name used in properties files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileFormat::Jpeg => "jpeg",
            TileFormat::Png => "png",
            TileFormat::Fits => "fits",
        }
    }

    /// File extension of tiles in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            TileFormat::Jpeg => "jpg",
            TileFormat::Png => "png",
            TileFormat::Fits => "fits",
        }
    }

    /// Parse the whitespace-separated list found in `hips_tile_format`.
    pub fn parse_list(value: &str) -> Result<Vec<TileFormat>, PropertyError> {
        value.split_whitespace().map(str::parse::<TileFormat>).collect()
    }
}

impl FromStr for TileFormat {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(TileFormat::Jpeg),
            "png" => Ok(TileFormat::Png),
            "fits" => Ok(TileFormat::Fits),
            _ => Err(PropertyError::UnknownTileFormat(s.to_string())),
        }
    }
}

impl fmt::Display for TileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
