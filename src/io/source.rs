use std::borrow::Cow;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::error::IoError;

use super::{FileSource, HttpSource};

/// Trait for retrieving the raw bytes of a properties file or survey list.
///
/// This abstraction keeps parsing independent of where the text comes from
/// (HTTP, local disk, an in-memory fixture in tests). Implementations must
/// return the complete resource.
#[async_trait]
pub trait PropertiesSource: Send + Sync {
    /// Retrieve the full contents at `location`.
    async fn fetch(&self, location: &str) -> Result<Bytes, IoError>;

    /// Short name of the source kind (for logging).
    fn name(&self) -> &str;
}

/// Decode bytes as UTF-8, replacing invalid sequences.
///
/// Upstream survey lists occasionally carry stray Latin-1 bytes; decoding
/// never fails so that the rest of the list stays readable.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

// =============================================================================
// Location
// =============================================================================

/// Where a properties resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// `http://` or `https://` URL
    Remote(Url),
    /// Anything else, treated as a filesystem path
    Local(String),
}

impl Location {
    /// Classify a location string.
    ///
    /// Only `http` and `https` URLs are remote; `file:` URLs and Windows
    /// drive paths such as `C:\data\properties` are local.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Location::Remote(url),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Location::Local(path.to_string_lossy().into_owned()),
                Err(()) => Location::Local(location.to_string()),
            },
            _ => Location::Local(location.to_string()),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Location::Remote(_))
    }
}

// =============================================================================
// AutoSource
// =============================================================================

/// Source that dispatches to HTTP or the filesystem based on the location.
#[derive(Debug, Clone, Default)]
pub struct AutoSource {
    http: HttpSource,
    file: FileSource,
}

impl AutoSource {
    pub fn new(http: HttpSource, file: FileSource) -> Self {
        Self { http, file }
    }

    /// The HTTP source used for remote locations.
    pub fn http(&self) -> &HttpSource {
        &self.http
    }
}

#[async_trait]
impl PropertiesSource for AutoSource {
    async fn fetch(&self, location: &str) -> Result<Bytes, IoError> {
        match Location::parse(location) {
            Location::Remote(url) => self.http.fetch(url.as_str()).await,
            Location::Local(path) => self.file.fetch(&path).await,
        }
    }

    fn name(&self) -> &str {
        "auto"
    }
}
