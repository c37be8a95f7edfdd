use thiserror::Error;

/// I/O errors that can occur when retrieving properties text
#[derive(Debug, Clone, Error)]
pub enum IoError {
    /// Error raised by the HTTP client
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Network or connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Location is not a usable URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Resource not found (HTTP 404 or missing file)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Local file could not be read
    #[error("File error: {0}")]
    File(String),
}

/// Errors raised by the typed accessors of a properties record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// Accessor requested a key absent from the record
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Numeric field could not be parsed
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidFormat {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// Frame is not one of equatorial, galactic or ecliptic
    #[error("Unknown HiPS frame: '{0}' (expected equatorial, galactic or ecliptic)")]
    UnknownFrame(String),

    /// Tile format is not one of jpeg, png or fits
    #[error("Unknown tile format: '{0}' (expected jpeg, png or fits)")]
    UnknownTileFormat(String),
}

/// Errors from loading and interpreting a survey description
#[derive(Debug, Clone, Error)]
pub enum SurveyError {
    /// I/O error while retrieving the text
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Error while reading a typed property
    #[error("Property error: {0}")]
    Property(#[from] PropertyError),

    /// Result could not be serialized for output
    #[error("Output error: {0}")]
    Output(String),
}
