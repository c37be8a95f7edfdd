mod file_source;
mod http_source;
mod source;

pub use file_source::FileSource;
pub use http_source::HttpSource;
pub use source::{decode_text, AutoSource, Location, PropertiesSource};
