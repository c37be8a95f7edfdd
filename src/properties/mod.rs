//! HiPS properties records.
//!
//! A HiPS survey describes itself with a `properties` file of `key = value`
//! lines. This module parses such a file into a [`HipsSurveyProperties`]
//! record and derives tile locations from it.
//!
//! ```text
//! properties text ──parse──► HipsSurveyProperties ──► title(), hips_order(), ...
//!                                     │
//!                                     └──► tile_access_url(order, ipix)
//!                                          {base}/Norder{order}/Dir{dir}/
//! ```

mod frame;
pub mod keys;
mod parser;
mod record;
mod tile;

pub use frame::HipsFrame;
pub use parser::{parse_properties, split_property_line, COMMENT_PREFIX, KEY_VALUE_SEPARATOR};
pub use record::{HipsSurveyProperties, DEFAULT_TILE_WIDTH};
pub use tile::{
    directory_index, tile_access_url, tile_file_name, tile_url, TileFormat,
    DIRECTORY_BUCKET_SIZE,
};
