//! Property keys read by the typed accessors.

pub const OBS_TITLE: &str = "obs_title";
pub const HIPS_VERSION: &str = "hips_version";
pub const HIPS_FRAME: &str = "hips_frame";
pub const HIPS_ORDER: &str = "hips_order";
pub const HIPS_TILE_FORMAT: &str = "hips_tile_format";
pub const HIPS_TILE_WIDTH: &str = "hips_tile_width";
pub const HIPS_SERVICE_URL: &str = "hips_service_url";
pub const MOC_ACCESS_URL: &str = "moc_access_url";

/// Publisher identifier; first column MocServer clients usually show.
pub const CREATOR_DID: &str = "creator_did";
