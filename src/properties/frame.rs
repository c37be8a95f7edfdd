//! HiPS coordinate frames.

use std::fmt;
use std::str::FromStr;

use crate::error::PropertyError;

/// Coordinate frame of a HiPS survey, as found in the `hips_frame` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HipsFrame {
    /// Equatorial (ICRS) coordinates
    Equatorial,
    /// Galactic coordinates
    Galactic,
    /// Ecliptic coordinates
    Ecliptic,
}

impl HipsFrame {
    /// All frames, in lookup-table order.
    pub const ALL: [HipsFrame; 3] = [
        HipsFrame::Equatorial,
        HipsFrame::Galactic,
        HipsFrame::Ecliptic,
    ];

    /// The name used in HiPS properties files.
    pub fn as_str(&self) -> &'static str {
        match self {
            HipsFrame::Equatorial => "equatorial",
            HipsFrame::Galactic => "galactic",
            HipsFrame::Ecliptic => "ecliptic",
        }
    }

    /// The equivalent Astropy `SkyCoord` frame name.
    pub fn astropy_frame(&self) -> &'static str {
        match self {
            HipsFrame::Equatorial => "icrs",
            HipsFrame::Galactic => "galactic",
            HipsFrame::Ecliptic => "ecliptic",
        }
    }
}

impl FromStr for HipsFrame {
    type Err = PropertyError;

    /// Matching is exact: `Equatorial` or `icrs` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|frame| frame.as_str() == s)
            .ok_or_else(|| PropertyError::UnknownFrame(s.to_string()))
    }
}

impl fmt::Display for HipsFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
