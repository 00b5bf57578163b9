use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resolver::GeoCoordinate;

/// Smallest zoom level accepted by the map services.
pub const MIN_ZOOM: u8 = 1;
/// Largest zoom level accepted by the map services.
pub const MAX_ZOOM: u8 = 19;

/// Web map service a located image is linked to.
///
/// # Example
///
/// ```rust
/// use geophoto::map::MapProvider;
/// use geophoto::resolver::GeoCoordinate;
///
/// let eiffel = GeoCoordinate { latitude: 48.858056, longitude: 2.294444 };
/// let url = MapProvider::Google.url(&eiffel, 15);
/// assert_eq!(url, "https://www.google.com/maps/search/?api=1&query=48.858056,2.294444");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    #[default]
    OpenStreetMap,
    Google,
}

impl MapProvider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenStreetMap => "openstreetmap",
            Self::Google => "google",
        }
    }

    /// Build a link that drops a marker on `coord`.
    ///
    /// `zoom` is clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`]. Google's search URL
    /// has no zoom parameter and ignores it.
    pub fn url(&self, coord: &GeoCoordinate, zoom: u8) -> String {
        let lat = format!("{:.6}", coord.latitude);
        let lon = format!("{:.6}", coord.longitude);
        match self {
            Self::OpenStreetMap => {
                let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
                format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}")
            }
            Self::Google => {
                format!("https://www.google.com/maps/search/?api=1&query={lat},{lon}")
            }
        }
    }
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openstreetmap" | "osm" => Ok(Self::OpenStreetMap),
            "google" | "gmaps" => Ok(Self::Google),
            other => anyhow::bail!("Unknown map provider: {other} (expected openstreetmap or google)"),
        }
    }
}
