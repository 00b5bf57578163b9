//! Conversion of raw EXIF GPS fields into signed decimal degrees.
//!
//! The resolver is a pure transform over a tag mapping: it never performs I/O,
//! never panics on malformed input and keeps no state between calls. Callers
//! obtain the mapping from [`read_tags`](crate::exif::read_tags) or build it
//! themselves.
//!
//! # Example
//!
//! ```rust
//! use geophoto::resolver::{extract_coordinates, Extraction, TagMap};
//! use serde_json::json;
//!
//! let mut tags = TagMap::new();
//! tags.insert("GPSLatitude".into(), json!([33, 51, 35]));
//! tags.insert("GPSLatitudeRef".into(), json!("S"));
//! tags.insert("GPSLongitude".into(), json!([151, 12, 36]));
//!
//! match extract_coordinates(&tags) {
//!     Extraction::Located(coord) => println!("{coord}"),
//!     Extraction::NoGpsData => println!("image contains no GPS data"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// EXIF tag names mapped to their decoded values.
pub type TagMap = Map<String, Value>;

pub const TAG_GPS_LATITUDE: &str = "GPSLatitude";
pub const TAG_GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const TAG_GPS_LONGITUDE: &str = "GPSLongitude";
pub const TAG_GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";

/// Reference assumed when `GPSLatitudeRef` is missing.
pub const DEFAULT_LATITUDE_REF: Hemisphere = Hemisphere::North;
/// Reference assumed when `GPSLongitudeRef` is missing.
pub const DEFAULT_LONGITUDE_REF: Hemisphere = Hemisphere::East;

/// Hemisphere reference letter of an EXIF GPS coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parse a reference such as `"N"`, `"s"` or `"West"`.
    ///
    /// Accepts the single EXIF letter or the full direction word, ignoring
    /// case and surrounding whitespace. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Some(Self::North),
            "S" | "SOUTH" => Some(Self::South),
            "E" | "EAST" => Some(Self::East),
            "W" | "WEST" => Some(Self::West),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// South and West coordinates are negative in decimal degrees.
    pub fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// Angular magnitude as degrees, minutes and seconds.
///
/// Components are non-negative but not range-checked: `minutes >= 60` is
/// converted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsTriplet {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl DmsTriplet {
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self { degrees, minutes, seconds }
    }

    /// Parse a triplet from a decoded tag value.
    ///
    /// Accepts a three-element array whose items are either plain numbers or
    /// EXIF rationals encoded as `[numerator, denominator]`. Returns `None` for
    /// anything else, including negative, non-finite or zero-denominator
    /// components.
    pub fn from_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() != 3 {
            return None;
        }

        Some(Self {
            degrees: component_to_f64(&items[0])?,
            minutes: component_to_f64(&items[1])?,
            seconds: component_to_f64(&items[2])?,
        })
    }
}

/// Convert one triplet component (number or rational pair) to `f64`.
fn component_to_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::Array(pair) if pair.len() == 2 => {
            let num = pair[0].as_f64()?;
            let den = pair[1].as_f64()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        _ => return None,
    };

    if n.is_finite() && n >= 0.0 { Some(n) } else { None }
}

/// A point on Earth in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(
            f,
            "{:.*}, {:.*}",
            precision, self.latitude, precision, self.longitude
        )
    }
}

/// Outcome of looking for GPS data in a tag mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extraction {
    Located(GeoCoordinate),
    /// Latitude or longitude is missing or malformed.
    NoGpsData,
}

impl Extraction {
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        match self {
            Self::Located(coord) => Some(*coord),
            Self::NoGpsData => None,
        }
    }
}

/// Convert a DMS triplet to signed decimal degrees.
///
/// `S` and `W` references yield a negative value, `N` and `E` a positive one.
pub fn to_decimal(triplet: &DmsTriplet, reference: Hemisphere) -> f64 {
    let magnitude = triplet.degrees + triplet.minutes / 60.0 + triplet.seconds / 3600.0;

    if reference.is_negative() { -magnitude } else { magnitude }
}

/// Resolve the GPS position stored in an EXIF tag mapping.
///
/// Both `GPSLatitude` and `GPSLongitude` must be present and well-formed,
/// otherwise the result is [`Extraction::NoGpsData`]. Missing references
/// default to [`DEFAULT_LATITUDE_REF`] and [`DEFAULT_LONGITUDE_REF`].
pub fn extract_coordinates(tags: &TagMap) -> Extraction {
    let Some(latitude) = read_triplet(tags, TAG_GPS_LATITUDE) else {
        return Extraction::NoGpsData;
    };
    let Some(longitude) = read_triplet(tags, TAG_GPS_LONGITUDE) else {
        return Extraction::NoGpsData;
    };

    let lat_ref = read_reference(tags, TAG_GPS_LATITUDE_REF, DEFAULT_LATITUDE_REF);
    let lon_ref = read_reference(tags, TAG_GPS_LONGITUDE_REF, DEFAULT_LONGITUDE_REF);

    Extraction::Located(GeoCoordinate {
        latitude: to_decimal(&latitude, lat_ref),
        longitude: to_decimal(&longitude, lon_ref),
    })
}

fn read_triplet(tags: &TagMap, key: &str) -> Option<DmsTriplet> {
    let value = tags.get(key)?;
    let triplet = DmsTriplet::from_value(value);
    if triplet.is_none() {
        log::debug!("Ignoring malformed {key}: {value}");
    }
    triplet
}

fn read_reference(tags: &TagMap, key: &str, default: Hemisphere) -> Hemisphere {
    match tags.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::String(s)) => Hemisphere::parse(s).unwrap_or_else(|| {
            log::warn!("Unrecognised {key} {s:?}, assuming {}", default.letter());
            default
        }),
        Some(other) => {
            log::warn!("Unrecognised {key} {other}, assuming {}", default.letter());
            default
        }
    }
}
