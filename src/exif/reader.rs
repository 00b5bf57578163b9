use anyhow::{Context, Result};
use nom_exif::*;
use serde_json::{Value, json};
use std::path::Path;

use crate::resolver::TagMap;

/// Read every EXIF tag of an image into a name → value mapping.
///
/// Tags are keyed by their EXIF name, or by `0x` + hex code when nom-exif
/// does not know the tag. When a tag appears in several IFDs the main image
/// (IFD0 and its sub-IFDs) wins over the thumbnail. Values are rendered as
/// strings, except `GPSLatitude` / `GPSLongitude`, which are emitted as three
/// `[numerator, denominator]` rationals ready for
/// [`extract_coordinates`](crate::resolver::extract_coordinates).
///
/// An image without an EXIF segment yields an empty mapping. Files that cannot
/// be opened or whose format is not recognised are reported as errors.
pub fn read_tags(path: &Path) -> Result<TagMap> {
    let mut parser = MediaParser::new();
    let ms = MediaSource::file_path(path).context("Failed to open image file")?;

    let iter: ExifIter = match parser.parse(ms) {
        Ok(iter) => iter,
        Err(nom_exif::Error::ParseFailed(e)) => {
            log::debug!("No EXIF data found in {}: {e}", path.display());
            return Ok(TagMap::new());
        }
        Err(e) => return Err(e).context("Failed to read EXIF data"),
    };

    let mut tags = TagMap::new();
    for entry in iter {
        let Some(value) = entry.get_value() else {
            continue;
        };
        let name = tag_name(&entry);
        if tags.contains_key(&name) {
            continue;
        }
        if let Some(value) = entry_to_value(entry.tag(), value) {
            tags.insert(name, value);
        }
    }

    log::debug!("Read {} EXIF tag(s) from {}", tags.len(), path.display());
    Ok(tags)
}

fn tag_name(entry: &ParsedExifEntry) -> String {
    match entry.tag() {
        Some(tag) => tag.to_string(),
        None => format!("0x{:04x}", entry.tag_code()),
    }
}

/// GPS angles keep their rationals; everything else becomes a string.
fn entry_to_value(tag: Option<ExifTag>, val: &EntryValue) -> Option<Value> {
    if matches!(tag, Some(ExifTag::GPSLatitude | ExifTag::GPSLongitude)) {
        if let Some(value) = rationals_to_value(val) {
            return Some(value);
        }
    }
    entry_to_string(val).map(Value::String)
}

/// Convert an EntryValue to an Option<String>.
fn entry_to_string(val: &EntryValue) -> Option<String> {
    let s = val.to_string();
    let s = s.trim().trim_matches('"').to_string();
    if s.is_empty() { None } else { Some(s) }
}

/// Encode a rational array as `[[n, d], ...]`; signed rationals keep their sign.
fn rationals_to_value(val: &EntryValue) -> Option<Value> {
    if let Some(items) = val.as_urational_array() {
        return Some(Value::Array(items.iter().map(|r| json!([r.0, r.1])).collect()));
    }
    if let Some(items) = val.as_irational_array() {
        return Some(Value::Array(items.iter().map(|r| json!([r.0, r.1])).collect()));
    }
    None
}
