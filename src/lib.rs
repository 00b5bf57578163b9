//! # geophoto
//!
//! Read embedded GPS coordinates from photos, convert them to signed decimal
//! degrees and link them to a web map.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geophoto::config::Config;
//! use geophoto::pipeline::{collect_images, locate_images, Outcome};
//! use std::path::PathBuf;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load(Some("config.json".as_ref()))?;
//!     let images = collect_images(&[PathBuf::from("./photos")]);
//!
//!     for result in locate_images(&images, &config) {
//!         match result.outcome {
//!             Outcome::Located { coordinate } => println!("{}: {coordinate}", result.path.display()),
//!             Outcome::NoGpsData => println!("{}: no GPS data", result.path.display()),
//!             Outcome::Failed { error } => eprintln!("{}: {error}", result.path.display()),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! The resolver works on any tag mapping, so it can be fed from another EXIF
//! decoder or from JSON:
//!
//! ```rust
//! use geophoto::resolver::{extract_coordinates, to_decimal, DmsTriplet, Hemisphere, TagMap};
//! use serde_json::json;
//!
//! let west = to_decimal(&DmsTriplet::new(73.0, 59.0, 11.0), Hemisphere::West);
//! assert!((west + 73.98639).abs() < 1e-4);
//!
//! let mut tags = TagMap::new();
//! tags.insert("GPSLatitude".into(), json!([48, 51, 29]));
//! tags.insert("GPSLongitude".into(), json!([2, 17, 40]));
//! let coord = extract_coordinates(&tags).coordinate().unwrap();
//! assert!(coord.latitude > 0.0 && coord.longitude > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] — DMS → decimal degree conversion and GPS tag resolution
//! - [`exif`] — EXIF tag reading via `nom-exif`
//! - [`map`] — Map service links
//! - [`config`] — Configuration types and loading/saving
//! - [`pipeline`] — Image collection and per-file locate flow

pub mod config;
pub mod exif;
pub mod map;
pub mod pipeline;
pub mod resolver;
