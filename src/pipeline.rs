use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::exif;
use crate::resolver::{self, Extraction, GeoCoordinate};

/// Supported image extensions.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg",
    "png", "webp",
    "tif", "tiff",
    "heic", "heif",
    "avif",
    // RAW formats
    "cr3", "cr2", "dng", "nef", "arw", "raf", "orf", "rw2", "pef", "srw",
];

/// What came out of locating a single image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The image carries a usable GPS position.
    Located { coordinate: GeoCoordinate },
    /// The image was read but has no (usable) GPS position.
    NoGpsData,
    /// The image could not be decoded at all.
    Failed { error: String },
}

/// The result of locating a single image.
///
/// # Example
///
/// ```rust,no_run
/// use geophoto::config::Config;
/// use geophoto::pipeline::{locate_image, Outcome};
///
/// let result = locate_image("photo.jpg".as_ref(), &Config::default());
/// match &result.outcome {
///     Outcome::Located { coordinate } => {
///         println!("{coordinate} → {}", result.map_url.as_deref().unwrap_or(""));
///     }
///     Outcome::NoGpsData => println!("image contains no GPS data"),
///     Outcome::Failed { error } => eprintln!("could not read image: {error}"),
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct LocateResult {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Link to the configured map service, set only when located.
    pub map_url: Option<String>,
}

impl LocateResult {
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        match &self.outcome {
            Outcome::Located { coordinate } => Some(*coordinate),
            _ => None,
        }
    }
}

/// Collect supported image files from the given paths.
///
/// Accepts a mix of file paths and directory paths. Directories are walked
/// recursively (following symlinks). Only files with supported image extensions
/// are included.
///
/// # Example
///
/// ```rust,no_run
/// use geophoto::pipeline::collect_images;
/// use std::path::PathBuf;
///
/// let images = collect_images(&[
///     PathBuf::from("photo.jpg"),       // single file
///     PathBuf::from("./photos/"),        // entire directory
/// ]);
/// println!("Found {} images", images.len());
/// ```
pub fn collect_images(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_supported_image(path) {
                images.push(path.clone());
            } else {
                log::warn!("Skipping unsupported file: {}", path.display());
            }
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let p = entry.path();
                if p.is_file() && is_supported_image(p) {
                    images.push(p.to_path_buf());
                }
            }
        } else {
            log::warn!("Path does not exist: {}", path.display());
        }
    }

    images
}

/// Check if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read an image's EXIF tags, resolve its GPS position and build a map link.
///
/// Never fails: decoder errors end up in [`Outcome::Failed`], which is kept
/// apart from [`Outcome::NoGpsData`].
pub fn locate_image(path: &Path, config: &Config) -> LocateResult {
    let outcome = match exif::read_tags(path) {
        Ok(tags) => match resolver::extract_coordinates(&tags) {
            Extraction::Located(coordinate) => Outcome::Located { coordinate },
            Extraction::NoGpsData => {
                log::debug!("No GPS data in {}", path.display());
                Outcome::NoGpsData
            }
        },
        Err(e) => {
            log::warn!("Failed to read EXIF from {}: {e:#}", path.display());
            Outcome::Failed { error: format!("{e:#}") }
        }
    };

    let map_url = match &outcome {
        Outcome::Located { coordinate } => {
            Some(config.map.provider.url(coordinate, config.map.zoom))
        }
        _ => None,
    };

    LocateResult {
        path: path.to_path_buf(),
        outcome,
        map_url,
    }
}

/// Locate every image in `images`, in order.
pub fn locate_images(images: &[PathBuf], config: &Config) -> Vec<LocateResult> {
    let total = images.len();
    images
        .iter()
        .enumerate()
        .map(|(i, path)| {
            log::info!("[{}/{}] Reading: {}", i + 1, total, path.display());
            locate_image(path, config)
        })
        .collect()
}
