//! EXIF reading.
//!
//! [`read_tags`] opens an image with `nom-exif` and returns every decoded tag
//! as a [`TagMap`](crate::resolver::TagMap). The resolver only looks at the
//! four GPS tags; the rest feeds the diagnostic dump.

mod reader;

#[cfg(test)]
pub(crate) mod fixtures;

pub use reader::read_tags;
