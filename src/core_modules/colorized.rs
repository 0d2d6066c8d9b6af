// THEORY:
// The `colorized` module defines the record the whole engine revolves around:
// one uploaded image, the prominent color extracted for it, and the hue derived
// from that color. A `ColorizedImage` is a snapshot: it is created once by the
// pipeline, never mutated, and lives in the working set until the image is
// removed or the session ends. Sorting clones these records into fresh
// sequences; the unsorted working set stays the single source of truth.

use crate::core_modules::color::{Hue, RGBColor};

/// An opaque handle to an original image (path, URL, or object id).
/// The engine never interprets it; it only carries it back out so collaborators
/// can pair results with their sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// One image after the color pipeline has run: its source handle, the prominent
/// color that represents it, and that color's hue angle.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorizedImage {
    /// Handle to the original image this record was derived from.
    pub reference: ImageReference,
    /// The single color representing this image (averaged palette).
    pub prominent: RGBColor,
    /// Hue of the prominent color, degrees in [0, 360).
    pub hue: Hue,
}

impl ColorizedImage {
    pub fn new(reference: ImageReference, prominent: RGBColor) -> Self {
        let hue = prominent.hue();
        Self {
            reference,
            prominent,
            hue,
        }
    }
}
