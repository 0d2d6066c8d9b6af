// THEORY:
// The `export` module is the hand-off surface for presentation collaborators:
// thumbnail previews and static HTML/PDF document generators. They need exactly
// one thing from the engine: the sorted sequence paired with each image's
// prominent color, plus two display knobs (a per-image display size and an
// optional background matched to the prominent color). No markup or documents
// are produced here; that stays on the far side of the boundary.

use crate::core_modules::color::RGBColor;
use crate::pipeline::{ColorizedImage, ImageReference};

/// Largest per-image display size the export surface will hand out, in pixels.
const MAX_DISPLAY_SIZE_PX: u32 = 500;

/// Display knobs for an export or preview run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Requested per-image display size in pixels; clamped to 500.
    pub image_size_px: u32,
    /// Whether each image should carry its prominent color as a background.
    pub include_background: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            image_size_px: 100,
            include_background: false,
        }
    }
}

/// One entry of the export surface: the source handle, its prominent color in
/// machine and CSS forms, and the resolved display settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    /// Handle to the original image, for the collaborator to embed or fetch.
    pub reference: ImageReference,
    /// The image's prominent color.
    pub color: RGBColor,
    /// CSS rendering of the prominent color, e.g. "rgb(250, 5, 5)".
    pub css_color: String,
    /// Background color to place behind the image, when requested.
    pub background: Option<RGBColor>,
    /// Per-image display size in pixels, already clamped.
    pub display_size_px: u32,
}

/// Maps a sorted sequence into export records, preserving order.
pub fn export_records(sorted: &[ColorizedImage], options: &ExportOptions) -> Vec<ExportRecord> {
    let display_size_px = options.image_size_px.min(MAX_DISPLAY_SIZE_PX);
    sorted
        .iter()
        .map(|image| ExportRecord {
            reference: image.reference.clone(),
            color: image.prominent,
            css_color: image.prominent.to_css(),
            background: options.include_background.then_some(image.prominent),
            display_size_px,
        })
        .collect()
}
