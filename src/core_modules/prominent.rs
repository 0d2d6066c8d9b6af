// THEORY:
// The `prominent` module reduces a palette to the single color that stands in
// for the whole image. The reduction is an unweighted per-channel mean over the
// palette entries, not a pick of the most populated entry. That keeps one highly
// saturated accent from monopolizing the result and gives smoother orderings
// when the collection is later sorted along the spectrum.

use crate::core_modules::color::RGBColor;
use crate::core_modules::palette::Palette;
use crate::error::{ChromaError, Result};

/// Collapses a palette into one representative color: the unweighted arithmetic
/// mean of each channel, rounded to the nearest integer.
///
/// An empty palette is a defensive error. The extractor only produces one for
/// images with no usable pixels, but callers must handle it rather than let a
/// bogus color enter the working set.
pub fn reduce_to_prominent(palette: &Palette) -> Result<RGBColor> {
    if palette.is_empty() {
        return Err(ChromaError::EmptyPalette);
    }

    let count = palette.len() as f64;
    let mut sums = [0.0f64; 3];
    for color in palette {
        sums[0] += color.red as f64;
        sums[1] += color.green as f64;
        sums[2] += color.blue as f64;
    }

    Ok(RGBColor::from_rounded(
        sums[0] / count,
        sums[1] / count,
        sums[2] / count,
    ))
}
