// THEORY:
// The `metric` module is the pairwise layer of the color engine: the one
// operation that needs two colors at once. The sorter's nearest-to-reference
// ranking leans on this distance being commutative and satisfying the triangle
// inequality, both of which plain Euclidean distance gives us for free.
//
// This is deliberately NOT a perceptual metric (no Lab, no delta-E). The engine
// ranks in source RGB space; the coarse "which images are red-ish" answers it
// exists for do not need perceptual uniformity.

use crate::core_modules::color::RGBColor;

/// A non-negative straight-line distance between two colors in RGB space.
pub type Distance = f64;

/// Euclidean distance between two colors over the 3-dimensional channel space.
/// Pure and total: any pair of well-formed colors yields a finite result.
pub fn distance(a: &RGBColor, b: &RGBColor) -> Distance {
    let delta_red = a.red as f64 - b.red as f64;
    let delta_green = a.green as f64 - b.green as f64;
    let delta_blue = a.blue as f64 - b.blue as f64;

    (delta_red * delta_red + delta_green * delta_green + delta_blue * delta_blue).sqrt()
}
