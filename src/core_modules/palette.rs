// THEORY:
// The `palette` module is the quantization layer of the engine. It collapses an
// arbitrary decoded image into a small, bounded set of representative colors via
// median cut: recursively split the occupied region of the RGB cube along its
// widest channel at the population median, then average each resulting box.
//
// Key architectural principles:
// 1.  **Sampling, not full scans**: Large images are subsampled down to a fixed
//     budget before quantization. Dominant-color extraction is statistical; a
//     few thousand well-spread samples answer it as well as ten million pixels.
// 2.  **Filtering before quantizing**: Transparent pixels and near-white pixels
//     are excluded from the sample, so scan backgrounds and padding do not drag
//     the palette toward white.
// 3.  **Unordered contract**: The palette is ranked by box population internally,
//     but downstream stages treat it as an unordered set. Nothing in the engine
//     may depend on entry order.

use crate::core_modules::color::{Channel, RGBColor};
use crate::error::{ChromaError, Result};

/// A bounded set of representative colors extracted from one image.
pub type Palette = Vec<RGBColor>;

/// Default number of representative colors to extract per image.
pub const DEFAULT_PALETTE_SIZE: usize = 10;

/// Upper bound on pixels sampled into the quantizer per image.
const MAX_SAMPLE_COUNT: usize = 10_000;
/// Pixels more transparent than this are ignored.
const MIN_OPAQUE_ALPHA: u8 = 125;
/// Pixels with every channel above this are treated as background white and ignored.
const NEAR_WHITE_FLOOR: u8 = 250;

/// A decoded RGBA8 buffer, the raw material for palette extraction.
/// Produced by a `PixelSource`; the engine never decodes files itself.
#[derive(Debug, Clone)]
pub struct PixelData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Flattened RGBA bytes, row-major, 4 bytes per pixel.
    pub rgba: Vec<u8>,
}

impl PixelData {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    fn pixel_count(&self) -> usize {
        self.rgba.len() / 4
    }
}

/// Extracts at most `color_count` representative colors from a decoded image.
///
/// Returns fewer entries when the image has less color diversity than requested,
/// and an empty palette when every pixel is filtered out (fully transparent or
/// pure-white images). A zero `color_count` is a caller contract violation.
pub fn extract_palette(pixels: &PixelData, color_count: usize) -> Result<Palette> {
    if color_count == 0 {
        return Err(ChromaError::InvalidArgument {
            message: "palette color count must be positive".to_string(),
        });
    }

    let samples = sample_pixels(pixels);
    if samples.is_empty() {
        return Ok(Palette::new());
    }

    let mut boxes = vec![ColorBox::new(samples)];
    while boxes.len() < color_count {
        // Split the most populated box that still has spread to divide.
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, color_box)| color_box.can_split())
            .max_by_key(|(_, color_box)| color_box.population());
        let Some((index, _)) = candidate else {
            break;
        };
        let (lower, upper) = boxes.swap_remove(index).split();
        boxes.push(lower);
        boxes.push(upper);
    }

    boxes.sort_by(|a, b| b.population().cmp(&a.population()));
    Ok(boxes.iter().map(ColorBox::average).collect())
}

/// Steps through the buffer so that at most `MAX_SAMPLE_COUNT` pixels survive,
/// dropping transparent and near-white pixels along the way.
fn sample_pixels(pixels: &PixelData) -> Vec<RGBColor> {
    let step = (pixels.pixel_count() / MAX_SAMPLE_COUNT).max(1);
    pixels
        .rgba
        .chunks_exact(4)
        .step_by(step)
        .filter_map(|bytes| {
            let (red, green, blue, alpha) = (bytes[0], bytes[1], bytes[2], bytes[3]);
            if alpha < MIN_OPAQUE_ALPHA {
                return None;
            }
            if red > NEAR_WHITE_FLOOR && green > NEAR_WHITE_FLOOR && blue > NEAR_WHITE_FLOOR {
                return None;
            }
            Some(RGBColor::new(red, green, blue))
        })
        .collect()
}

/// One axis-aligned region of the RGB cube, holding the samples that fall in it.
struct ColorBox {
    samples: Vec<RGBColor>,
}

impl ColorBox {
    fn new(samples: Vec<RGBColor>) -> Self {
        Self { samples }
    }

    fn population(&self) -> usize {
        self.samples.len()
    }

    /// A box can split while it holds at least two samples that differ.
    fn can_split(&self) -> bool {
        self.samples.len() >= 2 && self.channel_ranges().iter().any(|&range| range > 0)
    }

    /// Per-channel spread (max - min) as (red, green, blue).
    fn channel_ranges(&self) -> [u8; 3] {
        let mut minimums = [Channel::MAX; 3];
        let mut maximums = [Channel::MIN; 3];
        for sample in &self.samples {
            for (index, channel) in [sample.red, sample.green, sample.blue].iter().enumerate() {
                minimums[index] = minimums[index].min(*channel);
                maximums[index] = maximums[index].max(*channel);
            }
        }
        [
            maximums[0] - minimums[0],
            maximums[1] - minimums[1],
            maximums[2] - minimums[2],
        ]
    }

    /// Splits at the population median along the widest channel.
    fn split(mut self) -> (ColorBox, ColorBox) {
        let ranges = self.channel_ranges();
        let widest = ranges
            .iter()
            .enumerate()
            .max_by_key(|(_, range)| **range)
            .map(|(index, _)| index)
            .unwrap_or(0);

        self.samples.sort_by_key(|sample| match widest {
            0 => sample.red,
            1 => sample.green,
            _ => sample.blue,
        });

        let midpoint = self.samples.len() / 2;
        let upper = self.samples.split_off(midpoint);
        (ColorBox::new(self.samples), ColorBox::new(upper))
    }

    /// The box's representative color: the per-channel mean of its samples.
    fn average(&self) -> RGBColor {
        let count = self.population().max(1) as f64;
        let mut sums = [0.0f64; 3];
        for sample in &self.samples {
            sums[0] += sample.red as f64;
            sums[1] += sample.green as f64;
            sums[2] += sample.blue as f64;
        }
        RGBColor::from_rounded(sums[0] / count, sums[1] / count, sums[2] / count)
    }
}
