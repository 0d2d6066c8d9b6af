// THEORY:
// The `pipeline` module is the per-image API of the engine. It encapsulates the
// extract → reduce → map stack into a single, easy-to-use entry point: give it a
// handle to one image and receive the `ColorizedImage` record the sorter works
// with. Its purpose is to provide a clean seam between the presentation world
// (files, object URLs, upload widgets) and the pure color math underneath.
//
// Key architectural principles:
// 1.  **Decoding is a capability, not a dependency**: The pipeline never touches
//     files or DOM-like resources itself. It asks a `PixelSource` to turn an
//     opaque handle into pixel data, and that is the only suspension point in
//     the whole engine.
// 2.  **Sequential per image, independent across images**: One invocation runs
//     the three stages in order with no shared mutable state, so any number of
//     invocations can be in flight at once (see `batch`).
// 3.  **Errors pass through untouched**: Decode and empty-palette failures are
//     propagated unchanged to the caller, which owns the skip-or-abort policy.

use crate::core_modules::palette::{DEFAULT_PALETTE_SIZE, PixelData, extract_palette};
use crate::core_modules::prominent::reduce_to_prominent;
use crate::error::Result;

// Re-export key data structures for the public API.
pub use crate::core_modules::colorized::{ColorizedImage, ImageReference};
pub use crate::core_modules::palette::Palette;
pub use crate::core_modules::sorter::SortCriterion;

/// Configuration for the color pipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// How many representative colors to quantize each image down to before
    /// averaging.
    pub palette_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

/// The capability the engine consumes from the outside world: given an opaque
/// handle, asynchronously yield decoded pixel data. Decode failures surface as
/// `ChromaError::Decode`.
pub trait PixelSource: Sync {
    fn load_pixels(
        &self,
        reference: &ImageReference,
    ) -> impl std::future::Future<Output = Result<PixelData>> + Send;
}

/// Runs the full per-image pipeline: load pixels, quantize to a palette,
/// reduce to the prominent color, derive its hue.
///
/// Suspends only while the source loads and decodes. Everything after that is
/// synchronous, pure math.
pub async fn colorize<S: PixelSource>(
    source: &S,
    reference: ImageReference,
    config: &PipelineConfig,
) -> Result<ColorizedImage> {
    let pixels = source.load_pixels(&reference).await?;
    let palette = extract_palette(&pixels, config.palette_size)?;
    let prominent = reduce_to_prominent(&palette)?;
    tracing::debug!(
        reference = %reference,
        prominent = %prominent.to_hex(),
        "colorized image"
    );
    Ok(ColorizedImage::new(reference, prominent))
}

/// A `PixelSource` backed by the local filesystem. Decoding happens on the
/// blocking thread pool so the async runtime is never stalled by a large JPEG.
#[derive(Debug, Clone, Default)]
pub struct FileSource;

impl PixelSource for FileSource {
    async fn load_pixels(&self, reference: &ImageReference) -> Result<PixelData> {
        let path = reference.as_str().to_string();
        tokio::task::spawn_blocking(move || {
            let decoded = image::open(&path)
                .map_err(|error| crate::error::ChromaError::decode(path.clone(), error))?;
            let buffer = decoded.to_rgba8();
            let (width, height) = buffer.dimensions();
            Ok(PixelData::new(width, height, buffer.into_raw()))
        })
        .await
        .map_err(|error| crate::error::ChromaError::decode("decode task panicked", error))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::color::RGBColor;
    use crate::error::ChromaError;
    use std::collections::HashMap;

    /// In-memory source for tests: maps references to prepared buffers.
    struct MapSource {
        images: HashMap<String, PixelData>,
    }

    impl PixelSource for MapSource {
        async fn load_pixels(&self, reference: &ImageReference) -> Result<PixelData> {
            self.images
                .get(reference.as_str())
                .cloned()
                .ok_or_else(|| ChromaError::Decode {
                    message: format!("no such image '{reference}'"),
                    source: None,
                })
        }
    }

    fn solid(red: u8, green: u8, blue: u8) -> PixelData {
        let mut rgba = Vec::new();
        for _ in 0..16 {
            rgba.extend_from_slice(&[red, green, blue, 255]);
        }
        PixelData::new(16, 1, rgba)
    }

    #[tokio::test]
    async fn colorize_runs_the_full_stack() {
        let source = MapSource {
            images: HashMap::from([("green.png".to_string(), solid(0, 255, 0))]),
        };
        let record = colorize(
            &source,
            ImageReference::new("green.png"),
            &PipelineConfig::default(),
        )
        .await
        .expect("pipeline failed");

        assert_eq!(record.prominent, RGBColor::new(0, 255, 0));
        assert!((record.hue - 120.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn decode_failure_surfaces_unchanged() {
        let source = MapSource {
            images: HashMap::new(),
        };
        let error = colorize(
            &source,
            ImageReference::new("missing.png"),
            &PipelineConfig::default(),
        )
        .await
        .expect_err("should fail to decode");
        assert!(matches!(error, ChromaError::Decode { .. }));
    }

    #[tokio::test]
    async fn unusable_image_surfaces_empty_palette() {
        // Pure white is filtered out entirely by the extractor.
        let source = MapSource {
            images: HashMap::from([("white.png".to_string(), solid(255, 255, 255))]),
        };
        let error = colorize(
            &source,
            ImageReference::new("white.png"),
            &PipelineConfig::default(),
        )
        .await
        .expect_err("should surface the defensive error");
        assert!(matches!(error, ChromaError::EmptyPalette));
    }
}
