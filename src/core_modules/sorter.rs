// THEORY:
// The `sorter` module is the collection-level layer of the engine. It takes the
// working set's `ColorizedImage` records and derives an ordered view under one
// of two strategies: the full spectrum walk (ascending hue) or the top-N images
// nearest a user-chosen reference color.
//
// Key architectural principles:
// 1.  **Re-derivation over mutation**: Every sort returns a freshly allocated
//     sequence. The input is only borrowed, so "try another sort" semantics come
//     for free and previously returned views are never aliased or disturbed.
// 2.  **Stability is part of the contract**: Grayscale images all share hue 0,
//     so an unstable sort would shuffle them arbitrarily between requests. Both
//     strategies use Rust's stable sort and keep upload order for ties.
// 3.  **Reject, don't guess**: A non-positive top-N limit is a caller contract
//     violation and fails loudly instead of silently returning nothing.

use crate::core_modules::color::RGBColor;
use crate::core_modules::colorized::ColorizedImage;
use crate::core_modules::metric::distance;
use crate::error::{ChromaError, Result};

/// The two ordering strategies a sort request can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum SortCriterion {
    /// Ascending hue: walks the collection along the color wheel.
    BySpectrum,
    /// The `limit` images whose prominent colors sit closest to `reference`,
    /// nearest first.
    ByProximity {
        reference: RGBColor,
        limit: usize,
    },
}

/// Derives an ordered sequence from the working set under the given criterion.
///
/// The input is never mutated; a limit beyond the input count simply returns
/// everything, and a zero limit is rejected with `InvalidArgument`.
pub fn sort(images: &[ColorizedImage], criterion: SortCriterion) -> Result<Vec<ColorizedImage>> {
    match criterion {
        SortCriterion::BySpectrum => {
            let mut ordered = images.to_vec();
            ordered.sort_by(|a, b| a.hue.total_cmp(&b.hue));
            Ok(ordered)
        }
        SortCriterion::ByProximity { reference, limit } => {
            if limit == 0 {
                return Err(ChromaError::InvalidArgument {
                    message: "proximity sort limit must be positive".to_string(),
                });
            }
            let mut ranked: Vec<(f64, ColorizedImage)> = images
                .iter()
                .map(|image| (distance(&image.prominent, &reference), image.clone()))
                .collect();
            ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
            ranked.truncate(limit);
            Ok(ranked.into_iter().map(|(_, image)| image).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::colorized::ImageReference;

    fn record(name: &str, red: u8, green: u8, blue: u8) -> ColorizedImage {
        ColorizedImage::new(ImageReference::new(name), RGBColor::new(red, green, blue))
    }

    #[test]
    fn spectrum_sort_is_nondecreasing_in_hue() {
        let images = vec![
            record("blue", 0, 0, 255),
            record("red", 255, 0, 0),
            record("green", 0, 255, 0),
        ];
        let sorted = sort(&images, SortCriterion::BySpectrum).expect("sort failed");
        for pair in sorted.windows(2) {
            assert!(pair[0].hue <= pair[1].hue);
        }
        assert_eq!(sorted[0].reference.as_str(), "red");
        assert_eq!(sorted[2].reference.as_str(), "blue");
    }

    #[test]
    fn spectrum_sort_keeps_upload_order_for_equal_hues() {
        // Grays all map to hue 0; their relative order must survive the sort.
        let images = vec![
            record("gray-a", 10, 10, 10),
            record("gray-b", 128, 128, 128),
            record("gray-c", 250, 250, 250),
        ];
        let sorted = sort(&images, SortCriterion::BySpectrum).expect("sort failed");
        let names: Vec<&str> = sorted.iter().map(|i| i.reference.as_str()).collect();
        assert_eq!(names, vec!["gray-a", "gray-b", "gray-c"]);
    }

    #[test]
    fn proximity_sort_ranks_nearest_first_and_respects_limit() {
        let images = vec![
            record("red", 255, 0, 0),
            record("reddish", 250, 5, 5),
            record("green", 0, 255, 0),
        ];
        let criterion = SortCriterion::ByProximity {
            reference: RGBColor::new(255, 0, 0),
            limit: 3,
        };
        let sorted = sort(&images, criterion).expect("sort failed");
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0].reference.as_str(), "red");
        assert_eq!(sorted[1].reference.as_str(), "reddish");
        assert_eq!(sorted[2].reference.as_str(), "green");
    }

    #[test]
    fn proximity_limit_truncates() {
        let images = vec![
            record("a", 10, 0, 0),
            record("b", 20, 0, 0),
            record("c", 200, 0, 0),
        ];
        let criterion = SortCriterion::ByProximity {
            reference: RGBColor::new(0, 0, 0),
            limit: 2,
        };
        let sorted = sort(&images, criterion).expect("sort failed");
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].reference.as_str(), "a");
        assert_eq!(sorted[1].reference.as_str(), "b");
    }

    #[test]
    fn zero_limit_is_rejected() {
        let images = vec![record("only", 1, 2, 3)];
        let criterion = SortCriterion::ByProximity {
            reference: RGBColor::new(0, 0, 0),
            limit: 0,
        };
        let error = sort(&images, criterion).expect_err("should reject zero limit");
        assert!(matches!(error, ChromaError::InvalidArgument { .. }));
    }

    #[test]
    fn sorting_never_mutates_the_input_or_earlier_views() {
        let images = vec![
            record("blue", 0, 0, 255),
            record("red", 255, 0, 0),
        ];
        let spectrum = sort(&images, SortCriterion::BySpectrum).expect("sort failed");
        let proximity = sort(
            &images,
            SortCriterion::ByProximity {
                reference: RGBColor::new(0, 0, 255),
                limit: 1,
            },
        )
        .expect("sort failed");

        // Original upload order untouched, earlier view unchanged.
        assert_eq!(images[0].reference.as_str(), "blue");
        assert_eq!(spectrum[0].reference.as_str(), "red");
        assert_eq!(proximity[0].reference.as_str(), "blue");
    }
}
