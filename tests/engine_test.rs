// End-to-end exercise of the engine: ingest a mixed upload batch through an
// in-memory pixel source, then derive spectrum and proximity views and the
// export records a document generator would consume.

use chroma_sort::{
    ChromaError, ColorizedImage, ExportOptions, ImageReference, PipelineConfig, PixelData,
    PixelSource, RGBColor, Result, SortCriterion, WorkingSet, export_records,
};
use std::collections::HashMap;

struct MemorySource {
    images: HashMap<String, PixelData>,
}

impl MemorySource {
    fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    fn insert_solid(&mut self, name: &str, red: u8, green: u8, blue: u8) {
        let mut rgba = Vec::new();
        for _ in 0..64 {
            rgba.extend_from_slice(&[red, green, blue, 255]);
        }
        self.images.insert(name.to_string(), PixelData::new(8, 8, rgba));
    }
}

impl PixelSource for MemorySource {
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

fn names(sorted: &[ColorizedImage]) -> Vec<&str> {
    sorted.iter().map(|image| image.reference.as_str()).collect()
}

#[tokio::test]
async fn upload_sort_and_export_round_trip() {
    let mut source = MemorySource::new();
    source.insert_solid("green.png", 0, 200, 0);
    source.insert_solid("red.png", 200, 0, 0);
    source.insert_solid("reddish.png", 195, 5, 5);
    source.insert_solid("blue.png", 0, 0, 200);

    let mut working_set = WorkingSet::new(PipelineConfig::default());
    let report = working_set
        .ingest(
            &source,
            vec![
                ImageReference::new("green.png"),
                ImageReference::new("red.png"),
                ImageReference::new("corrupt.png"),
                ImageReference::new("reddish.png"),
                ImageReference::new("blue.png"),
            ],
        )
        .await
        .expect("ingest failed");

    // Four survivors, one reported failure; siblings unaffected.
    assert_eq!(report.accepted.len(), 4);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(report.failures[0].reference.as_str(), "corrupt.png");
    assert_eq!(working_set.len(), 4);

    // Spectrum walk: red (0) before green (120) before blue (240).
    let spectrum = working_set
        .sorted_view(SortCriterion::BySpectrum)
        .expect("spectrum sort failed");
    assert_eq!(
        names(&spectrum),
        vec!["red.png", "reddish.png", "green.png", "blue.png"]
    );

    // Nearest to pure red: both red-ish images, in distance order.
    let nearest = working_set
        .sorted_view(SortCriterion::ByProximity {
            reference: RGBColor::new(255, 0, 0),
            limit: 2,
        })
        .expect("proximity sort failed");
    assert_eq!(names(&nearest), vec!["red.png", "reddish.png"]);

    // A limit past the working set size returns everything, nearest first.
    let all = working_set
        .sorted_view(SortCriterion::ByProximity {
            reference: RGBColor::new(255, 0, 0),
            limit: 100,
        })
        .expect("proximity sort failed");
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].reference.as_str(), "red.png");

    // The export surface mirrors the sorted order and carries the display knobs.
    let records = export_records(
        &nearest,
        &ExportOptions {
            image_size_px: 120,
            include_background: true,
        },
    );
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].reference.as_str(), "red.png");
    assert_eq!(records[0].background, Some(records[0].color));
    assert_eq!(records[0].display_size_px, 120);

    // Deriving views never mutated the upload-ordered working set.
    assert_eq!(
        names(working_set.images()),
        vec!["green.png", "red.png", "reddish.png", "blue.png"]
    );
}
