// Demo runner for the `chroma_sort` library: colorize the images given on the
// command line, sort them along the spectrum, and print the ordered result.
// The main library entry point is `src/lib.rs`.

use chroma_sort::{
    ExportOptions, FileSource, ImageReference, PipelineConfig, SortCriterion, WorkingSet,
    export_records,
};
use std::env;

#[tokio::main]
async fn main() -> chroma_sort::Result<()> {
    tracing_subscriber::fmt::init();

    let references: Vec<ImageReference> = env::args().skip(1).map(ImageReference::new).collect();
    if references.is_empty() {
        println!("Usage: chroma_sort <image_path> [<image_path> ...]");
        return Ok(());
    }

    let source = FileSource;
    let mut working_set = WorkingSet::new(PipelineConfig::default());
    let report = working_set.ingest(&source, references).await?;

    if report.failure_count() > 0 {
        println!("{} image(s) could not be processed:", report.failure_count());
        for failure in &report.failures {
            println!("  {}: {}", failure.reference, failure.error);
        }
    }

    let sorted = working_set.sorted_view(SortCriterion::BySpectrum)?;
    println!("Spectrum order ({} image(s)):", sorted.len());
    for record in export_records(&sorted, &ExportOptions::default()) {
        println!(
            "  {}  {}  hue-sorted at {}",
            record.color.to_hex(),
            record.css_color,
            record.reference
        );
    }

    Ok(())
}
