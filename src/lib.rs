// THEORY:
// This file is the main entry point for the `chroma_sort` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (upload UIs, export tooling).
//
// The primary goal is to export the color pipeline, the working set, and their
// associated data structures (`ColorizedImage`, `SortCriterion`, `BatchReport`,
// etc.) as the clean, high-level interface for the entire engine. The algorithmic
// internals (`core_modules`) stay encapsulated behind that surface, providing a
// clean separation of concerns.

pub mod batch;
pub mod core_modules;
pub mod error;
pub mod export;
pub mod pipeline;

pub use batch::{BatchFailure, BatchReport, MAX_WORKING_SET_SIZE, WorkingSet, colorize_batch};
pub use core_modules::color::{Hue, RGBColor};
pub use core_modules::metric::distance;
pub use core_modules::palette::{DEFAULT_PALETTE_SIZE, Palette, PixelData, extract_palette};
pub use core_modules::prominent::reduce_to_prominent;
pub use core_modules::sorter::{SortCriterion, sort};
pub use error::{ChromaError, Result};
pub use export::{ExportOptions, ExportRecord, export_records};
pub use pipeline::{
    ColorizedImage, FileSource, ImageReference, PipelineConfig, PixelSource, colorize,
};
