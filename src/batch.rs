// THEORY:
// The `batch` module is the collection-level orchestrator. It owns the working
// set of colorized images for a session and handles the two moments where many
// images are in play at once: ingesting an upload batch and deriving a sorted
// view.
//
// Key architectural principles:
// 1.  **Fire together, collect in order**: A batch issues one pipeline
//     invocation per image concurrently and only collects once all have
//     finished, so results stay associated with their upload order. The
//     invocations share no mutable state, which is why no locking exists here.
// 2.  **Per-image failure isolation**: One image failing to decode produces one
//     reported failure; its siblings land in the working set untouched. The
//     skip-and-report policy lives at this level, not inside the pipeline.
// 3.  **The unsorted set is the source of truth**: Sorted views are derived
//     snapshots. The working set itself only ever changes by appending a
//     completed batch or removing an image.

use crate::core_modules::sorter::{SortCriterion, sort};
use crate::error::{ChromaError, Result};
use crate::pipeline::{ColorizedImage, ImageReference, PipelineConfig, PixelSource, colorize};
use futures::future::join_all;

/// Hard cap on the number of images one session may hold.
pub const MAX_WORKING_SET_SIZE: usize = 50;

/// One image that failed during batch colorization, paired with its error.
#[derive(Debug)]
pub struct BatchFailure {
    /// Handle of the image that failed.
    pub reference: ImageReference,
    /// Why it failed; `Decode` in practice, `EmptyPalette` for degenerate images.
    pub error: ChromaError,
}

/// The outcome of one upload batch: successes in upload order, failures
/// reported per image.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successfully colorized records, in upload order.
    pub accepted: Vec<ColorizedImage>,
    /// Images that failed, in upload order, with their individual errors.
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Colorizes a batch of images concurrently, preserving upload order.
///
/// All invocations are issued before any is awaited; each produces an
/// independent result or an independent error.
pub async fn colorize_batch<S: PixelSource>(
    source: &S,
    references: Vec<ImageReference>,
    config: &PipelineConfig,
) -> BatchReport {
    let invocations = references.into_iter().map(|reference| async move {
        let result = colorize(source, reference.clone(), config).await;
        (reference, result)
    });

    let mut report = BatchReport::default();
    for (reference, result) in join_all(invocations).await {
        match result {
            Ok(record) => report.accepted.push(record),
            Err(error) => {
                tracing::warn!(reference = %reference, %error, "image skipped during batch colorization");
                report.failures.push(BatchFailure { reference, error });
            }
        }
    }
    report
}

/// The session's collection of colorized images. Mutated only by appending a
/// completed batch or removing an image; every sort request re-derives a fresh
/// ordered sequence from it.
#[derive(Debug, Default)]
pub struct WorkingSet {
    images: Vec<ColorizedImage>,
    config: PipelineConfig,
}

impl WorkingSet {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            images: Vec::new(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The unsorted working set, in upload order.
    pub fn images(&self) -> &[ColorizedImage] {
        &self.images
    }

    /// Colorizes a batch and appends the successes to the working set.
    ///
    /// Rejects the whole batch up front if it would push the session past
    /// `MAX_WORKING_SET_SIZE`; failures inside an accepted batch are reported in
    /// the returned `BatchReport` without affecting sibling images.
    pub async fn ingest<S: PixelSource>(
        &mut self,
        source: &S,
        references: Vec<ImageReference>,
    ) -> Result<BatchReport> {
        if self.images.len() + references.len() > MAX_WORKING_SET_SIZE {
            return Err(ChromaError::InvalidArgument {
                message: format!(
                    "batch of {} would exceed the {MAX_WORKING_SET_SIZE}-image cap ({} already held)",
                    references.len(),
                    self.images.len()
                ),
            });
        }

        let report = colorize_batch(source, references, &self.config).await;
        self.images.extend(report.accepted.iter().cloned());
        tracing::debug!(
            accepted = report.accepted.len(),
            failed = report.failure_count(),
            total = self.images.len(),
            "batch ingested"
        );
        Ok(report)
    }

    /// Derives a freshly ordered view of the working set. The set itself and
    /// any previously returned views are left untouched.
    pub fn sorted_view(&self, criterion: SortCriterion) -> Result<Vec<ColorizedImage>> {
        sort(&self.images, criterion)
    }

    /// Removes one image from the working set. Returns whether it was present.
    pub fn remove(&mut self, reference: &ImageReference) -> bool {
        let before = self.images.len();
        self.images.retain(|image| &image.reference != reference);
        self.images.len() < before
    }
}
