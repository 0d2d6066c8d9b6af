//! Error types for the chroma_sort engine.

use thiserror::Error;

/// Result type alias for chroma_sort operations.
pub type Result<T> = std::result::Result<T, ChromaError>;

/// The full error taxonomy of the engine.
///
/// Pipeline errors are isolated to the image that produced them; a batch never
/// aborts sibling computations because one image failed to decode.
#[derive(Error, Debug)]
pub enum ChromaError {
    /// The image could not be loaded or decoded. Not retried; surfaced per image.
    #[error("failed to decode image: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Quantization returned zero colors (defensive; only possible for images
    /// with no usable pixels, e.g. fully transparent or pure white).
    #[error("palette extraction produced no colors")]
    EmptyPalette,

    /// A caller contract violation: non-positive top-N limit, zero palette
    /// size, or a batch that would exceed the working-set cap.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl ChromaError {
    /// Convenience constructor for decode failures wrapping an underlying error.
    pub fn decode(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ChromaError::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
