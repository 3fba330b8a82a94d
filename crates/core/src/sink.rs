//! The persistence boundary for finished bundles.

use pagesmith_types::RenderedDocument;
use thiserror::Error;

/// Error type for sink-side persistence.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to persist document '{name}': {message}")]
    PersistFailed { name: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persists one artifact per named document.
///
/// The core's obligation ends at producing a structurally valid bundle;
/// concrete sinks decide the on-disk (or elsewhere) format. Implementations
/// live outside the pipeline core.
pub trait OutputSink {
    fn persist(&mut self, name: &str, document: &RenderedDocument) -> Result<(), SinkError>;
}
