//! The unified error type for pipeline runs.

use crate::sink::SinkError;
use pagesmith_types::ValidationError;
use thiserror::Error;

/// The main error enum for all high-level pipeline operations.
///
/// Each failure kind is a distinct variant carrying enough context (stage
/// name, field names, attempt count) for callers to produce labeled,
/// user-facing messages.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input failed a stage's contract. Never retried: retrying cannot fix
    /// bad input.
    #[error("stage '{stage}' rejected its input: {source}")]
    InvalidInput {
        stage: &'static str,
        source: ValidationError,
    },

    /// A stage kept failing until its retry budget ran out. Fatal to the run.
    #[error("stage '{stage}' failed after {attempts} attempts: {message}")]
    StageExhausted {
        stage: &'static str,
        attempts: u32,
        message: String,
    },

    /// The output sink refused a document during publication.
    #[error("publish failed: {0}")]
    Sink(#[from] SinkError),
}
