//! Foundation data model for the Pagesmith content pipeline.
//!
//! This crate defines the immutable value types that cross stage boundaries:
//!
//! - [`ProductRecord`]: the validated input entity consumed by every stage
//! - [`Question`] / [`QuestionCategory`]: the generated Q&A batch
//! - [`RenderedDocument`]: one template's output, an ordered section map
//! - [`ResultBundle`]: the aggregate of all documents plus run metadata
//! - [`ExecutionStats`]: per-stage invocation counters

pub mod bundle;
pub mod document;
pub mod product;
pub mod question;
pub mod stats;

mod error;

pub use bundle::{PipelineMetadata, ResultBundle};
pub use document::{DocumentMetadata, RenderedDocument};
pub use error::ValidationError;
pub use product::ProductRecord;
pub use question::{Question, QuestionCategory};
pub use stats::{ExecutionStats, StatsSnapshot};
