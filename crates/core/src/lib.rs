//! Pipeline core: the stage contract, its retry wrapper, and the orchestrator.
//!
//! ## Key Abstractions
//!
//! - [`Stage`]: one transformation with a declared input contract
//! - [`StageRunner`]: composes retry, timing, and statistics around any stage
//! - [`Orchestrator`]: executes the fixed dependency graph
//!   (parse → generate-questions → fan-out render) and aggregates results
//! - [`OutputSink`]: the persistence boundary the core hands a finished
//!   [`ResultBundle`](pagesmith_types::ResultBundle) across

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod sink;
pub mod stage;
pub mod stages;

pub use config::{default_counterpart, PipelineConfig};
pub use error::PipelineError;
pub use orchestrator::Orchestrator;
pub use sink::{OutputSink, SinkError};
pub use stage::{RetryPolicy, Stage, StageError, StageRunner};
pub use stages::{ComparisonStage, FaqStage, ParseStage, ProductPageStage, QuestionStage};
