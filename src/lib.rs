//! Pagesmith turns one structured product record into three derived
//! documents — an FAQ, a product page, and a comparison page — through a
//! fixed pipeline of retryable stages.
//!
//! This crate is the integration layer: it re-exports the member crates and
//! provides the filesystem output sink. The interesting machinery lives in:
//!
//! - `pagesmith-types`: the immutable data model
//! - `pagesmith-blocks`: reusable content-generation blocks
//! - `pagesmith-templates`: document templates with schema contracts
//! - `pagesmith-core`: the stage contract, retry wrapper, and orchestrator
//!
//! ## Usage
//!
//! ```no_run
//! use pagesmith::{JsonDirSink, Orchestrator, PipelineConfig};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "product_name": "X Serum",
//!     "concentration": "10% Vitamin C",
//!     "skin_type": ["Oily"],
//!     "key_ingredients": ["Vitamin C"],
//!     "benefits": ["Brightening"],
//!     "how_to_use": "Apply daily in the morning",
//!     "side_effects": "None",
//!     "price": "₹500"
//! });
//!
//! let mut orchestrator = Orchestrator::new(PipelineConfig::default());
//! let bundle = orchestrator.run(&raw)?;
//! let mut sink = JsonDirSink::new("output");
//! orchestrator.publish(&bundle, &mut sink)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod sink;

pub use sink::JsonDirSink;

pub use pagesmith_blocks as blocks;
pub use pagesmith_core as pipeline;
pub use pagesmith_templates as templates;
pub use pagesmith_types as types;

pub use pagesmith_core::{
    default_counterpart, Orchestrator, OutputSink, PipelineConfig, PipelineError, RetryPolicy,
    SinkError, Stage, StageError, StageRunner,
};
pub use pagesmith_templates::{RenderConfig, SelectionPolicy};
pub use pagesmith_types::{
    ProductRecord, Question, QuestionCategory, RenderedDocument, ResultBundle, StatsSnapshot,
};
