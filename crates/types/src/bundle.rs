//! The aggregate result of one pipeline run.

use crate::document::RenderedDocument;
use serde::Serialize;

/// Pipeline-level metadata attached to a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineMetadata {
    pub total_questions_generated: usize,
    pub pages_generated: usize,
    pub pipeline_status: String,
}

/// The three rendered documents plus run-level metadata.
///
/// Owned by the orchestrator for the duration of one run, handed to the
/// output sink, then discarded. There is no partially-populated variant: a
/// bundle exists only for a fully successful run.
#[derive(Debug, Clone, Serialize)]
pub struct ResultBundle {
    pub faq: RenderedDocument,
    pub product_page: RenderedDocument,
    pub comparison: RenderedDocument,
    pub metadata: PipelineMetadata,
}

impl ResultBundle {
    /// The documents with their canonical output names, in a fixed order.
    pub fn documents(&self) -> [(&'static str, &RenderedDocument); 3] {
        [
            ("faq", &self.faq),
            ("product_page", &self.product_page),
            ("comparison_page", &self.comparison),
        ]
    }
}
