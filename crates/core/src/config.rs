//! Configuration for one pipeline run.

use crate::stage::RetryPolicy;
use pagesmith_templates::{RenderConfig, SelectionPolicy};
use pagesmith_types::ProductRecord;

/// Settings the orchestrator builds its stages from.
///
/// A fresh orchestrator owns fresh stage instances; nothing here is shared
/// across runs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Retry budget and backoff applied to every stage.
    pub retry: RetryPolicy,
    /// Strict/lenient schema validation for all templates.
    pub render: RenderConfig,
    /// FAQ publication policy.
    pub faq_selection: SelectionPolicy,
    /// The counterpart record the comparison page runs against. Synthesizing
    /// it is a collaborator concern; the default reproduces the demo rival.
    pub counterpart: ProductRecord,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            render: RenderConfig::default(),
            faq_selection: SelectionPolicy::default(),
            counterpart: default_counterpart(),
        }
    }
}

/// The fictional rival product used when no counterpart is injected. It is
/// intentionally different from typical subject products so every comparison
/// criterion has something to disagree about.
pub fn default_counterpart() -> ProductRecord {
    ProductRecord::new(
        "RadiantGlow C+ Serum",
        "15% Vitamin C",
        vec!["Dry".into(), "Normal".into(), "Combination".into()],
        vec![
            "Vitamin C".into(),
            "Vitamin E".into(),
            "Ferulic Acid".into(),
        ],
        vec!["Anti-aging".into(), "Brightening".into(), "Firming".into()],
        "Apply 3-4 drops in the evening after cleansing",
        "Possible sensitivity to sunlight",
        "₹899",
    )
    .expect("built-in counterpart record is valid")
}
