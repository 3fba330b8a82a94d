//! Usage instructions block.

use crate::{BlockError, ContentBlock};
use itertools::Itertools;
use pagesmith_types::ProductRecord;
use serde_json::{json, Map, Value};

/// Expands the raw usage text into a structured step-by-step guide with
/// frequency, timing, and tips.
#[derive(Debug, Default)]
pub struct UsageBlock;

impl UsageBlock {
    pub fn new() -> Self {
        Self
    }

    fn steps() -> Value {
        json!([
            { "step": 1, "action": "Cleanse", "description": "Start with a clean, dry face" },
            { "step": 2, "action": "Apply", "description": "Apply 2-3 drops of serum to your face and neck" },
            { "step": 3, "action": "Massage", "description": "Gently massage in upward motions until absorbed" },
            { "step": 4, "action": "Protect", "description": "Follow with sunscreen as directed" },
        ])
    }

    fn frequency(usage_text: &str) -> &'static str {
        if usage_text.to_lowercase().contains("morning") {
            "Once daily (morning)"
        } else {
            "As directed"
        }
    }

    fn timing(usage_text: &str) -> &'static str {
        if usage_text.to_lowercase().contains("before sunscreen") {
            "Before sunscreen application"
        } else {
            "As part of your skincare routine"
        }
    }

    fn tips(record: &ProductRecord) -> Vec<String> {
        vec![
            "Store in a cool, dark place to maintain potency".to_string(),
            format!(
                "Suitable for {} skin",
                record
                    .skin_type()
                    .iter()
                    .map(|skin| skin.to_lowercase())
                    .join(" and ")
            ),
            "Perform a patch test before first use".to_string(),
        ]
    }
}

impl ContentBlock for UsageBlock {
    type Input = ProductRecord;

    fn name(&self) -> &'static str {
        "UsageBlock"
    }

    fn generate(&self, record: &ProductRecord) -> Result<Map<String, Value>, BlockError> {
        let mut section = Map::new();
        section.insert("title".into(), json!("How to Use"));
        section.insert(
            "subtitle".into(),
            json!("Get the Most Out of Your Serum"),
        );
        section.insert("instructions".into(), json!(record.how_to_use()));
        section.insert("steps".into(), Self::steps());
        section.insert(
            "frequency".into(),
            json!(Self::frequency(record.how_to_use())),
        );
        section.insert("timing".into(), json!(Self::timing(record.how_to_use())));
        section.insert("tips".into(), json!(Self::tips(record)));
        Ok(section)
    }
}
