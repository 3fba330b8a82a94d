//! Benefits narrative block.

use crate::{BlockError, ContentBlock};
use itertools::Itertools;
use pagesmith_types::ProductRecord;
use serde_json::{json, Map, Value};

/// Turns the raw benefit list into structured, engaging copy.
///
/// Known benefits get curated descriptions and icons; anything else falls
/// back to a generic templated line.
#[derive(Debug, Default)]
pub struct BenefitsBlock;

impl BenefitsBlock {
    pub fn new() -> Self {
        Self
    }

    fn describe(benefit: &str, record: &ProductRecord) -> String {
        match benefit {
            "Brightening" => format!(
                "Powered by {}, this serum helps reveal a more radiant and even-toned complexion.",
                record.concentration()
            ),
            "Fades dark spots" => {
                "Targets hyperpigmentation and dark spots, promoting a clearer, more uniform skin \
                 tone over time."
                    .to_string()
            }
            other => format!(
                "Experience the transformative effects of {}.",
                other.to_lowercase()
            ),
        }
    }

    fn icon(benefit: &str) -> &'static str {
        match benefit {
            "Brightening" => "✨",
            "Fades dark spots" => "🎯",
            _ => "⭐",
        }
    }
}

impl ContentBlock for BenefitsBlock {
    type Input = ProductRecord;

    fn name(&self) -> &'static str {
        "BenefitsBlock"
    }

    fn generate(&self, record: &ProductRecord) -> Result<Map<String, Value>, BlockError> {
        let entries: Vec<Value> = record
            .benefits()
            .iter()
            .map(|benefit| {
                json!({
                    "benefit": benefit,
                    "description": Self::describe(benefit, record),
                    "icon": Self::icon(benefit),
                })
            })
            .collect();

        let summary = format!(
            "Experience {} with consistent use.",
            record
                .benefits()
                .iter()
                .map(|benefit| benefit.to_lowercase())
                .join(" and ")
        );

        let mut section = Map::new();
        section.insert("title".into(), json!("Key Benefits"));
        section.insert(
            "subtitle".into(),
            json!(format!(
                "What {} Does For Your Skin",
                record.product_name()
            )),
        );
        section.insert("benefits".into(), Value::Array(entries));
        section.insert("summary".into(), json!(summary));
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_types::ProductRecord;

    fn record() -> ProductRecord {
        ProductRecord::new(
            "GlowBoost Serum",
            "20% Vitamin C",
            vec!["Oily".into()],
            vec!["Vitamin C".into()],
            vec!["Brightening".into(), "Soothing".into()],
            "Apply in the morning",
            "None",
            "₹599",
        )
        .unwrap()
    }

    #[test]
    fn unknown_benefit_falls_back_to_generic_copy() {
        let section = BenefitsBlock::new().generate(&record()).unwrap();
        let entries = section["benefits"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1]["description"],
            "Experience the transformative effects of soothing."
        );
        assert_eq!(entries[1]["icon"], "⭐");
    }

    #[test]
    fn summary_joins_benefits_in_lowercase() {
        let section = BenefitsBlock::new().generate(&record()).unwrap();
        assert_eq!(
            section["summary"],
            "Experience brightening and soothing with consistent use."
        );
    }
}
