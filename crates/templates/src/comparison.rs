//! Product comparison page template.

use crate::schema::{FieldKind, FieldSpec, TemplateSchema};
use crate::{check_output, RenderConfig, Template, TemplateRenderError};
use itertools::Itertools;
use pagesmith_blocks::{ComparisonBlock, ContentBlock, ProductPair};
use pagesmith_types::{DocumentMetadata, ProductRecord, RenderedDocument};
use serde_json::{json, Value};

/// Renders a side-by-side comparison of exactly two fully-populated records.
///
/// Synthesizing the counterpart record is the caller's concern; this template
/// only consumes the pair.
#[derive(Debug, Default)]
pub struct ComparisonTemplate {
    comparison: ComparisonBlock,
    config: RenderConfig,
}

impl ComparisonTemplate {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            comparison: ComparisonBlock::new(),
            config,
        }
    }

    fn summary(record: &ProductRecord) -> Value {
        json!({
            "name": record.product_name(),
            "concentration": record.concentration(),
            "price": record.price(),
            "skin_type": record.skin_type(),
            "key_ingredients": record.key_ingredients(),
            "benefits": record.benefits(),
        })
    }

    fn best_for(record: &ProductRecord) -> String {
        format!(
            "Best for {} skin seeking {}",
            record
                .skin_type()
                .iter()
                .map(|skin| skin.to_lowercase())
                .join(" and "),
            record
                .benefits()
                .iter()
                .map(|benefit| benefit.to_lowercase())
                .join(" and "),
        )
    }

    fn recommendation(pair: &ProductPair, overall_winner: &str) -> Value {
        let (recommended, reason) = match overall_winner {
            "product_a" => (
                &pair.product_a,
                format!(
                    "{} offers better overall value and effectiveness.",
                    pair.product_a.product_name()
                ),
            ),
            "product_b" => (
                &pair.product_b,
                format!(
                    "{} provides superior benefits and formulation.",
                    pair.product_b.product_name()
                ),
            ),
            _ => (
                &pair.product_a,
                "Both products have comparable benefits. Choose based on your specific needs."
                    .to_string(),
            ),
        };
        json!({
            "recommended_product": recommended.product_name(),
            "reason": reason,
            "best_for": Self::best_for(recommended),
        })
    }
}

impl Template for ComparisonTemplate {
    type Input = ProductPair;

    fn name(&self) -> &'static str {
        "ComparisonTemplate"
    }

    fn schema(&self) -> TemplateSchema {
        TemplateSchema::new(
            "ComparisonPage",
            vec![
                FieldSpec::required("title", FieldKind::Text),
                FieldSpec::required("product_a", FieldKind::Mapping),
                FieldSpec::required("product_b", FieldKind::Mapping),
                FieldSpec::required("comparison_matrix", FieldKind::List),
                FieldSpec::required("recommendation", FieldKind::Mapping),
            ],
        )
        .with_dependency("comparison_matrix", "ComparisonBlock")
    }

    fn render(&self, pair: &ProductPair) -> Result<RenderedDocument, TemplateRenderError> {
        let comparison = self.comparison.generate(pair)?;
        let matrix = comparison["criteria"].clone();
        let overall_winner = comparison["overall_winner"]
            .as_str()
            .unwrap_or("tie")
            .to_string();
        let criteria_count = matrix.as_array().map_or(0, Vec::len);

        let metadata = DocumentMetadata::stamp(self.name(), self.version())
            .with_counter("comparison_criteria_count", criteria_count);

        let mut document = RenderedDocument::new(metadata);
        document.insert_section(
            "title",
            format!(
                "{} vs {}",
                pair.product_a.product_name(),
                pair.product_b.product_name()
            ),
        );
        document.insert_section("product_a", Self::summary(&pair.product_a));
        document.insert_section("product_b", Self::summary(&pair.product_b));
        document.insert_section("comparison_matrix", matrix);
        document.insert_section(
            "recommendation",
            Self::recommendation(pair, &overall_winner),
        );

        check_output(self.name(), &self.schema(), &document, self.config)?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_blocks::BlockError;

    fn record(name: &str, concentration: &str, price: &str) -> ProductRecord {
        ProductRecord::new(
            name,
            concentration,
            vec!["Oily".into()],
            vec!["Vitamin C".into()],
            vec!["Brightening".into()],
            "Apply in the morning",
            "None",
            price,
        )
        .unwrap()
    }

    #[test]
    fn renders_summaries_matrix_and_recommendation() {
        let template = ComparisonTemplate::new(RenderConfig { strict: true });
        let pair = ProductPair::new(
            record("Alpha Serum", "20% Vitamin C", "₹599"),
            record("Beta Serum", "15% Vitamin C", "₹899"),
        );
        let doc = template.render(&pair).unwrap();

        assert_eq!(doc.section("title").unwrap(), "Alpha Serum vs Beta Serum");
        assert_eq!(doc.section("product_a").unwrap()["name"], "Alpha Serum");
        assert_eq!(doc.metadata().counters["comparison_criteria_count"], 5);
        // Alpha wins concentration and price; everything else ties.
        assert_eq!(
            doc.section("recommendation").unwrap()["recommended_product"],
            "Alpha Serum"
        );
    }

    #[test]
    fn tie_recommendation_defaults_to_the_subject_product() {
        let template = ComparisonTemplate::new(RenderConfig::default());
        let pair = ProductPair::new(
            record("Alpha Serum", "10% Vitamin C", "₹599"),
            record("Beta Serum", "10% Vitamin C", "₹599"),
        );
        let doc = template.render(&pair).unwrap();
        let recommendation = doc.section("recommendation").unwrap();
        assert_eq!(recommendation["recommended_product"], "Alpha Serum");
        assert!(recommendation["reason"]
            .as_str()
            .unwrap()
            .starts_with("Both products"));
    }

    #[test]
    fn malformed_concentration_surfaces_as_a_block_error() {
        let template = ComparisonTemplate::new(RenderConfig::default());
        let pair = ProductPair::new(
            record("Alpha Serum", "pure magic", "₹599"),
            record("Beta Serum", "10% Vitamin C", "₹899"),
        );
        let err = template.render(&pair).unwrap_err();
        assert!(matches!(
            err,
            TemplateRenderError::Block(BlockError::MalformedConcentration { .. })
        ));
    }
}
