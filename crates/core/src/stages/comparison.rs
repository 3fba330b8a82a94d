//! Comparison page render stage.

use crate::stage::{Stage, StageError};
use pagesmith_blocks::ProductPair;
use pagesmith_templates::{ComparisonTemplate, RenderConfig, Template};
use pagesmith_types::{ProductRecord, RenderedDocument};

/// Renders the comparison document: the subject record against an injected
/// counterpart.
///
/// The counterpart is fixed at construction; this stage never synthesizes
/// one itself.
#[derive(Debug)]
pub struct ComparisonStage {
    template: ComparisonTemplate,
    counterpart: ProductRecord,
}

impl ComparisonStage {
    pub fn new(config: RenderConfig, counterpart: ProductRecord) -> Self {
        Self {
            template: ComparisonTemplate::new(config),
            counterpart,
        }
    }
}

impl Stage for ComparisonStage {
    type Input = ProductRecord;
    type Output = RenderedDocument;

    fn name(&self) -> &'static str {
        "render-comparison"
    }

    fn execute(&self, record: &ProductRecord) -> Result<RenderedDocument, StageError> {
        log::info!(
            "[render-comparison] comparing {} vs {}",
            record.product_name(),
            self.counterpart.product_name()
        );
        let pair = ProductPair::new(record.clone(), self.counterpart.clone());
        let document = self.template.render(&pair)?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_counterpart;

    fn record() -> ProductRecord {
        ProductRecord::new(
            "X Serum",
            "10% Vitamin C",
            vec!["Oily".into()],
            vec!["Vitamin C".into()],
            vec!["Brightening".into()],
            "Apply daily in the morning",
            "None",
            "₹500",
        )
        .unwrap()
    }

    #[test]
    fn subject_is_product_a_and_counterpart_is_product_b() {
        let stage = ComparisonStage::new(RenderConfig::default(), default_counterpart());
        let doc = stage.execute(&record()).unwrap();
        assert_eq!(doc.section("product_a").unwrap()["name"], "X Serum");
        assert_eq!(
            doc.section("product_b").unwrap()["name"],
            "RadiantGlow C+ Serum"
        );
    }
}
