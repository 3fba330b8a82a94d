//! The pipeline orchestrator.

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::sink::OutputSink;
use crate::stage::StageRunner;
use crate::stages::{ComparisonStage, FaqStage, ParseStage, ProductPageStage, QuestionStage};
use pagesmith_templates::FaqInput;
use pagesmith_types::{PipelineMetadata, ResultBundle, StatsSnapshot};
use serde_json::Value;

/// Executes the fixed four-stage dependency graph and aggregates results.
///
/// Order is strict: parse must complete before question generation, and both
/// feed the FAQ render; the product page and comparison renders need only the
/// parsed record. The three renders are independent consumers of the same
/// upstream values; they run sequentially here, but nothing about the bundle
/// depends on their relative order.
///
/// The orchestrator is the only component that knows this graph. A stage's
/// terminal failure (after its own retries) aborts the whole run with that
/// stage's error; no partial bundle is ever produced.
pub struct Orchestrator {
    parse: StageRunner<ParseStage>,
    questions: StageRunner<QuestionStage>,
    faq: StageRunner<FaqStage>,
    product_page: StageRunner<ProductPageStage>,
    comparison: StageRunner<ComparisonStage>,
}

impl Orchestrator {
    /// Builds fresh stage instances from the config. Stage instances (and
    /// their statistics) are never shared across orchestrators.
    pub fn new(config: PipelineConfig) -> Self {
        let retry = config.retry;
        Self {
            parse: StageRunner::new(ParseStage::new(), retry),
            questions: StageRunner::new(QuestionStage::new(), retry),
            faq: StageRunner::new(
                FaqStage::new(config.render, config.faq_selection),
                retry,
            ),
            product_page: StageRunner::new(ProductPageStage::new(config.render), retry),
            comparison: StageRunner::new(
                ComparisonStage::new(config.render, config.counterpart),
                retry,
            ),
        }
    }

    /// Runs the full pipeline over one raw product mapping.
    pub fn run(&mut self, raw: &Value) -> Result<ResultBundle, PipelineError> {
        log::info!("[orchestrator] starting content generation pipeline");

        log::info!("[orchestrator] stage 1: data parsing");
        let product = self.parse.run(raw)?;

        log::info!("[orchestrator] stage 2: question generation");
        let questions = self.questions.run(&product)?;
        let total_questions = questions.len();

        log::info!("[orchestrator] stage 3: page generation (independent fan-out)");
        let faq_input = FaqInput {
            product: product.clone(),
            questions,
        };
        let faq = self.faq.run(&faq_input)?;
        let product_page = self.product_page.run(&product)?;
        let comparison = self.comparison.run(&product)?;

        log::info!("[orchestrator] pipeline completed successfully");

        Ok(ResultBundle {
            faq,
            product_page,
            comparison,
            metadata: PipelineMetadata {
                total_questions_generated: total_questions,
                pages_generated: 3,
                pipeline_status: "success".to_string(),
            },
        })
    }

    /// Hands every named document of a finished bundle to the sink.
    pub fn publish(
        &self,
        bundle: &ResultBundle,
        sink: &mut dyn OutputSink,
    ) -> Result<(), PipelineError> {
        for (name, document) in bundle.documents() {
            sink.persist(name, document)?;
            log::info!("[orchestrator] published document '{name}'");
        }
        Ok(())
    }

    /// Statistics snapshots for every owned stage, in pipeline order. This is
    /// the entire metrics surface the pipeline commits to.
    pub fn stats(&self) -> Vec<StatsSnapshot> {
        vec![
            self.parse.stats(),
            self.questions.stats(),
            self.faq.stats(),
            self.product_page.stats(),
            self.comparison.stats(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_product() -> Value {
        json!({
            "product_name": "X Serum",
            "concentration": "10% Vitamin C",
            "skin_type": ["Oily"],
            "key_ingredients": ["Vitamin C"],
            "benefits": ["Brightening"],
            "how_to_use": "Apply daily in the morning",
            "side_effects": "None",
            "price": "₹500"
        })
    }

    #[test]
    fn run_produces_three_documents_and_run_metadata() {
        let mut orchestrator = Orchestrator::new(PipelineConfig::default());
        let bundle = orchestrator.run(&raw_product()).unwrap();
        assert_eq!(bundle.metadata.pages_generated, 3);
        assert_eq!(bundle.metadata.pipeline_status, "success");
        assert!(bundle.metadata.total_questions_generated >= 15);
        assert_eq!(bundle.documents().len(), 3);
    }

    #[test]
    fn parse_failure_aborts_the_run_before_any_render() {
        let mut orchestrator = Orchestrator::new(PipelineConfig::default());
        let err = orchestrator.run(&json!({ "product_name": "X" })).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput { stage, .. } if stage == "parse"));
        for snapshot in orchestrator.stats() {
            assert_eq!(snapshot.executions, 0, "{} ran", snapshot.name);
        }
    }

    #[test]
    fn stats_cover_every_stage_in_pipeline_order() {
        let mut orchestrator = Orchestrator::new(PipelineConfig::default());
        orchestrator.run(&raw_product()).unwrap();
        let names: Vec<String> = orchestrator
            .stats()
            .into_iter()
            .map(|snapshot| snapshot.name)
            .collect();
        assert_eq!(
            names,
            [
                "parse",
                "generate-questions",
                "render-faq",
                "render-product-page",
                "render-comparison"
            ]
        );
        for snapshot in orchestrator.stats() {
            assert_eq!(snapshot.executions, 1, "{} not recorded", snapshot.name);
        }
    }
}
