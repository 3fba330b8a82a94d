//! FAQ render stage.

use crate::stage::{Stage, StageError};
use pagesmith_templates::{FaqInput, FaqTemplate, RenderConfig, SelectionPolicy, Template};
use pagesmith_types::{RenderedDocument, ValidationError};

/// Renders the FAQ document from the parsed record plus the generated batch.
#[derive(Debug)]
pub struct FaqStage {
    template: FaqTemplate,
}

impl FaqStage {
    pub fn new(config: RenderConfig, selection: SelectionPolicy) -> Self {
        Self {
            template: FaqTemplate::new(config).with_selection(selection),
        }
    }
}

impl Stage for FaqStage {
    type Input = FaqInput;
    type Output = RenderedDocument;

    fn name(&self) -> &'static str {
        "render-faq"
    }

    /// The FAQ contract needs at least one generated question to publish.
    fn validate_input(&self, input: &FaqInput) -> Result<(), ValidationError> {
        if input.questions.is_empty() {
            return Err(ValidationError::EmptyList {
                field: "questions".to_string(),
            });
        }
        Ok(())
    }

    fn execute(&self, input: &FaqInput) -> Result<RenderedDocument, StageError> {
        let document = self.template.render(input)?;
        log::info!(
            "[render-faq] generated FAQ with {} questions",
            document.metadata().counters["total_questions"]
        );
        Ok(document)
    }
}
