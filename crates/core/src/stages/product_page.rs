//! Product page render stage.

use crate::stage::{Stage, StageError};
use pagesmith_templates::{ProductPageTemplate, RenderConfig, Template};
use pagesmith_types::{ProductRecord, RenderedDocument};

/// Renders the product description document from the parsed record alone.
#[derive(Debug)]
pub struct ProductPageStage {
    template: ProductPageTemplate,
}

impl ProductPageStage {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            template: ProductPageTemplate::new(config),
        }
    }
}

impl Stage for ProductPageStage {
    type Input = ProductRecord;
    type Output = RenderedDocument;

    fn name(&self) -> &'static str {
        "render-product-page"
    }

    fn execute(&self, record: &ProductRecord) -> Result<RenderedDocument, StageError> {
        let document = self.template.render(record)?;
        log::info!(
            "[render-product-page] generated product page for {}",
            record.product_name()
        );
        Ok(document)
    }
}
