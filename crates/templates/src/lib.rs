//! Document templates for the Pagesmith pipeline.
//!
//! A [`Template`] assembles one final document by composing owned
//! [`ContentBlock`](pagesmith_blocks::ContentBlock)s with template-local
//! formatting rules, and publishes a [`TemplateSchema`] describing the shape
//! of its output. Blocks are held as named struct fields, so there is no
//! runtime inspection to find "the block of type X".
//!
//! Every render stamps [`DocumentMetadata`](pagesmith_types::DocumentMetadata)
//! (timestamp, template identity, version, counters) and validates its own
//! output against its schema: under [`RenderConfig::strict`] a mismatch is a
//! [`TemplateRenderError::SchemaViolation`], otherwise each violation is
//! logged at warn level and the document is returned as-is.

pub mod comparison;
pub mod faq;
pub mod product_page;
pub mod schema;

pub use comparison::ComparisonTemplate;
pub use faq::{FaqInput, FaqTemplate, SelectionPolicy};
pub use product_page::ProductPageTemplate;
pub use schema::{FieldKind, FieldSpec, TemplateSchema};

use pagesmith_blocks::BlockError;
use pagesmith_types::RenderedDocument;
use thiserror::Error;

/// Version tag stamped into every document's metadata.
pub const TEMPLATE_VERSION: &str = "1.0";

/// Errors that can occur while rendering a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateRenderError {
    #[error("content block failed: {0}")]
    Block(#[from] BlockError),

    #[error("template '{template}' produced an ill-shaped document: {}", violations.join("; "))]
    SchemaViolation {
        template: String,
        violations: Vec<String>,
    },
}

/// Configuration axis controlling schema-mismatch handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// If true, schema violations fail the render instead of being warned.
    pub strict: bool,
}

/// One complete output document, composed from content blocks plus local rules.
pub trait Template {
    /// The typed input this template renders from.
    type Input;

    /// Template identity, stamped into document metadata.
    fn name(&self) -> &'static str;

    fn version(&self) -> &'static str {
        TEMPLATE_VERSION
    }

    /// The schema contract for this template's output. Pure metadata.
    fn schema(&self) -> TemplateSchema;

    /// Renders one document from the input.
    fn render(&self, input: &Self::Input) -> Result<RenderedDocument, TemplateRenderError>;
}

/// Checks a rendered document against a schema, applying the strict/lenient
/// policy. Called by every template at the end of its render.
pub(crate) fn check_output(
    name: &'static str,
    schema: &TemplateSchema,
    document: &RenderedDocument,
    config: RenderConfig,
) -> Result<(), TemplateRenderError> {
    let violations = schema.validate(document);
    if violations.is_empty() {
        return Ok(());
    }
    if config.strict {
        return Err(TemplateRenderError::SchemaViolation {
            template: name.to_string(),
            violations,
        });
    }
    for violation in &violations {
        log::warn!("[{name}] schema violation (lenient mode): {violation}");
    }
    Ok(())
}
