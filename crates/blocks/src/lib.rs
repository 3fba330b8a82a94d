//! Reusable content-generation blocks.
//!
//! A [`ContentBlock`] encapsulates one self-contained generation rule set
//! (benefits narrative, usage steps, ingredient enrichment, comparison
//! matrix) that one or more templates compose into a document. Blocks are
//! pure functions of their input plus a static knowledge base; no state is
//! retained between calls.
//!
//! Unknown ingredients and benefits fall back to generic templated copy
//! rather than failing: best-effort generation must never abort a page. The
//! one deliberate exception is [`ComparisonBlock`], whose numeric criteria
//! treat malformed concentration/price strings as input-contract violations.

pub mod benefits;
pub mod comparison;
pub mod ingredients;
pub mod knowledge;
pub mod usage;

pub use benefits::BenefitsBlock;
pub use comparison::{ComparisonBlock, ProductPair, Winner};
pub use ingredients::IngredientsBlock;
pub use usage::UsageBlock;

use serde_json::{Map, Value};
use thiserror::Error;

/// Error type for content block generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("cannot parse a leading percentage from concentration '{value}' of {product}")]
    MalformedConcentration { product: String, value: String },

    #[error("cannot extract a numeric amount from price '{value}' of {product}")]
    MalformedPrice { product: String, value: String },
}

/// One self-contained generation rule set, reusable across templates.
pub trait ContentBlock {
    /// The typed input this block generates from.
    type Input;

    /// A stable name, used in document metadata and schema dependencies.
    fn name(&self) -> &'static str;

    /// Generates one structured section from the input.
    fn generate(&self, input: &Self::Input) -> Result<Map<String, Value>, BlockError>;
}
