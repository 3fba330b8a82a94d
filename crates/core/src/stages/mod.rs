//! The five concrete pipeline stages.

mod comparison;
mod faq;
mod parse;
mod product_page;
mod questions;

pub use comparison::ComparisonStage;
pub use faq::FaqStage;
pub use parse::ParseStage;
pub use product_page::ProductPageStage;
pub use questions::QuestionStage;
