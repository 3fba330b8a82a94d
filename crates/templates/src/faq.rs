//! FAQ page template.

use crate::schema::{FieldKind, FieldSpec, TemplateSchema};
use crate::{check_output, RenderConfig, Template, TemplateRenderError};
use itertools::Itertools;
use pagesmith_types::{DocumentMetadata, ProductRecord, Question, RenderedDocument};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};

/// How the template chooses which generated questions to publish.
///
/// The two policies are deliberately distinct and never hybridized:
/// `PublishAll` keeps every generated question for full traceability (the
/// default), `RoundRobin` interleaves categories and caps the selection at
/// `min_count * 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    PublishAll,
    RoundRobin { min_count: usize },
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::PublishAll
    }
}

/// Input contract for the FAQ template: the record plus the generated batch.
#[derive(Debug, Clone)]
pub struct FaqInput {
    pub product: ProductRecord,
    pub questions: Vec<Question>,
}

/// Renders the FAQ page from an unordered batch of generated questions.
#[derive(Debug, Default)]
pub struct FaqTemplate {
    selection: SelectionPolicy,
    config: RenderConfig,
}

impl FaqTemplate {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            selection: SelectionPolicy::default(),
            config,
        }
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    fn select<'a>(&self, questions: &'a [Question]) -> Vec<&'a Question> {
        match self.selection {
            SelectionPolicy::PublishAll => questions.iter().collect(),
            SelectionPolicy::RoundRobin { min_count } => {
                Self::round_robin(questions, min_count * 2)
            }
        }
    }

    /// Round-robin interleave over categories in encounter order, stopping
    /// at the ceiling or when the batch is exhausted.
    fn round_robin(questions: &[Question], ceiling: usize) -> Vec<&Question> {
        let mut category_order = Vec::new();
        let mut by_category: HashMap<_, VecDeque<&Question>> = HashMap::new();
        for question in questions {
            let bucket = by_category.entry(question.category()).or_default();
            if bucket.is_empty() && !category_order.contains(&question.category()) {
                category_order.push(question.category());
            }
            bucket.push_back(question);
        }

        let target = ceiling.min(questions.len());
        let mut selected = Vec::with_capacity(target);
        while selected.len() < target {
            for category in &category_order {
                if selected.len() >= target {
                    break;
                }
                if let Some(question) = by_category.get_mut(category).and_then(VecDeque::pop_front)
                {
                    selected.push(question);
                }
            }
        }
        selected
    }
}

impl Template for FaqTemplate {
    type Input = FaqInput;

    fn name(&self) -> &'static str {
        "FAQTemplate"
    }

    fn schema(&self) -> TemplateSchema {
        TemplateSchema::new(
            "FAQ",
            vec![
                FieldSpec::required("title", FieldKind::Text),
                FieldSpec::required("product_name", FieldKind::Text),
                FieldSpec::required("questions", FieldKind::List).with_min_items(5),
            ],
        )
    }

    fn render(&self, input: &FaqInput) -> Result<RenderedDocument, TemplateRenderError> {
        let selected = self.select(&input.questions);

        let entries: Vec<Value> = selected
            .iter()
            .map(|question| {
                json!({
                    "category": question.category().as_str(),
                    "question": question.question(),
                    "answer": question.answer(),
                })
            })
            .collect();

        // Distinct categories in first-appearance order, for determinism.
        let categories: Vec<&str> = selected
            .iter()
            .map(|question| question.category().as_str())
            .unique()
            .collect();

        let metadata = DocumentMetadata::stamp(self.name(), self.version())
            .with_counter("total_questions", entries.len())
            .with_counter("categories", json!(categories));

        let mut document = RenderedDocument::new(metadata);
        document.insert_section(
            "title",
            format!(
                "Frequently Asked Questions - {}",
                input.product.product_name()
            ),
        );
        document.insert_section("product_name", input.product.product_name());
        document.insert_section("questions", Value::Array(entries));

        check_output(self.name(), &self.schema(), &document, self.config)?;
        Ok(document)
    }
}
