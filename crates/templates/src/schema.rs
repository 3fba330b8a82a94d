//! Template schema descriptors and output validation.

use pagesmith_types::RenderedDocument;
use serde_json::Value;

/// The expected shape of one named section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    List,
    Mapping,
}

impl FieldKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::List => value.is_array(),
            FieldKind::Mapping => value.is_object(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::List => "list",
            FieldKind::Mapping => "mapping",
        }
    }
}

/// One field a template's output declares.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum entry count for list fields.
    pub min_items: Option<usize>,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            min_items: None,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            min_items: None,
        }
    }

    pub fn with_min_items(mut self, min_items: usize) -> Self {
        self.min_items = Some(min_items);
        self
    }
}

/// A template's published schema: field names, shapes, nesting rules, and
/// the content blocks its fields depend on. Pure metadata, no side effects.
#[derive(Debug, Clone)]
pub struct TemplateSchema {
    pub doc_type: &'static str,
    pub fields: Vec<FieldSpec>,
    /// `(field, block)` pairs: which block each dependent field comes from.
    pub block_dependencies: Vec<(&'static str, &'static str)>,
}

impl TemplateSchema {
    pub fn new(doc_type: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            doc_type,
            fields,
            block_dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, field: &'static str, block: &'static str) -> Self {
        self.block_dependencies.push((field, block));
        self
    }

    /// Validates a rendered document's sections against this schema,
    /// collecting every violation rather than stopping at the first.
    pub fn validate(&self, document: &RenderedDocument) -> Vec<String> {
        let mut violations = Vec::new();
        for field in &self.fields {
            match document.section(field.name) {
                None if field.required => {
                    violations.push(format!("missing required field '{}'", field.name));
                }
                None => {}
                Some(value) => {
                    if !field.kind.matches(value) {
                        violations.push(format!(
                            "field '{}' must be a {}",
                            field.name,
                            field.kind.describe()
                        ));
                    } else if let (Some(min), Some(entries)) = (field.min_items, value.as_array()) {
                        if entries.len() < min {
                            violations.push(format!(
                                "field '{}' must have at least {} entries, found {}",
                                field.name,
                                min,
                                entries.len()
                            ));
                        }
                    }
                }
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_types::{DocumentMetadata, RenderedDocument};
    use serde_json::json;

    fn schema() -> TemplateSchema {
        TemplateSchema::new(
            "FAQ",
            vec![
                FieldSpec::required("title", FieldKind::Text),
                FieldSpec::required("questions", FieldKind::List).with_min_items(2),
                FieldSpec::optional("footnote", FieldKind::Text),
            ],
        )
    }

    fn document(sections: &[(&str, Value)]) -> RenderedDocument {
        let mut doc = RenderedDocument::new(DocumentMetadata::stamp("Test", "1.0"));
        for (name, value) in sections {
            doc.insert_section(*name, value.clone());
        }
        doc
    }

    #[test]
    fn well_shaped_document_passes() {
        let doc = document(&[("title", json!("FAQ")), ("questions", json!([1, 2]))]);
        assert!(schema().validate(&doc).is_empty());
    }

    #[test]
    fn all_violations_are_collected() {
        let doc = document(&[("questions", json!("not a list"))]);
        let violations = schema().validate(&doc);
        assert_eq!(
            violations,
            vec![
                "missing required field 'title'",
                "field 'questions' must be a list",
            ]
        );
    }

    #[test]
    fn min_items_is_enforced_for_lists() {
        let doc = document(&[("title", json!("FAQ")), ("questions", json!([1]))]);
        let violations = schema().validate(&doc);
        assert_eq!(
            violations,
            vec!["field 'questions' must have at least 2 entries, found 1"]
        );
    }

    #[test]
    fn missing_optional_field_is_fine() {
        let doc = document(&[("title", json!("FAQ")), ("questions", json!([1, 2]))]);
        assert!(schema().validate(&doc).is_empty());
    }
}
