//! Rendered document values produced by templates.

use chrono::Utc;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Metadata stamped on every rendered document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMetadata {
    pub generated_at: String,
    pub template: String,
    pub version: String,
    /// Template-specific counters (question totals, block lists, ...).
    #[serde(flatten)]
    pub counters: Map<String, Value>,
}

impl DocumentMetadata {
    /// Stamps metadata for a template at the current instant.
    pub fn stamp(template: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            template: template.into(),
            version: version.into(),
            counters: Map::new(),
        }
    }

    /// Adds a template-specific counter, builder style.
    pub fn with_counter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.counters.insert(name.into(), value.into());
        self
    }
}

/// One template's output: an insertion-ordered mapping of named sections to
/// structured content, plus a metadata sub-record.
///
/// Treated as an opaque, immutable artifact by the orchestrator. Serializes
/// to a single JSON object with the sections in insertion order and the
/// metadata last under `"metadata"`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    sections: Map<String, Value>,
    metadata: DocumentMetadata,
}

impl RenderedDocument {
    pub fn new(metadata: DocumentMetadata) -> Self {
        Self {
            sections: Map::new(),
            metadata,
        }
    }

    /// Inserts a named section, preserving insertion order.
    pub fn insert_section(&mut self, name: impl Into<String>, content: impl Into<Value>) {
        self.sections.insert(name.into(), content.into());
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }

    pub fn sections(&self) -> &Map<String, Value> {
        &self.sections
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// The section names in insertion order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Compares two documents ignoring the generation timestamp.
    pub fn content_eq(&self, other: &RenderedDocument) -> bool {
        self.sections == other.sections
            && self.metadata.template == other.metadata.template
            && self.metadata.version == other.metadata.version
            && self.metadata.counters == other.metadata.counters
    }
}

impl Serialize for RenderedDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len() + 1))?;
        for (name, content) in &self.sections {
            map.serialize_entry(name, content)?;
        }
        map.serialize_entry("metadata", &self.metadata)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RenderedDocument {
        let mut doc = RenderedDocument::new(
            DocumentMetadata::stamp("FAQTemplate", "1.0").with_counter("total_questions", 2),
        );
        doc.insert_section("title", "FAQ");
        doc.insert_section("questions", json!([{"q": "a"}, {"q": "b"}]));
        doc
    }

    #[test]
    fn sections_keep_insertion_order() {
        let doc = sample();
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, ["title", "questions"]);
    }

    #[test]
    fn serializes_with_metadata_last() {
        let doc = sample();
        let value = serde_json::to_value(&doc).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["title", "questions", "metadata"]);
        assert_eq!(value["metadata"]["template"], "FAQTemplate");
        assert_eq!(value["metadata"]["total_questions"], 2);
    }

    #[test]
    fn content_eq_ignores_timestamp() {
        let a = sample();
        let mut b = sample();
        b.metadata.generated_at = "1970-01-01T00:00:00+00:00".to_string();
        assert!(a.content_eq(&b));
        b.insert_section("extra", 1);
        assert!(!a.content_eq(&b));
    }
}
