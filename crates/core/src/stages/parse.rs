//! Parse stage: raw mapping in, validated product record out.

use crate::stage::{Stage, StageError};
use pagesmith_types::{product::REQUIRED_FIELDS, ProductRecord, ValidationError};
use serde_json::Value;

/// Parses an untyped JSON mapping into the immutable [`ProductRecord`] every
/// downstream stage reads.
#[derive(Debug, Default)]
pub struct ParseStage;

impl ParseStage {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for ParseStage {
    type Input = Value;
    type Output = ProductRecord;

    fn name(&self) -> &'static str {
        "parse"
    }

    /// Requires a JSON object carrying every declared field; all missing
    /// field names are reported together.
    fn validate_input(&self, input: &Value) -> Result<(), ValidationError> {
        let map = input.as_object().ok_or(ValidationError::NotAnObject)?;
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !map.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        Ok(())
    }

    fn execute(&self, input: &Value) -> Result<ProductRecord, StageError> {
        let record = ProductRecord::from_value(input)?;
        log::info!("[parse] parsed product: {}", record.product_name());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_input_lists_every_missing_field() {
        let err = ParseStage::new()
            .validate_input(&json!({ "product_name": "X" }))
            .unwrap_err();
        match err {
            ValidationError::MissingFields(fields) => assert_eq!(fields.len(), 7),
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn validate_input_rejects_non_objects() {
        assert_eq!(
            ParseStage::new().validate_input(&json!(null)).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn execute_produces_a_trimmed_record() {
        let record = ParseStage::new()
            .execute(&json!({
                "product_name": " X Serum ",
                "concentration": "10% Vitamin C",
                "skin_type": ["Oily"],
                "key_ingredients": ["Vitamin C"],
                "benefits": ["Brightening"],
                "how_to_use": "Apply daily in the morning",
                "side_effects": "None",
                "price": "₹500"
            }))
            .unwrap();
        assert_eq!(record.product_name(), "X Serum");
    }
}
