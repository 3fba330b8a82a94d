//! The validated product record consumed by every pipeline stage.

use crate::error::ValidationError;
use serde::Serialize;
use serde_json::Value;

/// Minimum length for usage instructions, matching the input contract.
const MIN_USAGE_LEN: usize = 5;

/// An immutable, validated product record.
///
/// Created once by the parse stage and read-only thereafter. All string
/// fields are trimmed on construction; every list field is guaranteed to
/// hold at least one non-blank entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    product_name: String,
    concentration: String,
    skin_type: Vec<String>,
    key_ingredients: Vec<String>,
    benefits: Vec<String>,
    how_to_use: String,
    side_effects: String,
    price: String,
}

/// The field names a raw input mapping must provide.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "product_name",
    "concentration",
    "skin_type",
    "key_ingredients",
    "benefits",
    "how_to_use",
    "side_effects",
    "price",
];

impl ProductRecord {
    /// Constructs a record from already-typed parts, applying the same
    /// trimming and non-blank validation as [`ProductRecord::from_value`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_name: impl Into<String>,
        concentration: impl Into<String>,
        skin_type: Vec<String>,
        key_ingredients: Vec<String>,
        benefits: Vec<String>,
        how_to_use: impl Into<String>,
        side_effects: impl Into<String>,
        price: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let how_to_use = non_blank("how_to_use", how_to_use.into())?;
        if how_to_use.chars().count() < MIN_USAGE_LEN {
            return Err(ValidationError::TooShort {
                field: "how_to_use".to_string(),
                min: MIN_USAGE_LEN,
            });
        }

        Ok(Self {
            product_name: non_blank("product_name", product_name.into())?,
            concentration: non_blank("concentration", concentration.into())?,
            skin_type: trimmed_list("skin_type", skin_type)?,
            key_ingredients: trimmed_list("key_ingredients", key_ingredients)?,
            benefits: trimmed_list("benefits", benefits)?,
            how_to_use,
            side_effects: side_effects.into().trim().to_string(),
            price: non_blank("price", price.into())?,
        })
    }

    /// Constructs a record from a raw JSON mapping.
    ///
    /// All missing required fields are reported in a single
    /// [`ValidationError::MissingFields`], not just the first one found.
    pub fn from_value(raw: &Value) -> Result<Self, ValidationError> {
        let map = raw.as_object().ok_or(ValidationError::NotAnObject)?;

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !map.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Self::new(
            string_field(map, "product_name")?,
            string_field(map, "concentration")?,
            list_field(map, "skin_type")?,
            list_field(map, "key_ingredients")?,
            list_field(map, "benefits")?,
            string_field(map, "how_to_use")?,
            string_field(map, "side_effects")?,
            string_field(map, "price")?,
        )
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn concentration(&self) -> &str {
        &self.concentration
    }

    pub fn skin_type(&self) -> &[String] {
        &self.skin_type
    }

    pub fn key_ingredients(&self) -> &[String] {
        &self.key_ingredients
    }

    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    pub fn how_to_use(&self) -> &str {
        &self.how_to_use
    }

    pub fn side_effects(&self) -> &str {
        &self.side_effects
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

fn non_blank(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField(field.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Trims every entry and drops the blank ones; an entirely blank list fails.
fn trimmed_list(field: &str, values: Vec<String>) -> Result<Vec<String>, ValidationError> {
    let kept: Vec<String> = values
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect();
    if kept.is_empty() {
        return Err(ValidationError::EmptyList {
            field: field.to_string(),
        });
    }
    Ok(kept)
}

fn string_field(
    map: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, ValidationError> {
    map[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ValidationError::WrongType {
            field: field.to_string(),
            expected: "string",
        })
}

fn list_field(
    map: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<Vec<String>, ValidationError> {
    let entries = map[field]
        .as_array()
        .ok_or_else(|| ValidationError::WrongType {
            field: field.to_string(),
            expected: "list of strings",
        })?;
    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| ValidationError::WrongType {
                    field: field.to_string(),
                    expected: "list of strings",
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_product() -> Value {
        json!({
            "product_name": "  GlowBoost Vitamin C Serum  ",
            "concentration": "20% Vitamin C",
            "skin_type": ["Oily", " Combination ", "  "],
            "key_ingredients": ["Vitamin C", "Hyaluronic Acid"],
            "benefits": ["Brightening", "Fades dark spots"],
            "how_to_use": "Apply 2-3 drops in the morning before sunscreen",
            "side_effects": "Mild tingling for first-time users",
            "price": "₹599"
        })
    }

    #[test]
    fn from_value_trims_strings_and_list_entries() {
        let record = ProductRecord::from_value(&raw_product()).unwrap();
        assert_eq!(record.product_name(), "GlowBoost Vitamin C Serum");
        assert_eq!(record.skin_type(), ["Oily", "Combination"]);
    }

    #[test]
    fn from_value_reports_all_missing_fields_at_once() {
        let raw = json!({ "product_name": "X", "price": "₹10" });
        let err = ProductRecord::from_value(&raw).unwrap_err();
        match err {
            ValidationError::MissingFields(fields) => {
                assert_eq!(
                    fields,
                    vec![
                        "concentration",
                        "skin_type",
                        "key_ingredients",
                        "benefits",
                        "how_to_use",
                        "side_effects"
                    ]
                );
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert_eq!(
            ProductRecord::from_value(&json!([1, 2])).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn blank_list_is_rejected() {
        let mut raw = raw_product();
        raw["benefits"] = json!(["   ", ""]);
        let err = ProductRecord::from_value(&raw).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyList { field } if field == "benefits"));
    }

    #[test]
    fn short_usage_instructions_are_rejected() {
        let mut raw = raw_product();
        raw["how_to_use"] = json!("Use");
        let err = ProductRecord::from_value(&raw).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { .. }));
    }
}
