//! Ingredient enrichment block.

use crate::knowledge::ingredient_profile;
use crate::{BlockError, ContentBlock};
use pagesmith_types::ProductRecord;
use serde_json::{json, Map, Value};

/// Enriches the ingredient list with scientific names, descriptions, and
/// benefit tags from the static knowledge base.
#[derive(Debug, Default)]
pub struct IngredientsBlock;

impl IngredientsBlock {
    pub fn new() -> Self {
        Self
    }

    fn entry(ingredient: &str) -> Value {
        match ingredient_profile(ingredient) {
            Some(profile) => json!({
                "name": ingredient,
                "scientific_name": profile.scientific_name,
                "description": profile.description,
                "benefits": profile.benefits,
            }),
            // Best-effort fallback: unrecognized ingredients never abort generation.
            None => json!({
                "name": ingredient,
                "scientific_name": ingredient,
                "description": "A key active ingredient in this formulation",
                "benefits": ["Skin enhancement"],
            }),
        }
    }

    fn formula_type(record: &ProductRecord) -> &'static str {
        let has = |name: &str| record.key_ingredients().iter().any(|i| i == name);
        if has("Vitamin C") && has("Hyaluronic Acid") {
            "Brightening + Hydrating Formula"
        } else {
            "Active Serum Formula"
        }
    }
}

impl ContentBlock for IngredientsBlock {
    type Input = ProductRecord;

    fn name(&self) -> &'static str {
        "IngredientsBlock"
    }

    fn generate(&self, record: &ProductRecord) -> Result<Map<String, Value>, BlockError> {
        let entries: Vec<Value> = record
            .key_ingredients()
            .iter()
            .map(|ingredient| Self::entry(ingredient))
            .collect();

        let mut section = Map::new();
        section.insert("title".into(), json!("Star Ingredients"));
        section.insert(
            "subtitle".into(),
            json!("Science-Backed Actives That Work"),
        );
        section.insert("concentration".into(), json!(record.concentration()));
        section.insert("ingredients".into(), Value::Array(entries));
        section.insert("formula_type".into(), json!(Self::formula_type(record)));
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ingredients: Vec<String>) -> ProductRecord {
        ProductRecord::new(
            "GlowBoost Serum",
            "20% Vitamin C",
            vec!["Oily".into()],
            ingredients,
            vec!["Brightening".into()],
            "Apply in the morning",
            "None",
            "₹599",
        )
        .unwrap()
    }

    #[test]
    fn known_ingredients_are_enriched_from_the_knowledge_base() {
        let section = IngredientsBlock::new()
            .generate(&record(vec!["Vitamin C".into(), "Hyaluronic Acid".into()]))
            .unwrap();
        let entries = section["ingredients"].as_array().unwrap();
        assert_eq!(entries[0]["scientific_name"], "Ascorbic Acid");
        assert_eq!(entries[1]["scientific_name"], "Sodium Hyaluronate");
        assert_eq!(section["formula_type"], "Brightening + Hydrating Formula");
    }

    #[test]
    fn unknown_ingredient_gets_the_generic_profile() {
        let section = IngredientsBlock::new()
            .generate(&record(vec!["Bakuchiol".into()]))
            .unwrap();
        let entries = section["ingredients"].as_array().unwrap();
        assert_eq!(entries[0]["scientific_name"], "Bakuchiol");
        assert_eq!(
            entries[0]["description"],
            "A key active ingredient in this formulation"
        );
        assert_eq!(section["formula_type"], "Active Serum Formula");
    }
}
