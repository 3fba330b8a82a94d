//! Product description page template.

use crate::schema::{FieldKind, FieldSpec, TemplateSchema};
use crate::{check_output, RenderConfig, Template, TemplateRenderError};
use itertools::Itertools;
use pagesmith_blocks::{BenefitsBlock, ContentBlock, IngredientsBlock, UsageBlock};
use pagesmith_types::{DocumentMetadata, ProductRecord, RenderedDocument};
use serde_json::{json, Value};

/// Composes the benefits, usage, and ingredients blocks with local hero,
/// safety, and pricing rules into one product page.
#[derive(Debug, Default)]
pub struct ProductPageTemplate {
    benefits: BenefitsBlock,
    usage: UsageBlock,
    ingredients: IngredientsBlock,
    config: RenderConfig,
}

impl ProductPageTemplate {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            benefits: BenefitsBlock::new(),
            usage: UsageBlock::new(),
            ingredients: IngredientsBlock::new(),
            config,
        }
    }

    fn tagline(record: &ProductRecord) -> String {
        format!("{} Brightening Serum for Radiant Skin", record.concentration())
    }

    fn hero_description(record: &ProductRecord) -> String {
        format!(
            "Transform your skin with {}, a powerful {} serum formulated with {}. Designed \
             specifically for {} skin, this serum delivers {} results.",
            record.product_name(),
            record.concentration(),
            record.key_ingredients().iter().join(" and "),
            record
                .skin_type()
                .iter()
                .map(|skin| skin.to_lowercase())
                .join(" and "),
            record
                .benefits()
                .iter()
                .map(|benefit| benefit.to_lowercase())
                .join(" and "),
        )
    }

    fn key_features(record: &ProductRecord) -> Value {
        json!([
            {
                "feature": format!("{} Formula", record.concentration()),
                "description": "Clinically effective concentration for visible results",
                "icon": "🔬",
            },
            {
                "feature": "Dual-Action Ingredients",
                "description": format!(
                    "Combines {} for maximum efficacy",
                    record.key_ingredients().iter().join(" and ")
                ),
                "icon": "⚡",
            },
            {
                "feature": "Skin Type Optimized",
                "description": format!(
                    "Perfect for {} skin",
                    record
                        .skin_type()
                        .iter()
                        .map(|skin| skin.to_lowercase())
                        .join(" and ")
                ),
                "icon": "✓",
            },
        ])
    }

    fn safety_section(record: &ProductRecord) -> Value {
        json!({
            "title": "Safety & Side Effects",
            "side_effects": record.side_effects(),
            "precautions": [
                "Perform a patch test before first use",
                "Discontinue use if irritation occurs",
                "Consult a dermatologist if you have concerns",
            ],
            "storage": "Store in a cool, dry place away from direct sunlight",
        })
    }

    fn pricing_section(record: &ProductRecord) -> Value {
        json!({
            "title": "Pricing",
            "price": record.price(),
            "value_proposition": format!(
                "Premium {} serum at an accessible price point",
                record.concentration()
            ),
            "includes": "Full-size 30ml bottle",
        })
    }
}

impl Template for ProductPageTemplate {
    type Input = ProductRecord;

    fn name(&self) -> &'static str {
        "ProductPageTemplate"
    }

    fn schema(&self) -> TemplateSchema {
        TemplateSchema::new(
            "ProductPage",
            vec![
                FieldSpec::required("product_name", FieldKind::Text),
                FieldSpec::required("tagline", FieldKind::Text),
                FieldSpec::required("hero_description", FieldKind::Text),
                FieldSpec::required("key_features", FieldKind::List),
                FieldSpec::required("ingredients_section", FieldKind::Mapping),
                FieldSpec::required("benefits_section", FieldKind::Mapping),
                FieldSpec::required("usage_section", FieldKind::Mapping),
                FieldSpec::required("safety_section", FieldKind::Mapping),
                FieldSpec::required("pricing_section", FieldKind::Mapping),
            ],
        )
        .with_dependency("benefits_section", "BenefitsBlock")
        .with_dependency("usage_section", "UsageBlock")
        .with_dependency("ingredients_section", "IngredientsBlock")
    }

    fn render(&self, record: &ProductRecord) -> Result<RenderedDocument, TemplateRenderError> {
        let benefits_section = self.benefits.generate(record)?;
        let usage_section = self.usage.generate(record)?;
        let ingredients_section = self.ingredients.generate(record)?;

        let metadata = DocumentMetadata::stamp(self.name(), self.version()).with_counter(
            "content_blocks_used",
            json!([
                self.benefits.name(),
                self.usage.name(),
                self.ingredients.name()
            ]),
        );

        let mut document = RenderedDocument::new(metadata);
        document.insert_section("product_name", record.product_name());
        document.insert_section("tagline", Self::tagline(record));
        document.insert_section("hero_description", Self::hero_description(record));
        document.insert_section("key_features", Self::key_features(record));
        document.insert_section("ingredients_section", Value::Object(ingredients_section));
        document.insert_section("benefits_section", Value::Object(benefits_section));
        document.insert_section("usage_section", Value::Object(usage_section));
        document.insert_section("safety_section", Self::safety_section(record));
        document.insert_section("pricing_section", Self::pricing_section(record));

        check_output(self.name(), &self.schema(), &document, self.config)?;
        Ok(document)
    }
}
