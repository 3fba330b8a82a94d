//! Criterion-by-criterion product comparison block.

use crate::{BlockError, ContentBlock};
use itertools::Itertools;
use pagesmith_types::ProductRecord;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt;

/// The two fully-populated records a comparison runs over.
#[derive(Debug, Clone)]
pub struct ProductPair {
    pub product_a: ProductRecord,
    pub product_b: ProductRecord,
}

impl ProductPair {
    pub fn new(product_a: ProductRecord, product_b: ProductRecord) -> Self {
        Self {
            product_a,
            product_b,
        }
    }
}

/// Per-criterion (and overall) comparison outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    ProductA,
    ProductB,
    Tie,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::ProductA => "product_a",
            Winner::ProductB => "product_b",
            Winner::Tie => "tie",
        }
    }

    fn from_ordering(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Greater => Winner::ProductA,
            std::cmp::Ordering::Less => Winner::ProductB,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes a five-criterion comparison matrix with per-criterion winners
/// and a majority-vote overall winner.
///
/// Numeric criteria fail fast on malformed inputs: a concentration without a
/// leading percentage or a price without digits is an input-contract
/// violation, never silently defaulted.
#[derive(Debug, Default)]
pub struct ComparisonBlock;

impl ComparisonBlock {
    pub fn new() -> Self {
        Self
    }

    /// Parses the leading numeric percentage from a concentration string,
    /// e.g. `"20% Vitamin C"` -> `20.0`.
    fn leading_percentage(record: &ProductRecord) -> Result<f64, BlockError> {
        let malformed = || BlockError::MalformedConcentration {
            product: record.product_name().to_string(),
            value: record.concentration().to_string(),
        };
        let (prefix, _) = record.concentration().split_once('%').ok_or_else(malformed)?;
        prefix.trim().parse::<f64>().map_err(|_| malformed())
    }

    /// Extracts the digits of a price string as one number, e.g. `"₹1,299"` -> `1299`.
    fn price_amount(record: &ProductRecord) -> Result<u64, BlockError> {
        let digits: String = record
            .price()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        digits
            .parse::<u64>()
            .map_err(|_| BlockError::MalformedPrice {
                product: record.product_name().to_string(),
                value: record.price().to_string(),
            })
    }

    fn compare_concentration(pair: &ProductPair) -> Result<Winner, BlockError> {
        let a = Self::leading_percentage(&pair.product_a)?;
        let b = Self::leading_percentage(&pair.product_b)?;
        Ok(Winner::from_ordering(a.total_cmp(&b)))
    }

    /// Breadth comparison: list lengths, not semantic value.
    fn compare_breadth(a: &[String], b: &[String]) -> Winner {
        Winner::from_ordering(a.len().cmp(&b.len()))
    }

    /// Lower numeric price wins, modeled as "better value". This is a fixed
    /// policy choice, kept in one place so extensions can swap it.
    fn compare_price(pair: &ProductPair) -> Result<Winner, BlockError> {
        let a = Self::price_amount(&pair.product_a)?;
        let b = Self::price_amount(&pair.product_b)?;
        Ok(Winner::from_ordering(b.cmp(&a)))
    }

    /// Strict majority vote across criteria; any other split is a tie.
    fn overall_winner(winners: &[Winner]) -> Winner {
        let a_score = winners.iter().filter(|w| **w == Winner::ProductA).count();
        let b_score = winners.iter().filter(|w| **w == Winner::ProductB).count();
        Winner::from_ordering(a_score.cmp(&b_score))
    }

    fn summary(pair: &ProductPair, overall: Winner) -> String {
        match overall {
            Winner::ProductA => format!(
                "{} offers better overall value with competitive pricing and proven ingredients.",
                pair.product_a.product_name()
            ),
            Winner::ProductB => format!(
                "{} stands out with superior formulation and broader benefits.",
                pair.product_b.product_name()
            ),
            Winner::Tie => {
                "Both products offer comparable benefits with different strengths.".to_string()
            }
        }
    }

    fn criterion(name: &str, a_value: String, b_value: String, winner: Winner) -> Value {
        json!({
            "criterion": name,
            "product_a_value": a_value,
            "product_b_value": b_value,
            "winner": winner,
        })
    }
}

impl ContentBlock for ComparisonBlock {
    type Input = ProductPair;

    fn name(&self) -> &'static str {
        "ComparisonBlock"
    }

    fn generate(&self, pair: &ProductPair) -> Result<Map<String, Value>, BlockError> {
        let a = &pair.product_a;
        let b = &pair.product_b;

        let winners = [
            Self::compare_concentration(pair)?,
            Self::compare_breadth(a.key_ingredients(), b.key_ingredients()),
            Self::compare_breadth(a.skin_type(), b.skin_type()),
            // No ordering semantics are defined over benefit names.
            Winner::Tie,
            Self::compare_price(pair)?,
        ];

        let criteria = vec![
            Self::criterion(
                "Vitamin C Concentration",
                a.concentration().to_string(),
                b.concentration().to_string(),
                winners[0],
            ),
            Self::criterion(
                "Key Ingredients",
                a.key_ingredients().iter().join(", "),
                b.key_ingredients().iter().join(", "),
                winners[1],
            ),
            Self::criterion(
                "Skin Type Compatibility",
                a.skin_type().iter().join(", "),
                b.skin_type().iter().join(", "),
                winners[2],
            ),
            Self::criterion(
                "Primary Benefits",
                a.benefits().iter().join(", "),
                b.benefits().iter().join(", "),
                winners[3],
            ),
            Self::criterion(
                "Price",
                a.price().to_string(),
                b.price().to_string(),
                winners[4],
            ),
        ];

        let overall = Self::overall_winner(&winners);

        let mut section = Map::new();
        section.insert("criteria".into(), Value::Array(criteria));
        section.insert("overall_winner".into(), json!(overall));
        section.insert("summary".into(), json!(Self::summary(pair, overall)));
        Ok(section)
    }
}
