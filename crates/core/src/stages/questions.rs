//! Question-generation stage.

use crate::stage::{Stage, StageError};
use itertools::Itertools;
use pagesmith_types::{ProductRecord, Question, QuestionCategory};

/// Generates the categorized question batch the FAQ page draws from.
///
/// Generation is deterministic and total: a fixed record always yields the
/// same batch, spanning every category at least once.
#[derive(Debug, Default)]
pub struct QuestionStage;

impl QuestionStage {
    pub fn new() -> Self {
        Self
    }

    fn informational(record: &ProductRecord) -> Result<Vec<Question>, StageError> {
        let skin_types = join_and(record.skin_type());
        Ok(vec![
            Question::new(
                QuestionCategory::Informational,
                format!("What is {}?", record.product_name()),
                format!(
                    "{} is a skincare serum with {}, designed for {} skin types.",
                    record.product_name(),
                    record.concentration(),
                    skin_types
                ),
            )?,
            Question::new(
                QuestionCategory::Informational,
                "What concentration of Vitamin C does this serum contain?",
                format!("This serum contains {}.", record.concentration()),
            )?,
            Question::new(
                QuestionCategory::Informational,
                "Which skin types is this product suitable for?",
                format!("This product is suitable for {skin_types} skin types."),
            )?,
        ])
    }

    fn safety(record: &ProductRecord) -> Result<Vec<Question>, StageError> {
        Ok(vec![
            Question::new(
                QuestionCategory::Safety,
                "Are there any side effects?",
                format!("{}.", record.side_effects()),
            )?,
            Question::new(
                QuestionCategory::Safety,
                "Can I use this if I have sensitive skin?",
                format!(
                    "Users with sensitive skin may experience {}. It's recommended to perform a \
                     patch test first.",
                    record.side_effects().to_lowercase()
                ),
            )?,
        ])
    }

    fn usage(record: &ProductRecord) -> Result<Vec<Question>, StageError> {
        Ok(vec![
            Question::new(
                QuestionCategory::Usage,
                "How do I use this serum?",
                record.how_to_use(),
            )?,
            Question::new(
                QuestionCategory::Usage,
                "When should I apply this serum in my routine?",
                "Apply in the morning before sunscreen, after cleansing and toning.",
            )?,
            Question::new(
                QuestionCategory::Usage,
                "How many drops should I use?",
                "Use 2-3 drops for optimal results.",
            )?,
        ])
    }

    fn purchase(record: &ProductRecord) -> Result<Vec<Question>, StageError> {
        Ok(vec![
            Question::new(
                QuestionCategory::Purchase,
                "What is the price of this serum?",
                format!(
                    "The {} is priced at {}.",
                    record.product_name(),
                    record.price()
                ),
            )?,
            Question::new(
                QuestionCategory::Purchase,
                "Is this product worth the investment?",
                format!(
                    "At {}, this serum offers {} benefits with quality ingredients like {}.",
                    record.price(),
                    record.benefits().iter().join(", ").to_lowercase(),
                    join_and(record.key_ingredients())
                ),
            )?,
        ])
    }

    fn comparison(record: &ProductRecord) -> Result<Vec<Question>, StageError> {
        Ok(vec![Question::new(
            QuestionCategory::Comparison,
            "How does this compare to other Vitamin C serums?",
            format!(
                "This serum stands out with its {} formulation combined with {}.",
                record.concentration(),
                join_and(record.key_ingredients())
            ),
        )?])
    }

    fn ingredients(record: &ProductRecord) -> Result<Vec<Question>, StageError> {
        Ok(vec![
            Question::new(
                QuestionCategory::Ingredients,
                "What are the key ingredients?",
                format!(
                    "The key ingredients are {}.",
                    join_and(record.key_ingredients())
                ),
            )?,
            Question::new(
                QuestionCategory::Ingredients,
                "What does Hyaluronic Acid do in this formula?",
                "Hyaluronic Acid provides hydration and helps the skin retain moisture.",
            )?,
        ])
    }

    fn benefits(record: &ProductRecord) -> Result<Vec<Question>, StageError> {
        Ok(vec![
            Question::new(
                QuestionCategory::Benefits,
                "What are the main benefits of this serum?",
                format!(
                    "The main benefits include {}.",
                    record
                        .benefits()
                        .iter()
                        .map(|benefit| benefit.to_lowercase())
                        .join(" and ")
                ),
            )?,
            Question::new(
                QuestionCategory::Benefits,
                "How long until I see results?",
                "With consistent use, you may start seeing brightening effects within 2-4 weeks.",
            )?,
        ])
    }
}

fn join_and(items: &[String]) -> String {
    items.iter().join(" and ")
}

impl Stage for QuestionStage {
    type Input = ProductRecord;
    type Output = Vec<Question>;

    fn name(&self) -> &'static str {
        "generate-questions"
    }

    fn execute(&self, record: &ProductRecord) -> Result<Vec<Question>, StageError> {
        let mut questions = Vec::new();
        questions.extend(Self::informational(record)?);
        questions.extend(Self::safety(record)?);
        questions.extend(Self::usage(record)?);
        questions.extend(Self::purchase(record)?);
        questions.extend(Self::comparison(record)?);
        questions.extend(Self::ingredients(record)?);
        questions.extend(Self::benefits(record)?);

        log::info!(
            "[generate-questions] generated {} questions across {} categories",
            questions.len(),
            QuestionCategory::ALL.len()
        );
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record() -> ProductRecord {
        ProductRecord::new(
            "GlowBoost Vitamin C Serum",
            "20% Vitamin C",
            vec!["Oily".into(), "Combination".into()],
            vec!["Vitamin C".into(), "Hyaluronic Acid".into()],
            vec!["Brightening".into(), "Fades dark spots".into()],
            "Apply 2-3 drops in the morning before sunscreen",
            "Mild tingling for first-time users",
            "₹599",
        )
        .unwrap()
    }

    #[test]
    fn batch_spans_every_category_with_at_least_fifteen_questions() {
        let questions = QuestionStage::new().execute(&record()).unwrap();
        assert!(questions.len() >= 15, "only {} questions", questions.len());
        let categories: HashSet<QuestionCategory> =
            questions.iter().map(Question::category).collect();
        assert_eq!(categories.len(), QuestionCategory::ALL.len());
    }

    #[test]
    fn generation_is_deterministic() {
        let stage = QuestionStage::new();
        assert_eq!(
            stage.execute(&record()).unwrap(),
            stage.execute(&record()).unwrap()
        );
    }

    #[test]
    fn answers_interpolate_record_fields() {
        let questions = QuestionStage::new().execute(&record()).unwrap();
        let price_answer = questions
            .iter()
            .find(|q| q.question() == "What is the price of this serum?")
            .unwrap();
        assert_eq!(
            price_answer.answer(),
            "The GlowBoost Vitamin C Serum is priced at ₹599."
        );
    }
}
