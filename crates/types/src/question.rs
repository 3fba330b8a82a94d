//! Generated Q&A pairs and their fixed category set.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of question categories the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    Informational,
    Safety,
    Usage,
    Purchase,
    Comparison,
    Ingredients,
    Benefits,
}

impl QuestionCategory {
    /// Every category, in generation order.
    pub const ALL: [QuestionCategory; 7] = [
        QuestionCategory::Informational,
        QuestionCategory::Safety,
        QuestionCategory::Usage,
        QuestionCategory::Purchase,
        QuestionCategory::Comparison,
        QuestionCategory::Ingredients,
        QuestionCategory::Benefits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Informational => "Informational",
            QuestionCategory::Safety => "Safety",
            QuestionCategory::Usage => "Usage",
            QuestionCategory::Purchase => "Purchase",
            QuestionCategory::Comparison => "Comparison",
            QuestionCategory::Ingredients => "Ingredients",
            QuestionCategory::Benefits => "Benefits",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionCategory::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// A single categorized question/answer pair.
///
/// Created in batches by the question-generation stage and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    category: QuestionCategory,
    question: String,
    answer: String,
}

impl Question {
    /// Creates a question, trimming both texts and rejecting blanks.
    pub fn new(
        category: QuestionCategory,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let question = question.into().trim().to_string();
        if question.is_empty() {
            return Err(ValidationError::BlankField("question".to_string()));
        }
        let answer = answer.into().trim().to_string();
        if answer.is_empty() {
            return Err(ValidationError::BlankField("answer".to_string()));
        }
        Ok(Self {
            category,
            question,
            answer,
        })
    }

    pub fn category(&self) -> QuestionCategory {
        self.category
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}
