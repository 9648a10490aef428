use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::sin::Sin;

const EMBEDDED_BANK: &str = include_str!("../../data/questions.json");

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is not valid JSON: {0}")]
    Parse(String),

    #[error("question bank must contain at least one question")]
    Empty,

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error("question {0} has empty text")]
    EmptyText(QuestionId),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single statement the user rates, tagged with the sin it measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    sin: Sin,
}

impl Question {
    /// Creates a question with trimmed text.
    ///
    /// # Errors
    ///
    /// Returns `BankError::EmptyText` if the text is empty after trimming.
    pub fn new(id: QuestionId, text: impl Into<String>, sin: Sin) -> Result<Self, BankError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(BankError::EmptyText(id));
        }
        Ok(Self { id, text, sin })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn sin(&self) -> Sin {
        self.sin
    }
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// Ordered, read-only list of questions.
///
/// Per-sin counts may be unequal; the scoring engine normalizes per sin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    /// Builds a bank from an ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list, `BankError::DuplicateId` if two
    /// questions share an id, and `BankError::EmptyText` for blank statements.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut positions = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(BankError::EmptyText(question.id));
            }
            if positions.insert(question.id, position).is_some() {
                return Err(BankError::DuplicateId(question.id));
            }
        }

        Ok(Self {
            questions,
            positions,
        })
    }

    /// Parses a bank from a JSON array of `{ "id", "text", "sin" }` objects.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON and the validation errors of `new`.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> =
            serde_json::from_str(json).map_err(|err| BankError::Parse(err.to_string()))?;
        Self::new(questions)
    }

    /// The hundred-question bank shipped with the application.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is corrupt.
    pub fn embedded() -> Result<Self, BankError> {
        Self::from_json_str(EMBEDDED_BANK)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn by_id(&self, id: QuestionId) -> Option<&Question> {
        self.positions.get(&id).map(|&position| &self.questions[position])
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Number of questions assigned to each sin, indexed by `Sin::index`.
    #[must_use]
    pub fn counts(&self) -> [usize; Sin::COUNT] {
        let mut counts = [0_usize; Sin::COUNT];
        for question in &self.questions {
            counts[question.sin.index()] += 1;
        }
        counts
    }
}
