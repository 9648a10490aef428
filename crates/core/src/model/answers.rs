use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::response::ResponseValue;

/// Recorded responses keyed by question id; at most one answer per question.
///
/// The set does not know the bank. `QuizSession` only inserts ids the bank
/// contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    responses: HashMap<QuestionId, ResponseValue>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or overwrites) the answer for a question.
    pub fn record(&mut self, id: QuestionId, value: ResponseValue) {
        self.responses.insert(id, value);
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<ResponseValue> {
        self.responses.get(&id).copied()
    }

    /// The recorded answer, or the lowest agreement level when unanswered.
    #[must_use]
    pub fn value_or_floor(&self, id: QuestionId) -> ResponseValue {
        self.get(id).unwrap_or(ResponseValue::StronglyUnrelatable)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, ResponseValue)> + '_ {
        self.responses.iter().map(|(&id, &value)| (id, value))
    }
}

impl FromIterator<(QuestionId, ResponseValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, ResponseValue)>>(iter: I) -> Self {
        Self {
            responses: iter.into_iter().collect(),
        }
    }
}
