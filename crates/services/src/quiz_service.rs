use std::path::Path;
use std::sync::Arc;

use vitium_core::model::{QuestionBank, QuizSettings};
use vitium_core::{QuizEvent, QuizResults, QuizSession, ScoringEngine, ViewState};

use crate::calculation::CalculationTimer;
use crate::error::QuizServiceError;

/// Read and validate a question bank stored as JSON.
///
/// # Errors
///
/// Returns `QuizServiceError::Io` if the file cannot be read and
/// `QuizServiceError::Bank` if its content is not a valid bank.
pub fn load_bank(path: &Path) -> Result<QuestionBank, QuizServiceError> {
    let json = std::fs::read_to_string(path).map_err(|source| QuizServiceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(QuestionBank::from_json_str(&json)?)
}

/// Presentation-facing facade over the bank, the scoring engine and the
/// quiz tuning knobs.
///
/// Sessions stay owned by the caller; the service only moves them from one
/// state to the next.
#[derive(Clone, Debug)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
    engine: ScoringEngine,
    settings: QuizSettings,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, settings: QuizSettings) -> Self {
        Self {
            bank,
            engine: ScoringEngine::new(settings.weights()),
            settings,
        }
    }

    /// Service over the bank shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Bank` if the embedded bank is corrupt.
    pub fn embedded(settings: QuizSettings) -> Result<Self, QuizServiceError> {
        let bank = QuestionBank::embedded()?;
        tracing::info!(source = "embedded", questions = bank.len(), "loaded question bank");
        Ok(Self::new(Arc::new(bank), settings))
    }

    /// Service over a bank read from `path`.
    ///
    /// # Errors
    ///
    /// See [`load_bank`].
    pub fn from_path(path: &Path, settings: QuizSettings) -> Result<Self, QuizServiceError> {
        let bank = load_bank(path)?;
        tracing::info!(path = %path.display(), questions = bank.len(), "loaded question bank");
        Ok(Self::new(Arc::new(bank), settings))
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    #[must_use]
    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(Arc::clone(&self.bank))
    }

    /// Apply `event` to `session`, logging the transition.
    #[must_use]
    pub fn dispatch(&self, session: QuizSession, event: QuizEvent) -> QuizSession {
        let from = session.view_state();
        if !session.accepts(&event) {
            tracing::debug!(?from, ?event, "ignored quiz event");
            return session;
        }

        let next = session.apply(event);
        let to = next.view_state();
        tracing::debug!(?from, ?to, index = next.current_index(), ?event, "quiz transition");

        match (from, to) {
            (ViewState::Landing, ViewState::Quiz) => {
                tracing::info!(questions = next.question_count(), "quiz started");
            }
            (ViewState::Quiz, ViewState::Calculating) => {
                tracing::info!(
                    answered = next.answers().len(),
                    ticket = next.calculation_ticket(),
                    "questionnaire complete"
                );
            }
            _ => {}
        }
        next
    }

    /// Scores for a finished session; `None` before the last answer.
    #[must_use]
    pub fn results(&self, session: &QuizSession) -> Option<QuizResults> {
        let results = session.results(&self.engine)?;
        let tally = self.engine.tally(&self.bank, session.answers());
        tracing::debug!(
            verdict = ?results.verdict,
            equal_raw_sums = tally.has_equal_raw_sums(),
            "scored session"
        );
        Some(results)
    }

    /// A fresh timer for the calculating screen.
    #[must_use]
    pub fn calculation_timer(&self) -> CalculationTimer {
        CalculationTimer::new(self.settings.calculating_delay())
    }
}
