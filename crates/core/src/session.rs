use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerSet, Question, QuestionBank, QuestionId, ResponseValue};
use crate::scoring::{ScoreSet, ScoringEngine, Verdict};

//
// ─── STATES & EVENTS ───────────────────────────────────────────────────────────
//

/// The screen the quiz is on. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    Landing,
    Quiz,
    Calculating,
    Results,
}

/// Inputs accepted by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Start,
    Answer {
        question_id: QuestionId,
        value: ResponseValue,
    },
    Back,
    Exit,
    Restart,
    /// Fired by the calculation timer. Only the ticket issued on entering the
    /// current `Calculating` phase is honored.
    CalculationElapsed { ticket: u64 },
}

/// Scores plus their interpretation, available once the last answer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    pub scores: ScoreSet,
    pub verdict: Verdict,
}

/// What the question screen needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionPrompt<'a> {
    pub question: &'a Question,
    pub index: usize,
    pub total: usize,
    /// Answer recorded earlier for this question, if the user navigated back.
    pub recorded: Option<ResponseValue>,
}

impl QuestionPrompt<'_> {
    /// `(index + 1) / total` as a whole percentage.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        percent_reached(self.index, self.total)
    }
}

fn percent_reached(index: usize, total: usize) -> u8 {
    let total = total.max(1);
    let done = (index + 1).min(total);
    u8::try_from(done * 100 / total).unwrap_or(100)
}

/// Render snapshot of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Landing,
    Quiz(QuestionPrompt<'a>),
    Calculating,
    Results(QuizResults),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through the questionnaire.
///
/// Transitions consume the session and return the next one. Events that do
/// not apply to the current state leave it untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    view: ViewState,
    answers: AnswerSet,
    current_index: usize,
    calculation_ticket: u64,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            view: ViewState::Landing,
            answers: AnswerSet::new(),
            current_index: 0,
            calculation_ticket: 0,
        }
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// Ticket of the most recent `Calculating` phase.
    #[must_use]
    pub fn calculation_ticket(&self) -> u64 {
        self.calculation_ticket
    }

    /// The active question; `None` outside the quiz screen.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.view {
            ViewState::Quiz => self.bank.get(self.current_index),
            _ => None,
        }
    }

    /// Answer previously recorded for the active question.
    #[must_use]
    pub fn recorded_value(&self) -> Option<ResponseValue> {
        self.current_question()
            .and_then(|question| self.answers.get(question.id()))
    }

    /// `(index + 1) / total` as a whole percentage.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        percent_reached(self.current_index, self.question_count())
    }

    /// Whether `event` changes anything in the current state.
    #[must_use]
    pub fn accepts(&self, event: &QuizEvent) -> bool {
        match (self.view, event) {
            (ViewState::Landing, QuizEvent::Start) => true,
            (ViewState::Quiz, QuizEvent::Answer { question_id, .. }) => {
                self.bank.contains(*question_id)
            }
            (ViewState::Quiz, QuizEvent::Back | QuizEvent::Exit) => true,
            (ViewState::Calculating, QuizEvent::CalculationElapsed { ticket }) => {
                *ticket == self.calculation_ticket
            }
            (ViewState::Results, QuizEvent::Restart) => true,
            _ => false,
        }
    }

    #[must_use]
    pub fn apply(mut self, event: QuizEvent) -> Self {
        if !self.accepts(&event) {
            return self;
        }

        match event {
            QuizEvent::Start => {
                self.reset();
                self.view = ViewState::Quiz;
            }
            QuizEvent::Answer { question_id, value } => {
                self.answers.record(question_id, value);
                if self.current_index >= self.bank.last_index() {
                    self.calculation_ticket = self.calculation_ticket.wrapping_add(1);
                    self.view = ViewState::Calculating;
                } else {
                    self.current_index += 1;
                }
            }
            QuizEvent::Back => {
                if self.current_index > 0 {
                    self.current_index -= 1;
                } else {
                    // Back on the first question is an exit.
                    self.reset();
                    self.view = ViewState::Landing;
                }
            }
            QuizEvent::Exit | QuizEvent::Restart => {
                self.reset();
                self.view = ViewState::Landing;
            }
            QuizEvent::CalculationElapsed { .. } => {
                self.view = ViewState::Results;
            }
        }
        self
    }

    #[must_use]
    pub fn start(self) -> Self {
        self.apply(QuizEvent::Start)
    }

    #[must_use]
    pub fn answer(self, question_id: QuestionId, value: ResponseValue) -> Self {
        self.apply(QuizEvent::Answer { question_id, value })
    }

    #[must_use]
    pub fn go_back(self) -> Self {
        self.apply(QuizEvent::Back)
    }

    #[must_use]
    pub fn exit(self) -> Self {
        self.apply(QuizEvent::Exit)
    }

    #[must_use]
    pub fn restart(self) -> Self {
        self.apply(QuizEvent::Restart)
    }

    #[must_use]
    pub fn finish_calculating(self, ticket: u64) -> Self {
        self.apply(QuizEvent::CalculationElapsed { ticket })
    }

    /// Scores for the recorded answers; `None` before the last answer is in.
    #[must_use]
    pub fn results(&self, engine: &ScoringEngine) -> Option<QuizResults> {
        match self.view {
            ViewState::Calculating | ViewState::Results => {
                let scores = engine.score(&self.bank, &self.answers);
                Some(QuizResults {
                    scores,
                    verdict: Verdict::from_scores(&scores),
                })
            }
            ViewState::Landing | ViewState::Quiz => None,
        }
    }

    #[must_use]
    pub fn screen(&self, engine: &ScoringEngine) -> Screen<'_> {
        match self.view {
            ViewState::Landing => Screen::Landing,
            ViewState::Quiz => match self.current_question() {
                Some(question) => Screen::Quiz(QuestionPrompt {
                    question,
                    index: self.current_index,
                    total: self.question_count(),
                    recorded: self.answers.get(question.id()),
                }),
                None => Screen::Landing,
            },
            ViewState::Calculating => Screen::Calculating,
            ViewState::Results => match self.results(engine) {
                Some(results) => Screen::Results(results),
                None => Screen::Landing,
            },
        }
    }

    fn reset(&mut self) {
        self.answers.clear();
        self.current_index = 0;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("view", &self.view)
            .field("questions_len", &self.bank.len())
            .field("answers_len", &self.answers.len())
            .field("current_index", &self.current_index)
            .field("calculation_ticket", &self.calculation_ticket)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
