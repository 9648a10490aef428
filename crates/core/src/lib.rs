#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scoring;
pub mod session;

pub use error::Error;
pub use scoring::{ScoreSet, ScoringEngine, Tally, Verdict};
pub use session::{QuestionPrompt, QuizEvent, QuizResults, QuizSession, Screen, ViewState};
