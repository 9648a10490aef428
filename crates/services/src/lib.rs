#![forbid(unsafe_code)]

pub mod calculation;
pub mod error;
pub mod quiz_service;

pub use calculation::{CalculationHandle, CalculationOutcome, CalculationTimer};
pub use error::QuizServiceError;
pub use quiz_service::{QuizService, load_bank};
