use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised when a raw answer cannot be mapped onto the response scale.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("response value must be in 0..=3, got {0}")]
    OutOfRange(u8),
}

//
// ─── RESPONSE VALUE ───────────────────────────────────────────────────────────
//

/// Four-level ordinal agreement scale for a single question.
///
/// The scale is closed: anything outside 0-3 is rejected by `from_u8` before it
/// can reach a session or the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ResponseValue {
    StronglyUnrelatable,
    Unrelatable,
    Relatable,
    StronglyRelatable,
}

impl ResponseValue {
    /// Every value, lowest agreement first.
    pub const ALL: [ResponseValue; 4] = [
        ResponseValue::StronglyUnrelatable,
        ResponseValue::Unrelatable,
        ResponseValue::Relatable,
        ResponseValue::StronglyRelatable,
    ];

    /// Converts a numeric answer (0-3) to a `ResponseValue`.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::OutOfRange` if the value is not in the range 0-3.
    pub fn from_u8(value: u8) -> Result<Self, ResponseError> {
        match value {
            0 => Ok(Self::StronglyUnrelatable),
            1 => Ok(Self::Unrelatable),
            2 => Ok(Self::Relatable),
            3 => Ok(Self::StronglyRelatable),
            _ => Err(ResponseError::OutOfRange(value)),
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            ResponseValue::StronglyUnrelatable => 0,
            ResponseValue::Unrelatable => 1,
            ResponseValue::Relatable => 2,
            ResponseValue::StronglyRelatable => 3,
        }
    }

    /// Button label shown next to the question.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ResponseValue::StronglyUnrelatable => "Strongly Unrelatable",
            ResponseValue::Unrelatable => "Unrelatable",
            ResponseValue::Relatable => "Relatable",
            ResponseValue::StronglyRelatable => "Strongly Relatable",
        }
    }
}

impl TryFrom<u8> for ResponseValue {
    type Error = ResponseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

impl From<ResponseValue> for u8 {
    fn from(value: ResponseValue) -> Self {
        value.as_u8()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
