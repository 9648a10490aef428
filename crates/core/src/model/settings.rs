use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::response::ResponseValue;

/// Reference length of the calculating screen.
pub const DEFAULT_CALCULATING_DELAY_MS: u64 = 4_500;

/// Upper bound accepted for the calculating delay.
pub const MAX_CALCULATING_DELAY_MS: u64 = 60_000;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("calculating delay must be at most {MAX_CALCULATING_DELAY_MS} ms, got {0}")]
    InvalidCalculatingDelay(u64),

    #[error("response weights must be strictly increasing, got {0:?}")]
    WeightsNotIncreasing([u32; 4]),
}

//
// ─── WEIGHTS ───────────────────────────────────────────────────────────────────
//

/// Points contributed by each response value, lowest agreement first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 4]", into = "[u32; 4]")]
pub struct ResponseWeights([u32; 4]);

impl ResponseWeights {
    /// # Errors
    ///
    /// Returns `SettingsError::WeightsNotIncreasing` unless every weight is
    /// strictly greater than the one before it.
    pub fn new(weights: [u32; 4]) -> Result<Self, SettingsError> {
        if weights.windows(2).all(|pair| pair[0] < pair[1]) {
            Ok(Self(weights))
        } else {
            Err(SettingsError::WeightsNotIncreasing(weights))
        }
    }

    #[must_use]
    pub fn weight(&self, value: ResponseValue) -> u32 {
        self.0[usize::from(value.as_u8())]
    }

    /// Weight of an unanswered or strongly unrelatable question.
    #[must_use]
    pub fn floor(&self) -> u32 {
        self.0[0]
    }

    #[must_use]
    pub fn ceiling(&self) -> u32 {
        self.0[3]
    }

    #[must_use]
    pub fn as_array(&self) -> [u32; 4] {
        self.0
    }
}

impl Default for ResponseWeights {
    fn default() -> Self {
        Self([0, 2, 5, 8])
    }
}

impl TryFrom<[u32; 4]> for ResponseWeights {
    type Error = SettingsError;

    fn try_from(value: [u32; 4]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResponseWeights> for [u32; 4] {
    fn from(value: ResponseWeights) -> Self {
        value.0
    }
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Validated quiz tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    calculating_delay_ms: u64,
    weights: ResponseWeights,
}

/// Unvalidated settings as collected from flags or environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSettingsDraft {
    pub calculating_delay_ms: Option<u64>,
    pub weights: Option<[u32; 4]>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the delay is too long or the weights are not
    /// strictly increasing.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let calculating_delay_ms = self
            .calculating_delay_ms
            .unwrap_or(DEFAULT_CALCULATING_DELAY_MS);
        if calculating_delay_ms > MAX_CALCULATING_DELAY_MS {
            return Err(SettingsError::InvalidCalculatingDelay(calculating_delay_ms));
        }

        let weights = match self.weights {
            Some(raw) => ResponseWeights::new(raw)?,
            None => ResponseWeights::default(),
        };

        Ok(QuizSettings {
            calculating_delay_ms,
            weights,
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn calculating_delay(&self) -> Duration {
        Duration::from_millis(self.calculating_delay_ms)
    }

    #[must_use]
    pub fn calculating_delay_ms(&self) -> u64 {
        self.calculating_delay_ms
    }

    #[must_use]
    pub fn weights(&self) -> ResponseWeights {
        self.weights
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            calculating_delay_ms: DEFAULT_CALCULATING_DELAY_MS,
            weights: ResponseWeights::default(),
        }
    }
}
