use serde::{Deserialize, Serialize};

use crate::model::{AnswerSet, QuestionBank, ResponseWeights, Sin};

//
// ─── TALLY ─────────────────────────────────────────────────────────────────────
//

/// Raw weighted sums and question counts per sin, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    raw: [u64; Sin::COUNT],
    counts: [u64; Sin::COUNT],
}

impl Tally {
    #[must_use]
    pub fn raw(&self, sin: Sin) -> u64 {
        self.raw[sin.index()]
    }

    #[must_use]
    pub fn count(&self, sin: Sin) -> u64 {
        self.counts[sin.index()]
    }

    /// True when every sin collected exactly the same raw sum.
    ///
    /// With unequal question counts this can disagree with the score-based
    /// equanimity check used by `Verdict`.
    #[must_use]
    pub fn has_equal_raw_sums(&self) -> bool {
        self.raw.iter().all(|&sum| sum == self.raw[0])
    }
}

//
// ─── SCORE SET ─────────────────────────────────────────────────────────────────
//

/// One percentage in `0..=100` per sin, iterated in `Sin::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreSet([u8; Sin::COUNT]);

impl ScoreSet {
    /// Builds a score set, clamping each entry to 100.
    #[must_use]
    pub fn from_array(scores: [u8; Sin::COUNT]) -> Self {
        Self(scores.map(|score| score.min(100)))
    }

    #[must_use]
    pub fn get(&self, sin: Sin) -> u8 {
        self.0[sin.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sin, u8)> + '_ {
        Sin::ALL.iter().map(|&sin| (sin, self.get(sin)))
    }

    /// Exact integer equality across all seven scores.
    #[must_use]
    pub fn all_equal(&self) -> bool {
        self.0.iter().all(|&score| score == self.0[0])
    }

    /// Sins ordered by descending score; equal scores keep entry order.
    #[must_use]
    pub fn ranking(&self) -> [Sin; Sin::COUNT] {
        let mut order = Sin::ALL;
        order.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        order
    }
}

//
// ─── VERDICT ───────────────────────────────────────────────────────────────────
//

/// Interpretation of a score set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Dominant(Sin),
    /// Every sin scored exactly the same.
    Equanimity,
}

impl Verdict {
    #[must_use]
    pub fn from_scores(scores: &ScoreSet) -> Self {
        if scores.all_equal() {
            Verdict::Equanimity
        } else {
            Verdict::Dominant(scores.ranking()[0])
        }
    }

    #[must_use]
    pub fn dominant(self) -> Option<Sin> {
        match self {
            Verdict::Dominant(sin) => Some(sin),
            Verdict::Equanimity => None,
        }
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Per-sin min-max scoring.
///
/// Each sin is scaled independently against the lowest and highest sums its
/// own questions can produce, so scores saturate individually and do not sum
/// to 100. Unanswered questions count as the floor weight.
///
/// # Examples
///
/// ```
/// # use vitium_core::ScoringEngine;
/// # use vitium_core::model::{AnswerSet, QuestionBank, Sin};
/// let bank = QuestionBank::embedded()?;
/// let scores = ScoringEngine::default().score(&bank, &AnswerSet::new());
/// assert_eq!(scores.get(Sin::Pride), 0);
/// # Ok::<(), vitium_core::model::BankError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    weights: ResponseWeights,
}

impl ScoringEngine {
    #[must_use]
    pub fn new(weights: ResponseWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> ResponseWeights {
        self.weights
    }

    #[must_use]
    pub fn tally(&self, bank: &QuestionBank, answers: &AnswerSet) -> Tally {
        let mut raw = [0_u64; Sin::COUNT];
        let mut counts = [0_u64; Sin::COUNT];
        for question in bank.iter() {
            let slot = question.sin().index();
            let value = answers.value_or_floor(question.id());
            raw[slot] += u64::from(self.weights.weight(value));
            counts[slot] += 1;
        }
        Tally { raw, counts }
    }

    #[must_use]
    pub fn normalize(&self, tally: &Tally) -> ScoreSet {
        let floor = u64::from(self.weights.floor());
        let span = u64::from(self.weights.ceiling() - self.weights.floor());

        let mut scores = [0_u8; Sin::COUNT];
        for sin in Sin::ALL {
            let count = tally.count(sin);
            let range = count * span;
            if range == 0 {
                continue;
            }
            let above_floor = tally.raw(sin).saturating_sub(count * floor);
            scores[sin.index()] = rounded_percentage(above_floor, range);
        }
        ScoreSet(scores)
    }

    #[must_use]
    pub fn score(&self, bank: &QuestionBank, answers: &AnswerSet) -> ScoreSet {
        self.normalize(&self.tally(bank, answers))
    }
}

/// `round(100 * part / whole)` with halves rounded up, clamped to 100.
fn rounded_percentage(part: u64, whole: u64) -> u8 {
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
