use vitium_core::model::{QuestionId, ResponseValue, Sin};
use vitium_core::{QuestionPrompt, QuizResults, QuizSession, Screen, ScoringEngine, Verdict};

use crate::vm::sin_vm::{EQUANIMITY, sin_profile};

/// What the flow component renders, detached from the session borrow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Landing(LandingVm),
    Quiz(QuestionVm),
    Calculating,
    Results(ResultsVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingVm {
    pub question_count: usize,
    pub count_label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub response: ResponseValue,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub text: String,
    pub counter_label: String,
    pub progress_percent: u8,
    pub can_go_back: bool,
    pub options: Vec<AnswerOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub sin: Sin,
    pub name: &'static str,
    pub score: u8,
    pub accent: &'static str,
    pub dominant: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub equanimity: bool,
    pub subtitle: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
    pub frequency_line: String,
    pub rows: Vec<ScoreRowVm>,
}

impl From<&QuestionPrompt<'_>> for QuestionVm {
    fn from(prompt: &QuestionPrompt<'_>) -> Self {
        let options = ResponseValue::ALL
            .iter()
            .map(|response| AnswerOptionVm {
                response: *response,
                label: response.label(),
                selected: prompt.recorded == Some(*response),
            })
            .collect();

        Self {
            id: prompt.question.id(),
            text: prompt.question.text().to_string(),
            counter_label: format!("Question {} / {}", prompt.index + 1, prompt.total),
            progress_percent: prompt.progress_percent(),
            can_go_back: prompt.index > 0,
            options,
        }
    }
}

impl From<&QuizResults> for ResultsVm {
    fn from(results: &QuizResults) -> Self {
        let dominant = results.verdict.dominant();
        let rows = Sin::ALL
            .iter()
            .map(|sin| ScoreRowVm {
                sin: *sin,
                name: sin.name(),
                score: results.scores.get(*sin),
                accent: sin_profile(*sin).accent,
                dominant: dominant == Some(*sin),
            })
            .collect();

        match results.verdict {
            Verdict::Equanimity => Self {
                equanimity: true,
                subtitle: "The Absolute Singularity",
                title: EQUANIMITY.title,
                description: EQUANIMITY.description,
                accent: EQUANIMITY.accent,
                frequency_line: "The weights are identical. Your heart balances perfectly between \
                                 every path of descent."
                    .to_string(),
                rows,
            },
            Verdict::Dominant(sin) => {
                let profile = sin_profile(sin);
                Self {
                    equanimity: false,
                    subtitle: "Your Primary Affliction",
                    title: profile.title,
                    description: profile.description,
                    accent: profile.accent,
                    frequency_line: format!(
                        "Your soul colors its decisions through the lens of {}. It resonates with \
                         an intensity of {}%.",
                        sin.name().to_lowercase(),
                        results.scores.get(sin)
                    ),
                    rows,
                }
            }
        }
    }
}

/// "One Hundred Inquiries" for the stock bank, the plain count otherwise.
#[must_use]
pub fn count_label(question_count: usize) -> String {
    match question_count {
        100 => "One Hundred Inquiries".to_string(),
        1 => "One Inquiry".to_string(),
        n => format!("{n} Inquiries"),
    }
}

#[must_use]
pub fn map_screen(session: &QuizSession, engine: &ScoringEngine) -> ScreenVm {
    match session.screen(engine) {
        Screen::Landing => ScreenVm::Landing(LandingVm {
            question_count: session.question_count(),
            count_label: count_label(session.question_count()),
        }),
        Screen::Quiz(prompt) => ScreenVm::Quiz(QuestionVm::from(&prompt)),
        Screen::Calculating => ScreenVm::Calculating,
        Screen::Results(results) => ScreenVm::Results(ResultsVm::from(&results)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use vitium_core::model::QuestionBank;
    use vitium_core::{QuizEvent, ScoreSet};

    fn session() -> QuizSession {
        QuizSession::new(Arc::new(QuestionBank::embedded().unwrap()))
    }

    #[test]
    fn landing_counts_the_bank() {
        let vm = map_screen(&session(), &ScoringEngine::default());
        assert_eq!(
            vm,
            ScreenVm::Landing(LandingVm {
                question_count: 100,
                count_label: "One Hundred Inquiries".to_string(),
            })
        );
    }

    #[test]
    fn quiz_screen_marks_the_recorded_answer() {
        let engine = ScoringEngine::default();
        let started = session().start();
        let first = started.current_question().unwrap().id();
        let back = started
            .answer(first, ResponseValue::Relatable)
            .go_back();

        let ScreenVm::Quiz(vm) = map_screen(&back, &engine) else {
            panic!("expected quiz screen");
        };
        assert_eq!(vm.id, first);
        assert_eq!(vm.counter_label, "Question 1 / 100");
        assert_eq!(vm.progress_percent, 1);
        assert!(!vm.can_go_back);
        let selected: Vec<_> = vm.options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].response, ResponseValue::Relatable);
        assert_eq!(vm.options[0].label, "Strongly Unrelatable");
    }

    #[test]
    fn second_question_allows_going_back() {
        let engine = ScoringEngine::default();
        let started = session().start();
        let first = started.current_question().unwrap().id();
        let next = started.apply(QuizEvent::Answer {
            question_id: first,
            value: ResponseValue::Unrelatable,
        });

        let ScreenVm::Quiz(vm) = map_screen(&next, &engine) else {
            panic!("expected quiz screen");
        };
        assert_eq!(vm.counter_label, "Question 2 / 100");
        assert!(vm.can_go_back);
        assert!(vm.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn dominant_results_use_the_sin_profile() {
        let scores = ScoreSet::from_array([10, 20, 30, 90, 40, 50, 60]);
        let results = QuizResults {
            scores,
            verdict: Verdict::from_scores(&scores),
        };
        let vm = ResultsVm::from(&results);

        assert!(!vm.equanimity);
        assert_eq!(vm.title, "Envy");
        assert_eq!(vm.accent, "#6366f1");
        assert_eq!(vm.subtitle, "Your Primary Affliction");
        assert!(vm.frequency_line.contains("lens of envy"));
        assert!(vm.frequency_line.contains("90%"));
        assert_eq!(vm.rows.len(), 7);
        assert_eq!(vm.rows[0].name, "Pride");
        assert!(vm.rows[3].dominant);
        assert_eq!(vm.rows.iter().filter(|row| row.dominant).count(), 1);
    }

    #[test]
    fn equal_scores_render_equanimity() {
        let scores = ScoreSet::from_array([0; 7]);
        let results = QuizResults {
            scores,
            verdict: Verdict::from_scores(&scores),
        };
        let vm = ResultsVm::from(&results);

        assert!(vm.equanimity);
        assert_eq!(vm.title, "EQUAL");
        assert_eq!(vm.subtitle, "The Absolute Singularity");
        assert!(vm.rows.iter().all(|row| !row.dominant && row.score == 0));
    }

    #[test]
    fn count_label_spells_out_the_stock_bank() {
        assert_eq!(count_label(100), "One Hundred Inquiries");
        assert_eq!(count_label(1), "One Inquiry");
        assert_eq!(count_label(12), "12 Inquiries");
    }
}
