use dioxus::prelude::*;
use vitium_core::model::{QuestionId, ResponseValue};

use crate::vm::QuestionVm;

#[component]
pub fn QuizView(
    question: QuestionVm,
    on_answer: Callback<(QuestionId, ResponseValue)>,
    on_back: Callback<()>,
    on_exit: Callback<()>,
) -> Element {
    let question_id = question.id;

    rsx! {
        div { class: "page quiz",
            div { class: "quiz__top",
                span { class: "quiz__counter", "{question.counter_label}" }
                div { class: "quiz__nav",
                    button {
                        id: "quiz-back",
                        class: "quiz__back",
                        r#type: "button",
                        // Back on the first question returns to the landing page.
                        title: if question.can_go_back { "Previous question" } else { "Return to the start" },
                        onclick: move |_| on_back.call(()),
                        "← Go Back"
                    }
                    button {
                        id: "quiz-exit",
                        class: "quiz__exit",
                        r#type: "button",
                        onclick: move |_| on_exit.call(()),
                        "✕ Exit Test"
                    }
                }
            }

            div { class: "quiz__progress",
                div {
                    class: "quiz__progress-bar",
                    style: "width: {question.progress_percent}%",
                }
            }

            h2 { class: "quiz__text", "“{question.text}”" }

            div { class: "quiz__options",
                for option in question.options.iter().copied() {
                    button {
                        key: "{option.label}",
                        class: if option.selected { "quiz__option quiz__option--selected" } else { "quiz__option" },
                        r#type: "button",
                        onclick: move |_| on_answer.call((question_id, option.response)),
                        "{option.label}"
                    }
                }
            }

            footer { class: "quiz__footer",
                p { "Be honest with yourself. Your soul already knows the truth." }
            }
        }
    }
}
