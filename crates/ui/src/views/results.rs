use dioxus::prelude::*;

use crate::vm::{ResultsVm, ScoreRowVm};

#[component]
pub fn ResultsView(results: ResultsVm, on_restart: Callback<()>) -> Element {
    rsx! {
        div { class: "page results",
            header { class: "results__header",
                p { class: "results__eyebrow", "The Verdict has been cast" }
                span { class: "results__subtitle", "{results.subtitle}" }
                h1 {
                    class: "results__title",
                    style: "color: {results.accent}",
                    "{results.title}"
                }
                p { class: "results__description", "{results.description}" }
            }

            div { class: "results__body",
                section { class: "results__saturation",
                    div { class: "results__saturation-head",
                        h3 { "Soul Saturation" }
                        span { "Individual Intensity Profile" }
                    }
                    for row in results.rows.iter().cloned() {
                        ScoreBar { key: "{row.name}", row }
                    }
                }

                section {
                    class: if results.equanimity { "results__core results__core--equal" } else { "results__core" },
                    style: "--accent: {results.accent}",
                    h3 { class: "results__core-title", "Core Frequency: {results.title}" }
                    p { class: "results__core-text", "{results.frequency_line}" }
                    blockquote { class: "results__quote",
                        "“To know oneself is to know the universe and its shadows.”"
                    }
                }
            }

            button {
                id: "results-restart",
                class: "btn results__restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Return to the Void"
            }
        }
    }
}

#[component]
fn ScoreBar(row: ScoreRowVm) -> Element {
    rsx! {
        div { class: if row.dominant { "score score--dominant" } else { "score" },
            div { class: "score__label",
                div { class: "score__heading",
                    span { class: "score__name", "{row.name}" }
                    span { class: "score__caption", "Affinities Detected" }
                }
                span { class: "score__value", "{row.score}/100" }
            }
            div { class: "score__track",
                div {
                    class: "score__fill",
                    style: "width: {row.score}%; background-color: {row.accent}",
                }
            }
        }
    }
}
