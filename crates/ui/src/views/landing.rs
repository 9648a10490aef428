use dioxus::prelude::*;
use vitium_core::model::Sin;

use crate::vm::{LandingVm, sin_profile};

#[component]
pub fn LandingView(landing: LandingVm, on_start: Callback<()>) -> Element {
    let mut hovered = use_signal(|| None::<Sin>);
    let focus = hovered().map(sin_profile);

    rsx! {
        div { class: "page landing",
            header { class: "landing__header",
                h1 { class: "landing__title", "VITIUM" }
                p { class: "landing__tagline", "Seven Paths of Descent" }
            }

            div { class: "landing__focus",
                if let Some(profile) = focus {
                    h3 {
                        class: "landing__focus-title",
                        style: "color: {profile.accent}",
                        "{profile.title}"
                    }
                    p { class: "landing__focus-text", "{profile.description}" }
                } else {
                    p { class: "landing__quote", "“The soul is dyed by the color of its thoughts.”" }
                    p { class: "landing__hint", "Hover the icons to begin" }
                }
            }

            ul { class: "landing__sins",
                for (sin, profile) in Sin::ALL.map(|sin| (sin, sin_profile(sin))) {
                    li {
                        key: "{sin}",
                        class: if hovered() == Some(sin) { "landing__sin landing__sin--active" } else { "landing__sin" },
                        style: "--accent: {profile.accent}",
                        onmouseenter: move |_| hovered.set(Some(sin)),
                        onmouseleave: move |_| hovered.set(None),
                        "{sin}"
                    }
                }
            }

            button {
                id: "landing-start",
                class: "btn btn-primary landing__start",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "Initiate Rite"
            }
            p { class: "landing__count", "{landing.count_label}" }
        }
    }
}
