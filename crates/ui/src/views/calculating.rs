use std::time::Duration;

use dioxus::prelude::*;

pub const CALCULATING_MESSAGES: [&str; 6] = [
    "Opening the inner eye...",
    "Weighing the heart against the feather...",
    "Sifting through the void of your choices...",
    "Analyzing patterns of descent...",
    "Determining the architecture of your soul...",
    "The verdict is manifesting...",
];

const MESSAGE_INTERVAL: Duration = Duration::from_millis(800);

/// Waiting screen. The transition out is driven by the flow's timer, not
/// by anything here.
#[component]
pub fn CalculatingView() -> Element {
    let message_index = use_signal(|| 0_usize);

    use_future(move || async move {
        let mut message_index = message_index;
        loop {
            tokio::time::sleep(MESSAGE_INTERVAL).await;
            let next = (*message_index.peek() + 1) % CALCULATING_MESSAGES.len();
            message_index.set(next);
        }
    });

    let message = CALCULATING_MESSAGES[message_index() % CALCULATING_MESSAGES.len()];

    rsx! {
        div { class: "page calculating",
            div { class: "calculating__sigil" }
            h2 { class: "calculating__title", "Soul Appraisal in Progress" }
            p { class: "calculating__message", "{message}" }
        }
    }
}
