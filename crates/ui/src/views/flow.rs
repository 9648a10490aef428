use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use services::CalculationHandle;
use vitium_core::model::{QuestionId, ResponseValue};
use vitium_core::{QuizEvent, QuizSession, ViewState};

use crate::context::AppContext;
use crate::views::{CalculatingView, LandingView, QuizView, ResultsView};
use crate::vm::{ScreenVm, map_screen};

/// Timer armed for the calculating screen, keyed by session ticket.
#[derive(Clone, Default)]
struct PendingCalculation(Rc<RefCell<Option<(u64, CalculationHandle)>>>);

impl PendingCalculation {
    fn is_armed_for(&self, ticket: u64) -> bool {
        matches!(&*self.0.borrow(), Some((armed, _)) if *armed == ticket)
    }

    fn arm(&self, ticket: u64, handle: CalculationHandle) {
        if let Some((_, previous)) = self.0.borrow_mut().replace((ticket, handle)) {
            previous.cancel();
        }
    }

    fn cancel(&self) {
        if let Some((ticket, handle)) = self.0.borrow_mut().take() {
            tracing::debug!(ticket, "released calculation timer");
            handle.cancel();
        }
    }
}

/// Owns the quiz session and switches between the four screens.
///
/// `initial` replaces the fresh landing session; the harness uses it to open
/// on a specific screen.
#[component]
pub fn QuizFlow(initial: Option<QuizSession>) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.quiz_service();

    let mut session = use_signal({
        let service = service.clone();
        move || initial.unwrap_or_else(|| service.new_session())
    });
    let pending = use_hook(PendingCalculation::default);

    let dispatch = {
        let service = service.clone();
        use_callback(move |event: QuizEvent| {
            let current = session.peek().clone();
            session.set(service.dispatch(current, event));
        })
    };

    let on_start = use_callback(move |()| dispatch.call(QuizEvent::Start));
    let on_answer = use_callback(move |(question_id, value): (QuestionId, ResponseValue)| {
        dispatch.call(QuizEvent::Answer { question_id, value });
    });
    let on_back = use_callback(move |()| dispatch.call(QuizEvent::Back));
    let on_exit = use_callback(move |()| dispatch.call(QuizEvent::Exit));
    let on_restart = use_callback(move |()| dispatch.call(QuizEvent::Restart));

    {
        let service = service.clone();
        let pending = pending.clone();
        use_effect(move || {
            let (state, ticket) = {
                let current = session.read();
                (current.view_state(), current.calculation_ticket())
            };
            if state != ViewState::Calculating {
                pending.cancel();
                return;
            }
            if pending.is_armed_for(ticket) {
                return;
            }

            let timer = service.calculation_timer();
            tracing::debug!(
                ticket,
                delay_ms = service.settings().calculating_delay_ms(),
                "armed calculation timer"
            );
            pending.arm(ticket, timer.handle());
            spawn(async move {
                if let Some(event) = timer.wait_for_results(ticket).await {
                    dispatch.call(event);
                }
            });
        });
    }

    {
        let pending = pending.clone();
        use_drop(move || pending.cancel());
    }

    let screen = map_screen(&session.read(), service.engine());

    rsx! {
        div { class: "flow",
            match screen {
                ScreenVm::Landing(landing) => rsx! {
                    LandingView { landing, on_start }
                },
                ScreenVm::Quiz(question) => rsx! {
                    QuizView { question, on_answer, on_back, on_exit }
                },
                ScreenVm::Calculating => rsx! {
                    CalculatingView {}
                },
                ScreenVm::Results(results) => rsx! {
                    ResultsView { results, on_restart }
                },
            }
        }
    }
}
