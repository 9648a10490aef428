use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::QuizService;
use vitium_core::model::{QuizSettings, QuizSettingsDraft, ResponseValue, Sin};
use vitium_core::{QuizEvent, QuizSession, ViewState};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizFlow;

struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Props, Clone)]
struct FlowHarnessProps {
    app: Arc<TestApp>,
    session: Option<QuizSession>,
}

impl PartialEq for FlowHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn FlowHarness(props: FlowHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.session.clone() {
        Some(session) => rsx! { QuizFlow { initial: session } },
        None => rsx! { QuizFlow {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub service: Arc<QuizService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn settings_with_delay(calculating_delay_ms: u64) -> QuizSettings {
    QuizSettingsDraft {
        calculating_delay_ms: Some(calculating_delay_ms),
        ..QuizSettingsDraft::default()
    }
    .validate()
    .expect("valid settings")
}

/// Answers every remaining question, `pick` choosing the value per sin.
pub fn answer_all(
    service: &QuizService,
    mut session: QuizSession,
    pick: impl Fn(Sin) -> ResponseValue,
) -> QuizSession {
    while session.view_state() == ViewState::Quiz {
        let question = session.current_question().expect("question while in quiz");
        let question_id = question.id();
        let value = pick(question.sin());
        session = service.dispatch(session, QuizEvent::Answer { question_id, value });
    }
    session
}

/// Harness over the embedded bank. `prepare` moves a fresh session to the
/// screen under test; `None` lets the flow start on the landing page.
pub fn setup_flow_harness(
    settings: QuizSettings,
    prepare: impl FnOnce(&QuizService, QuizSession) -> Option<QuizSession>,
) -> ViewHarness {
    let service = Arc::new(QuizService::embedded(settings).expect("embedded bank"));
    let session = prepare(&service, service.new_session());

    let app = Arc::new(TestApp {
        quiz_service: Arc::clone(&service),
    });
    let dom = VirtualDom::new_with_props(FlowHarness, FlowHarnessProps { app, session });

    ViewHarness { dom, service }
}
