use vitium_core::model::{QuizSettings, ResponseValue, Sin};
use vitium_core::QuizEvent;

use super::CALCULATING_MESSAGES;
use super::test_harness::{answer_all, settings_with_delay, setup_flow_harness};

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_title_and_start() {
    let mut harness = setup_flow_harness(QuizSettings::default(), |_, _| None);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "VITIUM",
        "Seven Paths of Descent",
        "Initiate Rite",
        "One Hundred Inquiries",
        "The soul is dyed by the color of its thoughts.",
        "Hover the icons to begin",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    for sin in Sin::ALL {
        assert!(html.contains(sin.name()), "missing {sin} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_flow_harness(QuizSettings::default(), |svc, session| {
        Some(svc.dispatch(session, QuizEvent::Start))
    });
    harness.rebuild();
    let html = harness.render();

    let first = harness.service.bank().get(0).expect("first question");
    assert!(html.contains("Question 1 / 100"), "missing counter in {html}");
    assert!(html.contains(first.text()), "missing question text in {html}");
    for value in ResponseValue::ALL {
        assert!(html.contains(value.label()), "missing {} in {html}", value.label());
    }
    assert!(html.contains("Go Back"));
    assert!(html.contains("Exit Test"));
    assert!(!html.contains("quiz__option--selected"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_highlights_answer_after_going_back() {
    let mut harness = setup_flow_harness(QuizSettings::default(), |svc, session| {
        let session = svc.dispatch(session, QuizEvent::Start);
        let question_id = session.current_question().expect("question").id();
        let session = svc.dispatch(
            session,
            QuizEvent::Answer {
                question_id,
                value: ResponseValue::StronglyRelatable,
            },
        );
        Some(svc.dispatch(session, QuizEvent::Back))
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 / 100"), "missing counter in {html}");
    assert_eq!(html.matches("quiz__option--selected").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn calculating_view_smoke_renders_first_message() {
    let mut harness = setup_flow_harness(QuizSettings::default(), |svc, session| {
        let session = svc.dispatch(session, QuizEvent::Start);
        Some(answer_all(svc, session, |_| ResponseValue::Relatable))
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Soul Appraisal in Progress"), "missing title in {html}");
    assert!(html.contains(CALCULATING_MESSAGES[0]), "missing message in {html}");
    assert!(!html.contains("The Verdict has been cast"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn calculating_view_moves_to_results_when_timer_elapses() {
    let mut harness = setup_flow_harness(settings_with_delay(10), |svc, session| {
        let session = svc.dispatch(session, QuizEvent::Start);
        Some(answer_all(svc, session, |_| ResponseValue::Relatable))
    });
    harness.rebuild();

    let mut html = harness.render();
    for _ in 0..20 {
        if html.contains("The Verdict has been cast") {
            break;
        }
        harness.drive_async().await;
        html = harness.render();
    }

    assert!(html.contains("The Verdict has been cast"), "still calculating: {html}");
    // Relatable everywhere scores (5 - 0) / (8 - 0) for every sin.
    assert!(html.contains("EQUAL"), "missing equanimity in {html}");
    assert_eq!(html.matches("63/100").count(), Sin::COUNT, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_dominant_sin_and_bars() {
    let mut harness = setup_flow_harness(QuizSettings::default(), |svc, session| {
        let session = svc.dispatch(session, QuizEvent::Start);
        let session = answer_all(svc, session, |sin| {
            if sin == Sin::Sloth {
                ResponseValue::StronglyRelatable
            } else {
                ResponseValue::Unrelatable
            }
        });
        let ticket = session.calculation_ticket();
        Some(svc.dispatch(session, QuizEvent::CalculationElapsed { ticket }))
    });
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "The Verdict has been cast",
        "Your Primary Affliction",
        "Soul Saturation",
        "Individual Intensity Profile",
        "Core Frequency: Sloth",
        "100/100",
        "Return to the Void",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert_eq!(html.matches("25/100").count(), Sin::COUNT - 1, "{html}");
    assert_eq!(html.matches("Affinities Detected").count(), Sin::COUNT, "{html}");
    assert!(!html.contains("EQUAL"));
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_equanimity() {
    let mut harness = setup_flow_harness(QuizSettings::default(), |svc, session| {
        let session = svc.dispatch(session, QuizEvent::Start);
        let session = answer_all(svc, session, |_| ResponseValue::StronglyUnrelatable);
        let ticket = session.calculation_ticket();
        Some(svc.dispatch(session, QuizEvent::CalculationElapsed { ticket }))
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("The Absolute Singularity"), "missing subtitle in {html}");
    assert!(html.contains("EQUAL"), "missing title in {html}");
    assert!(html.contains("perfect equilibrium"), "missing description in {html}");
    assert_eq!(html.matches("0/100").count(), Sin::COUNT, "{html}");
}
