use tutor_core::model::{Language, Lesson, Practice, PracticeExample, Topic};

use super::test_harness::ViewHarness;
use crate::vm::TutorVm;
use crate::vm::test_backend::{BackendCall, api_error, progress_with};

fn topic(name: &str) -> Topic {
    Topic::new(name).unwrap()
}

fn recursion_lesson() -> Lesson {
    Lesson {
        topic: topic("Recursion"),
        overview: "A function that calls itself.".into(),
        pseudocode: Some("fact(n) = n * fact(n - 1)".into()),
        code: Some("def fact(n): ...".into()),
        practice: Some(Practice {
            title: "Factorial".into(),
            prompt: "Compute n!".into(),
            examples: Some(PracticeExample {
                input: "5".into(),
                output: "120".into(),
            }),
        }),
        complexity_note: Some("O(n)".into()),
    }
}

fn started_vm(completed: &[&str], next: Option<&str>) -> TutorVm {
    let mut vm = TutorVm::default();
    let (user, _) = vm.begin_init().unwrap();
    vm.finish_init(user, Ok(progress_with(completed, next)));
    vm
}

#[test]
fn fresh_page_renders_empty_state_without_calls() {
    let harness = ViewHarness::fresh();
    let html = harness.render();

    assert!(html.contains("DSA Tutor AI"), "missing brand in {html}");
    assert!(html.contains("Start / Resume"), "missing start button in {html}");
    assert!(html.contains("student@example.com"), "missing user id in {html}");
    assert!(
        html.contains("Start or resume to load your personalized lesson."),
        "missing empty state in {html}"
    );
    assert!(html.contains("Introduction to DSA"), "missing roadmap in {html}");
    assert!(
        html.contains("Boundaries: I only discuss Data Structures and Algorithms."),
        "missing boundaries note in {html}"
    );
    assert!(!html.contains("stat-tile"), "unexpected stats in {html}");
    assert!(harness.backend.calls().is_empty());
}

#[test]
fn lesson_card_renders_every_section_with_progress_tiles() {
    let mut vm = started_vm(&["Introduction to DSA"], None);
    vm.select_topic(topic("Recursion"));
    let language = vm.begin_lesson();
    vm.finish_lesson(language, Ok(recursion_lesson()));

    let html = ViewHarness::seeded(vm).render();

    for expected in [
        "Mark Complete",
        "Pseudocode",
        "Example Code (python)",
        "Practice",
        "Example: 5 → 120",
        "Note: O(n)",
        "Language: python",
        "Smooth transitions enabled",
        "badge--done",
        "All done 🎉",
        "Completed",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Start or resume"), "unexpected empty state in {html}");
}

#[test]
fn loading_shows_skeleton() {
    let mut vm = TutorVm::default();
    vm.begin_lesson();

    let html = ViewHarness::seeded(vm).render();

    assert!(html.contains("shimmer"), "missing skeleton in {html}");
    assert!(!html.contains("Start or resume"), "unexpected empty state in {html}");
}

#[test]
fn error_banner_shows_backend_detail() {
    let mut vm = TutorVm::default();
    let (user, _) = vm.begin_init().unwrap();
    vm.finish_init(user, Err(api_error(400, Some("Unknown learner"))));

    let html = ViewHarness::seeded(vm).render();

    assert!(html.contains("error-banner"), "missing banner in {html}");
    assert!(html.contains("Unknown learner"), "missing detail in {html}");
}

#[test]
fn open_chat_renders_transcript_and_pending_state() {
    let mut vm = TutorVm::default();
    vm.toggle_chat();
    vm.begin_chat("what is a heap?").unwrap();
    vm.finish_chat(Ok("A **heap** keeps the minimum on top.".into()));
    vm.begin_chat("and a trie?").unwrap();

    let html = ViewHarness::seeded(vm).render();

    assert!(html.contains("what is a heap?"), "missing user turn in {html}");
    assert!(html.contains("<strong>heap</strong>"), "missing markdown in {html}");
    assert!(html.contains("Thinking…"), "missing pending bubble in {html}");
    assert!(html.contains("Close"), "missing toggle label in {html}");
}

#[test]
fn closed_chat_shows_only_toggle() {
    let html = ViewHarness::fresh().render();
    assert!(html.contains("Ask the tutor"), "missing toggle in {html}");
    assert!(!html.contains("chat-panel"), "unexpected panel in {html}");
}

#[test]
fn celebration_renders_confetti() {
    let mut vm = TutorVm::default();
    let (_, done) = vm.begin_complete().unwrap();
    vm.finish_complete(done, Ok(progress_with(&["Introduction to DSA"], None)))
        .unwrap();

    let html = ViewHarness::seeded(vm).render();

    assert!(html.contains("confetti-piece"), "missing confetti in {html}");
    assert!(
        html.contains("Completed Introduction to DSA!"),
        "missing toast in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn opening_a_topic_updates_the_rendered_card() {
    let mut harness = ViewHarness::seeded(started_vm(&[], Some("Introduction to DSA")));

    harness.open_topic(topic("Graphs"));
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("All about Graphs."), "missing lesson in {html}");
    assert!(html.contains("lesson-title"), "missing card in {html}");
    assert!(html.contains("roadmap-item--selected"), "missing selection in {html}");
    assert!(!html.contains("shimmer"), "still loading in {html}");
    assert_eq!(
        harness.backend.calls(),
        vec![BackendCall::Lesson {
            topic: "Graphs".into(),
            language: Language::Python
        }]
    );
}

#[test]
fn dark_theme_sets_root_class() {
    let mut vm = TutorVm::default();
    vm.toggle_theme();

    let html = ViewHarness::seeded(vm).render();

    assert!(html.contains("theme-dark"), "missing theme class in {html}");
}
