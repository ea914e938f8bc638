use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{LessonCardVm, TutorVm, flows, map_lesson_card};

const BOUNDARIES_NOTE: &str = "Boundaries: I only discuss Data Structures and Algorithms. For off-topic questions, I will reply: \"Sorry, I can only discuss topics related to Data Structures and Algorithms.\"";

#[derive(Clone, Debug, PartialEq)]
enum PaneState {
    Empty,
    Loading,
    Ready {
        card: LessonCardVm,
        done: bool,
    },
}

/// Error banner, lesson body and the boundaries note.
///
/// Completion tasks are spawned from this scope so they outlive the card,
/// which unmounts while the next lesson loads.
#[component]
pub fn LessonPane() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_context::<Signal<TutorVm>>();
    let (state, error, syncing) = {
        let current = vm.read();
        let state = if current.is_loading() {
            PaneState::Loading
        } else if let Some(loaded) = current.lesson() {
            PaneState::Ready {
                card: map_lesson_card(loaded),
                done: current.is_completed(&loaded.lesson.topic),
            }
        } else {
            PaneState::Empty
        };
        (state, current.error().map(str::to_string), current.is_syncing())
    };

    rsx! {
        main { class: "lesson-pane",
            if let Some(message) = error {
                div { class: "error-banner", role: "alert",
                    span { "{message}" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| vm.write().dismiss_error(),
                        "Dismiss"
                    }
                }
            }
            match state {
                PaneState::Empty => rsx! { EmptyState {} },
                PaneState::Loading => rsx! { LoadingSkeleton {} },
                PaneState::Ready { card, done } => rsx! {
                    LessonCard {
                        card,
                        done,
                        syncing,
                        on_complete: move |_| {
                            let ctx = ctx.clone();
                            spawn(async move {
                                let mut vm = vm;
                                if let Some(id) = flows::complete(&ctx, &mut vm).await {
                                    flows::expire_celebration(&mut vm, id).await;
                                }
                            });
                        },
                    }
                },
            }
            p { class: "boundaries-note", "{BOUNDARIES_NOTE}" }
        }
    }
}

#[component]
fn LessonCard(
    card: LessonCardVm,
    done: bool,
    syncing: bool,
    on_complete: EventHandler<MouseEvent>,
) -> Element {
    let standalone_note = if card.practice.is_none() {
        card.complexity_label.clone()
    } else {
        None
    };

    rsx! {
        article { class: "lesson-card",
            header { class: "lesson-header",
                span { class: "lesson-avatar", "{card.avatar}" }
                h2 { class: "lesson-title", "{card.title}" }
                if done {
                    span { class: "badge badge--done", "Done" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: syncing,
                    onclick: move |evt| on_complete.call(evt),
                    "Mark Complete"
                }
            }
            if !card.overview.is_empty() {
                p { class: "lesson-overview", "{card.overview}" }
            }
            if let Some(pseudocode) = card.pseudocode.clone() {
                section { class: "lesson-section",
                    h3 { "Pseudocode" }
                    pre { class: "code-block", "{pseudocode}" }
                }
            }
            if let Some(snippet) = card.code.clone() {
                section { class: "lesson-section",
                    h3 { "{card.code_heading}" }
                    pre { class: "code-block", code { "{snippet}" } }
                }
            }
            if let Some(practice) = card.practice.clone() {
                section { class: "lesson-section practice",
                    h3 { "Practice" }
                    h4 { class: "practice-title", "{practice.title}" }
                    p { class: "practice-prompt", "{practice.prompt}" }
                    if let Some(example) = practice.example_label {
                        p { class: "practice-example", "{example}" }
                    }
                    if let Some(note) = card.complexity_label.clone() {
                        p { class: "practice-note", "{note}" }
                    }
                }
            }
            if let Some(note) = standalone_note {
                p { class: "practice-note", "{note}" }
            }
            footer { class: "lesson-footer",
                span { "{card.language_label}" }
                span { class: "lesson-footer-note", "Smooth transitions enabled" }
            }
        }
    }
}

#[component]
fn LoadingSkeleton() -> Element {
    rsx! {
        div { class: "lesson-card skeleton",
            div { class: "shimmer shimmer--title" }
            div { class: "shimmer shimmer--line" }
            div { class: "shimmer shimmer--line" }
            div { class: "shimmer shimmer--block" }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "lesson-card empty-state",
            p { "Start or resume to load your personalized lesson." }
        }
    }
}
