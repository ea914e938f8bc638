use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ChatWidget, ConfettiOverlay, LessonPane, Roadmap, TutorHeader};
use crate::vm::TutorVm;

/// Root of the tutor page. Owns the state signal shared by every pane.
#[component]
pub fn TutorView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| TutorVm::new(ctx.curriculum().clone(), ctx.initial_preferences()));
    use_context_provider(|| vm);

    rsx! { TutorShell {} }
}

#[component]
pub fn TutorShell() -> Element {
    let vm = use_context::<Signal<TutorVm>>();
    let theme = vm.read().theme();

    rsx! {
        div { class: "tutor theme-{theme}",
            div { class: "orb orb--one" }
            div { class: "orb orb--two" }
            TutorHeader {}
            div { class: "tutor-body",
                Roadmap {}
                LessonPane {}
            }
            ChatWidget {}
            ConfettiOverlay {}
        }
    }
}
