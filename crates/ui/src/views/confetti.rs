use dioxus::prelude::*;

use crate::vm::TutorVm;

#[component]
pub fn ConfettiOverlay() -> Element {
    let vm = use_context::<Signal<TutorVm>>();
    let Some(celebration) = vm.read().celebration().cloned() else {
        return rsx! {};
    };

    let pieces = celebration.pieces().iter().enumerate().map(|(index, piece)| {
        rsx! {
            span { key: "{index}", class: "confetti-piece", style: piece.style() }
        }
    });

    rsx! {
        div { key: "{celebration.id()}", class: "confetti",
            {pieces}
            div { class: "confetti-toast", "Completed {celebration.topic()}!" }
        }
    }
}
