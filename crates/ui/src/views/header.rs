use dioxus::prelude::*;
use tutor_core::model::Language;

use crate::context::AppContext;
use crate::vm::{TutorVm, flows};

#[component]
pub fn TutorHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_context::<Signal<TutorVm>>();
    let (user_input, language, theme, syncing) = {
        let state = vm.read();
        (
            state.user_input().to_string(),
            state.language(),
            state.theme(),
            state.is_syncing(),
        )
    };
    let theme_label = if theme.is_dark() { "☀️ Light" } else { "🌙 Dark" };
    let start_ctx = ctx.clone();

    rsx! {
        header { class: "tutor-header",
            div { class: "brand",
                span { class: "brand-mark", "∑" }
                h1 { class: "brand-name", "DSA Tutor AI" }
            }
            div { class: "header-controls",
                input {
                    class: "user-input",
                    r#type: "text",
                    placeholder: "Email or username",
                    value: "{user_input}",
                    oninput: move |evt| vm.write().set_user_input(evt.value()),
                }
                select {
                    class: "language-select",
                    value: "{language}",
                    onchange: move |evt| {
                        if let Ok(language) = evt.value().parse::<Language>() {
                            vm.write().set_language(language);
                        }
                    },
                    for choice in Language::ALL {
                        option {
                            key: "{choice}",
                            value: "{choice}",
                            selected: choice == language,
                            "{choice.label()}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: syncing,
                    onclick: move |_| {
                        let ctx = start_ctx.clone();
                        spawn(async move {
                            let mut vm = vm;
                            flows::start(&ctx, &mut vm).await;
                        });
                    },
                    "Start / Resume"
                }
                button {
                    class: "btn btn-ghost theme-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let ctx = ctx.clone();
                        spawn(async move {
                            let mut vm = vm;
                            flows::toggle_theme(&ctx, &mut vm).await;
                        });
                    },
                    "{theme_label}"
                }
            }
        }
    }
}
