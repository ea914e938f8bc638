use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{BubbleBody, TutorVm, flows, map_chat_bubbles};

#[component]
pub fn ChatWidget() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_context::<Signal<TutorVm>>();
    let mut draft = use_signal(String::new);
    let (open, pending, bubbles, topic) = {
        let state = vm.read();
        (
            state.is_chat_open(),
            state.is_chat_pending(),
            map_chat_bubbles(state.chat()),
            state.selected_topic().clone(),
        )
    };
    let is_empty = bubbles.is_empty();

    let transcript = bubbles.into_iter().map(|bubble| match bubble.body {
        BubbleBody::Html(html) => rsx! {
            div { key: "{bubble.key}", class: bubble.class, dangerous_inner_html: html }
        },
        BubbleBody::Text(text) => rsx! {
            div { key: "{bubble.key}", class: bubble.class, "{text}" }
        },
    });

    rsx! {
        div { class: "chat-widget",
            if open {
                section { class: "chat-panel",
                    header { class: "chat-header",
                        span { class: "chat-title", "DSA Tutor AI" }
                        span { class: "chat-topic", "{topic}" }
                    }
                    div { class: "chat-transcript",
                        if is_empty {
                            p { class: "chat-empty", "Ask anything about {topic}." }
                        }
                        {transcript}
                        if pending {
                            div { class: "bubble bubble--assistant bubble--pending", "Thinking…" }
                        }
                    }
                    form {
                        class: "chat-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let message = draft();
                            if !vm.peek().accepts_chat(&message) {
                                return;
                            }
                            draft.set(String::new());
                            let ctx = ctx.clone();
                            spawn(async move {
                                let mut vm = vm;
                                flows::send_chat(&ctx, &mut vm, message).await;
                            });
                        },
                        input {
                            class: "chat-input",
                            r#type: "text",
                            placeholder: "Ask a question",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: pending,
                            "Send"
                        }
                    }
                }
            }
            button {
                class: "chat-toggle",
                r#type: "button",
                onclick: move |_| vm.write().toggle_chat(),
                if open { "Close" } else { "Ask the tutor" }
            }
        }
    }
}
