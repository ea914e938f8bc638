use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{TutorVm, flows, map_roadmap, map_stat_tiles};

#[component]
pub fn Roadmap() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<TutorVm>>();
    let (items, tiles) = {
        let state = vm.read();
        (
            map_roadmap(state.curriculum(), state.progress(), state.selected_topic()),
            map_stat_tiles(state.progress()),
        )
    };

    let entries = items.into_iter().map(|item| {
        let ctx = ctx.clone();
        let class = item.class();
        let topic = item.topic.clone();
        rsx! {
            li { key: "{item.topic}",
                button {
                    class: "{class}",
                    style: "animation-delay: {item.entrance_delay_ms}ms",
                    r#type: "button",
                    onclick: move |_| {
                        let ctx = ctx.clone();
                        let topic = topic.clone();
                        spawn(async move {
                            let mut vm = vm;
                            flows::open_topic(&ctx, &mut vm, topic).await;
                        });
                    },
                    span { class: "roadmap-index", "{item.position_label}" }
                    span { class: "roadmap-name", "{item.topic}" }
                    if item.completed {
                        span { class: "badge badge--done", "Done" }
                    }
                }
            }
        }
    });

    let stat_tiles = tiles.into_iter().map(|tile| {
        rsx! {
            div { key: "{tile.label}", class: "stat-tile",
                span { class: "stat-label", "{tile.label}" }
                span { class: "stat-value", "{tile.value}" }
            }
        }
    });

    rsx! {
        aside { class: "roadmap",
            h2 { class: "roadmap-title", "Roadmap" }
            ol { class: "roadmap-list", {entries} }
            div { class: "stat-tiles", {stat_tiles} }
        }
    }
}
