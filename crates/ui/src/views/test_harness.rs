use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use storage::repository::InMemoryRepository;
use tutor_core::model::Topic;

use crate::context::AppContext;
use crate::views::{TutorShell, TutorView};
use crate::vm::{TutorVm, flows};
use crate::vm::test_backend::{ScriptedBackend, test_context};

/// Hooks the root registers so tests can act on the live page state.
#[derive(Clone, Default)]
struct HarnessHandles {
    open_topic: Rc<RefCell<Option<Callback<Topic>>>>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    vm: Option<TutorVm>,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    let seeded = props.vm.is_some();
    let vm = use_signal(|| props.vm.clone().unwrap_or_default());
    use_context_provider(|| vm);
    let ctx = props.ctx.clone();
    let open_topic = use_callback(move |topic: Topic| {
        let ctx = ctx.clone();
        spawn(async move {
            let mut vm = vm;
            flows::open_topic(&ctx, &mut vm, topic).await;
        });
    });
    *props.handles.open_topic.borrow_mut() = Some(open_topic);
    if seeded {
        rsx! { TutorShell {} }
    } else {
        rsx! { TutorView {} }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: Arc<ScriptedBackend>,
    handles: HarnessHandles,
}

impl ViewHarness {
    /// Render the page as `TutorView` builds it from the context.
    pub fn fresh() -> Self {
        Self::build(None)
    }

    /// Render the shell around a prepared state.
    pub fn seeded(vm: TutorVm) -> Self {
        Self::build(Some(vm))
    }

    fn build(vm: Option<TutorVm>) -> Self {
        let backend = Arc::new(ScriptedBackend::new());
        let ctx = test_context(Arc::clone(&backend), InMemoryRepository::new());
        let handles = HarnessHandles::default();
        let mut dom = VirtualDom::new_with_props(
            ViewHarnessRoot,
            ViewHarnessProps {
                ctx,
                vm,
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self {
            dom,
            backend,
            handles,
        }
    }

    /// Run `flows::open_topic` against the page's signal, as a roadmap click does.
    pub fn open_topic(&self, topic: Topic) {
        let open_topic = (*self.handles.open_topic.borrow()).expect("harness root registered");
        self.dom.in_runtime(|| open_topic.call(topic));
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
