//! Async sequencing of backend calls around the tutor view state.
//!
//! Each flow touches the state only inside `VmCell::with_vm`, never across an
//! `.await`, so the same code drives a Dioxus signal and a plain `TutorVm`.

use std::time::Duration;

use dioxus::prelude::*;
use tutor_core::model::Topic;

use crate::context::AppContext;
use crate::vm::tutor_vm::TutorVm;

pub const CELEBRATION_DURATION: Duration = Duration::from_millis(2500);

/// Short, synchronous access to the tutor state.
pub trait VmCell {
    fn with_vm<R>(&mut self, f: impl FnOnce(&mut TutorVm) -> R) -> R;
}

impl VmCell for TutorVm {
    fn with_vm<R>(&mut self, f: impl FnOnce(&mut TutorVm) -> R) -> R {
        f(self)
    }
}

impl VmCell for Signal<TutorVm> {
    fn with_vm<R>(&mut self, f: impl FnOnce(&mut TutorVm) -> R) -> R {
        let mut vm = self.write();
        f(&mut vm)
    }
}

/// Start or resume: init progress, then load the suggested lesson.
pub async fn start<C: VmCell>(ctx: &AppContext, cell: &mut C) {
    let Some((user, language)) = cell.with_vm(TutorVm::begin_init) else {
        return;
    };
    tracing::info!(%user, %language, "starting tutor session");
    let result = ctx.backend().init_progress(&user, language).await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "init failed");
    }
    let Some(topic) = cell.with_vm(|vm| vm.finish_init(user, result)) else {
        return;
    };
    save_preferences(ctx, cell).await;
    load_lesson(ctx, cell, topic).await;
}

/// Select a roadmap topic and load its lesson.
pub async fn open_topic<C: VmCell>(ctx: &AppContext, cell: &mut C, topic: Topic) {
    cell.with_vm(|vm| vm.select_topic(topic.clone()));
    load_lesson(ctx, cell, topic).await;
}

pub async fn load_lesson<C: VmCell>(ctx: &AppContext, cell: &mut C, topic: Topic) {
    let language = cell.with_vm(TutorVm::begin_lesson);
    let result = ctx.backend().fetch_lesson(&topic, language).await;
    if let Err(err) = &result {
        tracing::warn!(%topic, error = %err, "lesson load failed");
    }
    cell.with_vm(|vm| vm.finish_lesson(language, result));
}

/// Mark the selected topic complete and auto-advance to the next lesson.
///
/// Returns the celebration id so the caller can schedule its expiry.
pub async fn complete<C: VmCell>(ctx: &AppContext, cell: &mut C) -> Option<u64> {
    let (user, topic) = cell.with_vm(TutorVm::begin_complete)?;
    let result = ctx.backend().complete_topic(&user, &topic).await;
    if let Err(err) = &result {
        tracing::warn!(%topic, error = %err, "completion failed");
    }
    let completion = cell.with_vm(|vm| vm.finish_complete(topic.clone(), result))?;
    tracing::info!(%topic, next = ?completion.next_topic, "topic completed");
    if let Some(next) = completion.next_topic {
        load_lesson(ctx, cell, next).await;
    }
    Some(completion.celebration_id)
}

/// Wait out the celebration, then clear it.
pub async fn expire_celebration<C: VmCell>(cell: &mut C, celebration_id: u64) {
    tokio::time::sleep(CELEBRATION_DURATION).await;
    cell.with_vm(|vm| vm.clear_celebration(celebration_id));
}

pub async fn send_chat<C: VmCell>(ctx: &AppContext, cell: &mut C, message: String) {
    let Some(request) = cell.with_vm(|vm| vm.begin_chat(&message)) else {
        return;
    };
    let result = ctx
        .backend()
        .chat(&request.user, &request.message, &request.topic)
        .await;
    if let Err(err) = &result {
        tracing::warn!(topic = %request.topic, error = %err, "chat failed");
    }
    cell.with_vm(|vm| vm.finish_chat(result));
}

pub async fn toggle_theme<C: VmCell>(ctx: &AppContext, cell: &mut C) {
    cell.with_vm(TutorVm::toggle_theme);
    save_preferences(ctx, cell).await;
}

// Preference persistence is best effort; the learner never sees these errors.
async fn save_preferences<C: VmCell>(ctx: &AppContext, cell: &mut C) {
    let preferences = cell.with_vm(|vm| vm.preferences());
    if let Err(err) = ctx.preferences().save(&preferences).await {
        tracing::warn!(error = %err, "failed to save preferences");
    }
}
