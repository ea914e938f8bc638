mod chat_vm;
mod confetti_vm;
pub mod flows;
mod lesson_vm;
mod markdown_vm;
mod progress_vm;
#[cfg(test)]
pub(crate) mod test_backend;
mod tutor_vm;

pub use chat_vm::{BubbleBody, ChatBubbleVm, map_chat_bubble, map_chat_bubbles};
pub use confetti_vm::{ConfettiPieceVm, confetti_burst, scatter_confetti};
pub use lesson_vm::{LessonCardVm, PracticeVm, map_lesson_card};
pub use markdown_vm::{looks_like_markdown, markdown_to_html, normalize_markdown, sanitize_html};
pub use progress_vm::{RoadmapItemVm, StatTileVm, map_roadmap, map_stat_tiles};
pub use tutor_vm::{Celebration, ChatRequest, Completion, LoadedLesson, TutorVm};
