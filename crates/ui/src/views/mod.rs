mod chat;
mod confetti;
mod header;
mod lesson;
mod roadmap;
mod tutor;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatWidget;
pub use confetti::ConfettiOverlay;
pub use header::TutorHeader;
pub use lesson::LessonPane;
pub use roadmap::Roadmap;
pub use tutor::{TutorShell, TutorView};
