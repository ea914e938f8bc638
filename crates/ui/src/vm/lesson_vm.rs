use tutor_core::model::Lesson;

use crate::vm::tutor_vm::LoadedLesson;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeVm {
    pub title: String,
    pub prompt: String,
    pub example_label: Option<String>,
}

/// Display-ready lesson card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub avatar: char,
    pub title: String,
    pub overview: String,
    pub pseudocode: Option<String>,
    pub code_heading: String,
    pub code: Option<String>,
    pub practice: Option<PracticeVm>,
    pub complexity_label: Option<String>,
    pub language_label: String,
}

#[must_use]
pub fn map_lesson_card(loaded: &LoadedLesson) -> LessonCardVm {
    let Lesson {
        topic,
        overview,
        pseudocode,
        code,
        practice,
        complexity_note,
    } = &loaded.lesson;

    let practice = practice.as_ref().map(|practice| PracticeVm {
        title: practice.title.clone(),
        prompt: practice.prompt.clone(),
        example_label: practice
            .examples
            .as_ref()
            .map(|example| format!("Example: {} → {}", example.input, example.output)),
    });

    LessonCardVm {
        avatar: topic.initial(),
        title: topic.to_string(),
        overview: overview.clone(),
        pseudocode: pseudocode.clone(),
        code_heading: format!("Example Code ({})", loaded.language),
        code: code.clone(),
        practice,
        complexity_label: complexity_note.as_ref().map(|note| format!("Note: {note}")),
        language_label: format!("Language: {}", loaded.language),
    }
}
