use tutor_core::model::{Curriculum, Progress, Topic};

const NO_CURRENT_TOPIC: &str = "-";
const ALL_DONE: &str = "All done 🎉";
const ENTRANCE_STAGGER_MS: u64 = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapItemVm {
    pub topic: Topic,
    pub position_label: String,
    pub selected: bool,
    pub completed: bool,
    pub entrance_delay_ms: u64,
}

impl RoadmapItemVm {
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("roadmap-item");
        if self.selected {
            class.push_str(" roadmap-item--selected");
        }
        if self.completed {
            class.push_str(" roadmap-item--done");
        }
        class
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub label: &'static str,
    pub value: String,
}

#[must_use]
pub fn map_roadmap(
    curriculum: &Curriculum,
    progress: Option<&Progress>,
    selected: &Topic,
) -> Vec<RoadmapItemVm> {
    curriculum
        .topics()
        .iter()
        .enumerate()
        .map(|(index, topic)| RoadmapItemVm {
            topic: topic.clone(),
            position_label: format!("{:02}", index + 1),
            selected: topic == selected,
            completed: progress.is_some_and(|progress| progress.is_completed(topic)),
            entrance_delay_ms: ENTRANCE_STAGGER_MS * index as u64,
        })
        .collect()
}

/// Completed / Current / Next tiles; empty until the backend has answered.
#[must_use]
pub fn map_stat_tiles(progress: Option<&Progress>) -> Vec<StatTileVm> {
    let Some(progress) = progress else {
        return Vec::new();
    };
    vec![
        StatTileVm {
            label: "Completed",
            value: progress.completed_count().to_string(),
        },
        StatTileVm {
            label: "Current",
            value: progress
                .current_topic
                .as_ref()
                .map_or_else(|| NO_CURRENT_TOPIC.to_string(), Topic::to_string),
        },
        StatTileVm {
            label: "Next",
            value: progress
                .next_topic
                .as_ref()
                .map_or_else(|| ALL_DONE.to_string(), Topic::to_string),
        },
    ]
}
