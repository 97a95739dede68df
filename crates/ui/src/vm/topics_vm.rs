use std::collections::HashSet;

use tracker_core::model::{Level, SubTopic, SubTopicId, Topic, TopicId, TopicStatus};

/// Topic that starts expanded when the list first loads.
const DEFAULT_EXPANDED_TOPIC: &str = "Algorithms";

/// Local state of the Topics screen: the fetched list plus which cards are open.
///
/// Expansion is UI-only and survives reconciling fetches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopicBoardVm {
    topics: Vec<Topic>,
    expanded: HashSet<TopicId>,
}

impl TopicBoardVm {
    #[must_use]
    pub fn from_topics(topics: Vec<Topic>) -> Self {
        let expanded = topics
            .iter()
            .filter(|topic| topic.name == DEFAULT_EXPANDED_TOPIC)
            .map(|topic| topic.id.clone())
            .collect();
        Self { topics, expanded }
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn is_expanded(&self, id: &TopicId) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: &TopicId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    /// Apply the completion flag the toggle endpoint returned. Returns whether the
    /// subtopic was on screen.
    pub fn apply_toggle(&mut self, id: &SubTopicId, completed: bool) -> bool {
        self.topics
            .iter_mut()
            .any(|topic| topic.set_subtopic_completed(id, completed))
    }

    /// Replace the list with a fresh server copy, keeping expansion state.
    pub fn reconcile(&mut self, topics: Vec<Topic>) {
        self.topics = topics;
    }

    #[must_use]
    pub fn cards(&self) -> Vec<TopicCardVm> {
        self.topics
            .iter()
            .map(|topic| TopicCardVm::new(topic, self.is_expanded(&topic.id)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: TopicId,
    pub name: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub expanded: bool,
    pub rows: Vec<SubTopicRowVm>,
}

impl TopicCardVm {
    fn new(topic: &Topic, expanded: bool) -> Self {
        Self {
            id: topic.id.clone(),
            name: topic.name.clone(),
            status_label: topic.status.label(),
            status_class: status_badge_class(topic.status),
            expanded,
            rows: topic.sub_topics.iter().map(SubTopicRowVm::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubTopicRowVm {
    pub id: SubTopicId,
    pub name: String,
    pub completed: bool,
    pub leetcode_link: String,
    pub youtube_link: String,
    pub article_link: String,
    pub level_label: &'static str,
    pub level_class: &'static str,
    pub done_label: &'static str,
    pub done_class: &'static str,
}

impl From<&SubTopic> for SubTopicRowVm {
    fn from(sub: &SubTopic) -> Self {
        let (done_label, done_class) = if sub.completed {
            ("Done", "badge badge--done")
        } else {
            ("Pending", "badge badge--neutral")
        };
        Self {
            id: sub.id.clone(),
            name: sub.name.clone(),
            completed: sub.completed,
            leetcode_link: sub.leetcode_link.clone(),
            youtube_link: sub.youtube_link.clone(),
            article_link: sub.article_link.clone(),
            level_label: sub.level.as_str(),
            level_class: level_badge_class(sub.level),
            done_label,
            done_class,
        }
    }
}

#[must_use]
pub fn status_badge_class(status: TopicStatus) -> &'static str {
    match status {
        TopicStatus::Completed => "badge badge--done",
        TopicStatus::InProgress => "badge badge--medium",
        TopicStatus::NotStarted => "badge badge--neutral",
    }
}

#[must_use]
pub fn level_badge_class(level: Level) -> &'static str {
    match level {
        Level::Easy => "badge badge--easy",
        Level::Medium => "badge badge--medium",
        Level::Hard => "badge badge--hard",
    }
}
