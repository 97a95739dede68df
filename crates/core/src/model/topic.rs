use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{SubTopicId, TopicId};

/// Server-derived status of a topic.
///
/// Decoding is lenient: any string the client does not know reads as `NotStarted`,
/// so one odd topic never fails the whole list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TopicStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl From<String> for TopicStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "In Progress" | "InProgress" => Self::InProgress,
            "Completed" => Self::Completed,
            _ => Self::NotStarted,
        }
    }
}

impl TopicStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Difficulty of a subtopic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single checklist item inside a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTopic {
    #[serde(rename = "_id", alias = "id")]
    pub id: SubTopicId,
    pub name: String,
    #[serde(default)]
    pub leetcode_link: String,
    #[serde(default)]
    pub youtube_link: String,
    #[serde(default)]
    pub article_link: String,
    pub level: Level,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(rename = "_id", alias = "id")]
    pub id: TopicId,
    pub name: String,
    #[serde(default)]
    pub status: TopicStatus,
    #[serde(default)]
    pub sub_topics: Vec<SubTopic>,
}

impl Topic {
    /// Set the completion flag of one subtopic. Returns whether it was found.
    pub fn set_subtopic_completed(&mut self, id: &SubTopicId, completed: bool) -> bool {
        match self.sub_topics.iter_mut().find(|sub| &sub.id == id) {
            Some(sub) => {
                sub.completed = completed;
                true
            }
            None => false,
        }
    }
}
