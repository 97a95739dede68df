use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Level;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallProgress {
    pub completed: u32,
    pub total: u32,
    /// Server-computed, 0..=100. May carry a fraction.
    pub percentage: f64,
}

impl OverallProgress {
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }

    #[must_use]
    pub fn rounded_percentage(&self) -> u32 {
        round_percentage(self.percentage)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCount {
    pub completed: u32,
    pub total: u32,
}

impl LevelCount {
    #[must_use]
    pub fn new(completed: u32, total: u32) -> Self {
        Self { completed, total }
    }

    /// Completion percentage rounded half-up; `0` for an empty level.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        percent_of(self.completed, self.total)
    }
}

/// Per-level completion counts keyed by wire name (`EASY`, `MEDIUM`, `HARD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelStats(BTreeMap<Level, LevelCount>);

impl LevelStats {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (Level, LevelCount)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Counts for a level; levels the server omitted read as empty.
    #[must_use]
    pub fn get(&self, level: Level) -> LevelCount {
        self.0.get(&level).copied().unwrap_or_default()
    }

    /// All three levels in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, LevelCount)> + '_ {
        Level::ALL.into_iter().map(|level| (level, self.get(level)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicProgress {
    pub name: String,
    pub completed: u32,
    pub total: u32,
    pub percentage: f64,
}

impl TopicProgress {
    #[must_use]
    pub fn rounded_percentage(&self) -> u32 {
        round_percentage(self.percentage)
    }
}

/// Aggregate returned by `/topics/progress`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub overall: OverallProgress,
    #[serde(default)]
    pub level_stats: LevelStats,
    #[serde(default)]
    pub topic_progress: Vec<TopicProgress>,
}

/// Integer percentage of `completed / total`, rounded half-up.
#[must_use]
pub fn percent_of(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = u64::from(completed) * 100;
    let total = u64::from(total);
    let rounded = (scaled * 2 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Display form of a server percentage: nearest whole number, clamped to 0..=100.
fn round_percentage(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    // Clamped first, so the cast cannot truncate.
    value.round().clamp(0.0, 100.0) as u32
}
