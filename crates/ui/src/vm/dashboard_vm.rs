use tracker_core::model::{Level, ProgressSummary, TopicProgress};

/// Number of topics shown in the "Recent Progress" grid.
const RECENT_TOPICS: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub overall_percentage: String,
    pub overall_caption: String,
    pub levels: Vec<LevelLineVm>,
    pub recent: Vec<TopicProgressVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelLineVm {
    pub label: &'static str,
    pub class: &'static str,
    pub counts: String,
}

/// One topic's server-computed progress, ready to render as a bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicProgressVm {
    pub name: String,
    pub counts: String,
    pub percentage: String,
    pub bar_style: String,
}

impl From<&TopicProgress> for TopicProgressVm {
    fn from(topic: &TopicProgress) -> Self {
        Self {
            name: topic.name.clone(),
            counts: format!("{}/{}", topic.completed, topic.total),
            percentage: format!("{}%", topic.rounded_percentage()),
            bar_style: width_style(topic.rounded_percentage()),
        }
    }
}

#[must_use]
pub fn map_dashboard(summary: &ProgressSummary) -> DashboardVm {
    let overall = summary.overall;
    DashboardVm {
        overall_percentage: format!("{}%", overall.rounded_percentage()),
        overall_caption: format!("{} of {} completed", overall.completed, overall.total),
        levels: summary
            .level_stats
            .iter()
            .map(|(level, count)| LevelLineVm {
                label: level.as_str(),
                class: level_text_class(level),
                counts: format!("{}/{}", count.completed, count.total),
            })
            .collect(),
        recent: summary
            .topic_progress
            .iter()
            .take(RECENT_TOPICS)
            .map(TopicProgressVm::from)
            .collect(),
    }
}

#[must_use]
pub fn level_text_class(level: Level) -> &'static str {
    match level {
        Level::Easy => "level-text level-text--easy",
        Level::Medium => "level-text level-text--medium",
        Level::Hard => "level-text level-text--hard",
    }
}

/// Inline width for a progress bar fill, clamped to the track.
#[must_use]
pub fn width_style(percentage: u32) -> String {
    format!("width: {}%;", percentage.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::model::{LevelCount, LevelStats, OverallProgress};

    fn summary(topics: usize) -> ProgressSummary {
        ProgressSummary {
            overall: OverallProgress {
                completed: 10,
                total: 20,
                percentage: 50.0,
            },
            level_stats: LevelStats::new([(Level::Easy, LevelCount::new(3, 5))]),
            topic_progress: (0..topics)
                .map(|i| TopicProgress {
                    name: format!("Topic {i}"),
                    completed: 1,
                    total: 2,
                    percentage: 50.0,
                })
                .collect(),
        }
    }

    #[test]
    fn overall_labels_use_server_values() {
        let vm = map_dashboard(&summary(0));
        assert_eq!(vm.overall_percentage, "50%");
        assert_eq!(vm.overall_caption, "10 of 20 completed");
    }

    #[test]
    fn levels_are_listed_even_when_missing() {
        let vm = map_dashboard(&summary(0));
        let counts: Vec<&str> = vm.levels.iter().map(|line| line.counts.as_str()).collect();
        assert_eq!(counts, vec!["3/5", "0/0", "0/0"]);
    }

    #[test]
    fn recent_grid_is_capped() {
        let vm = map_dashboard(&summary(9));
        assert_eq!(vm.recent.len(), 6);
        assert_eq!(vm.recent[0].bar_style, "width: 50%;");
    }
}
