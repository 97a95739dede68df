use std::f64::consts::PI;

use tracker_core::model::{Level, LevelCount, ProgressSummary};

use crate::vm::dashboard_vm::{TopicProgressVm, level_text_class, width_style};

const DONUT_RADIUS: f64 = 80.0;

// Bar chart viewport, in SVG user units.
const CHART_WIDTH: f64 = 360.0;
const CHART_HEIGHT: f64 = 240.0;
const PLOT_LEFT: f64 = 40.0;
const PLOT_TOP: f64 = 20.0;
const PLOT_BOTTOM: f64 = 210.0;
const AXIS_INTERVALS: u32 = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressReportVm {
    pub overall_percentage: String,
    pub overall_caption: String,
    pub donut: DonutVm,
    pub bars: BarChartVm,
    pub levels: Vec<LevelCardVm>,
    pub topics: Vec<TopicProgressVm>,
}

/// Completed-vs-remaining ring drawn with a single dashed circle stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutVm {
    pub radius: f64,
    pub completed: u32,
    pub remaining: u32,
    pub dash_array: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChartVm {
    pub width: f64,
    pub height: f64,
    pub baseline: f64,
    pub ticks: Vec<AxisTickVm>,
    pub groups: Vec<BarGroupVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTickVm {
    pub value: u32,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGroupVm {
    pub label: &'static str,
    pub label_x: f64,
    pub completed: BarVm,
    pub total: BarVm,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarVm {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCardVm {
    pub label: &'static str,
    pub text_class: &'static str,
    pub bar_class: &'static str,
    pub percentage: String,
    pub bar_style: String,
    pub caption: String,
}

#[must_use]
pub fn map_progress_report(summary: &ProgressSummary) -> ProgressReportVm {
    let overall = summary.overall;
    ProgressReportVm {
        overall_percentage: format!("{}%", overall.rounded_percentage()),
        overall_caption: format!(
            "{} of {} topics completed",
            overall.completed, overall.total
        ),
        donut: donut(overall.completed, overall.remaining()),
        bars: bar_chart(summary),
        levels: summary
            .level_stats
            .iter()
            .map(|(level, count)| level_card(level, count))
            .collect(),
        topics: summary
            .topic_progress
            .iter()
            .map(TopicProgressVm::from)
            .collect(),
    }
}

fn donut(completed: u32, remaining: u32) -> DonutVm {
    let circumference = 2.0 * PI * DONUT_RADIUS;
    let total = f64::from(completed) + f64::from(remaining);
    let filled = if total > 0.0 {
        circumference * f64::from(completed) / total
    } else {
        0.0
    };
    DonutVm {
        radius: DONUT_RADIUS,
        completed,
        remaining,
        dash_array: format!("{filled:.2} {circumference:.2}"),
    }
}

fn level_card(level: Level, count: LevelCount) -> LevelCardVm {
    let percentage = count.percentage();
    LevelCardVm {
        label: level.as_str(),
        text_class: level_text_class(level),
        bar_class: match level {
            Level::Easy => "bar-fill bar-fill--easy",
            Level::Medium => "bar-fill bar-fill--medium",
            Level::Hard => "bar-fill bar-fill--hard",
        },
        percentage: format!("{percentage}%"),
        bar_style: width_style(percentage),
        caption: format!("{} of {} completed", count.completed, count.total),
    }
}

/// Smallest "nice" step (1, 2 or 5 times a power of ten) so that
/// `AXIS_INTERVALS` steps cover `max`.
#[must_use]
pub fn axis_step(max: u32) -> u32 {
    let raw = max.div_ceil(AXIS_INTERVALS).max(1);
    let mut magnitude = 1u32;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    [1u32, 2, 5, 10]
        .into_iter()
        .map(|factor| factor.saturating_mul(magnitude))
        .find(|step| *step >= raw)
        .unwrap_or(raw)
}

fn bar_chart(summary: &ProgressSummary) -> BarChartVm {
    let max = summary
        .level_stats
        .iter()
        .map(|(_, count)| count.total.max(count.completed))
        .max()
        .unwrap_or(0);
    let step = axis_step(max);
    let axis_max = f64::from(step.saturating_mul(AXIS_INTERVALS));
    let plot_height = PLOT_BOTTOM - PLOT_TOP;
    // Saturated axes can sit below the largest value; keep bars inside the plot.
    let scale = |value: u32| (plot_height * f64::from(value) / axis_max).min(plot_height);

    let ticks = (0..=AXIS_INTERVALS)
        .map(|i| {
            let value = step.saturating_mul(i);
            AxisTickVm {
                value,
                y: PLOT_BOTTOM - scale(value),
            }
        })
        .collect();

    let group_width = (CHART_WIDTH - PLOT_LEFT) / 3.0;
    let bar_width = group_width / 3.0;
    let groups = summary
        .level_stats
        .iter()
        .enumerate()
        .map(|(index, (level, count))| {
            let left = PLOT_LEFT + group_width * index as f64 + bar_width / 2.0;
            let bar = |x: f64, value: u32| BarVm {
                x,
                y: PLOT_BOTTOM - scale(value),
                width: bar_width,
                height: scale(value),
            };
            BarGroupVm {
                label: level.as_str(),
                label_x: left + bar_width,
                completed: bar(left, count.completed),
                total: bar(left + bar_width, count.total),
            }
        })
        .collect();

    BarChartVm {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        baseline: PLOT_BOTTOM,
        ticks,
        groups,
    }
}
