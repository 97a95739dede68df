use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{LoadingPlaceholder, ProgressBar};
use crate::views::{ViewError, ViewState, fetch_failed, view_state_from_resource};
use crate::vm::{BarChartVm, DonutVm, LevelCardVm, ProgressReportVm, map_progress_report};

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let topics = ctx.topics();

    let resource = use_resource(move || {
        let topics = topics.clone();
        async move {
            let summary = topics
                .progress()
                .await
                .map_err(|err| fetch_failed("progress", &err))?;
            Ok::<_, ViewError>(map_progress_report(&summary))
        }
    });

    match view_state_from_resource(resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingPlaceholder {}
        },
        ViewState::Ready(report) => rsx! {
            ProgressReport { report }
        },
        ViewState::Error(_) => rsx! {
            div { class: "page progress",
                p { class: "muted empty", "Unable to load progress data." }
            }
        },
    }
}

#[component]
fn ProgressReport(report: ProgressReportVm) -> Element {
    rsx! {
        div { class: "page progress",
            section { class: "card",
                h1 { class: "page-title", "Progress Reports" }
                p { class: "page-subtitle", "Track your learning journey with detailed analytics" }
            }
            div { class: "grid grid-2",
                section { class: "card",
                    h2 { class: "card-title", "Overall Progress" }
                    Donut {
                        donut: report.donut.clone(),
                        percentage: report.overall_percentage.clone(),
                    }
                    p { class: "muted center", "{report.overall_caption}" }
                }
                section { class: "card",
                    h2 { class: "card-title", "Level Distribution" }
                    BarChart { chart: report.bars.clone() }
                }
            }
            div { class: "grid grid-3",
                for card in report.levels.iter().cloned() {
                    LevelCard { key: "{card.label}", card }
                }
            }
            section { class: "card",
                h2 { class: "card-title", "Topic-wise Progress" }
                if report.topics.is_empty() {
                    p { class: "muted empty", "No topic progress yet." }
                } else {
                    ul { class: "topic-progress-list",
                        for topic in report.topics.iter() {
                            li { key: "{topic.name}",
                                div { class: "topic-progress-head",
                                    span { "{topic.name}" }
                                    span { class: "muted", "{topic.counts} ({topic.percentage})" }
                                }
                                ProgressBar { fill_class: "bar-fill", style: topic.bar_style.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Donut(donut: DonutVm, percentage: String) -> Element {
    let radius = donut.radius;
    let size = radius * 2.0 + 40.0;
    let center = size / 2.0;

    rsx! {
        div { class: "donut",
            svg {
                width: "{size}",
                height: "{size}",
                "viewBox": "0 0 {size} {size}",
                g { transform: "rotate(-90 {center} {center})",
                    circle {
                        class: "donut-track",
                        cx: "{center}",
                        cy: "{center}",
                        r: "{radius}",
                        fill: "none",
                        "stroke-width": "24",
                    }
                    circle {
                        class: "donut-fill",
                        cx: "{center}",
                        cy: "{center}",
                        r: "{radius}",
                        fill: "none",
                        "stroke-width": "24",
                        "stroke-dasharray": "{donut.dash_array}",
                    }
                }
            }
            span { class: "donut-label", "{percentage}" }
            ul { class: "legend",
                li { span { class: "swatch swatch--done" } "Completed: {donut.completed}" }
                li { span { class: "swatch swatch--remaining" } "Remaining: {donut.remaining}" }
            }
        }
    }
}

#[component]
fn BarChart(chart: BarChartVm) -> Element {
    let right = chart.width;
    let label_y = chart.baseline + 18.0;

    rsx! {
        svg {
            class: "bar-chart",
            width: "100%",
            "viewBox": "0 0 {chart.width} {chart.height}",
            for (index, tick) in chart.ticks.iter().enumerate() {
                g { key: "{index}",
                    line {
                        class: "grid-line",
                        x1: "40",
                        x2: "{right}",
                        y1: "{tick.y}",
                        y2: "{tick.y}",
                    }
                    text {
                        class: "tick-label",
                        x: "32",
                        y: "{tick.y}",
                        "text-anchor": "end",
                        "{tick.value}"
                    }
                }
            }
            for group in chart.groups.iter() {
                g { key: "{group.label}",
                    rect {
                        class: "bar bar--completed",
                        x: "{group.completed.x}",
                        y: "{group.completed.y}",
                        width: "{group.completed.width}",
                        height: "{group.completed.height}",
                    }
                    rect {
                        class: "bar bar--total",
                        x: "{group.total.x}",
                        y: "{group.total.y}",
                        width: "{group.total.width}",
                        height: "{group.total.height}",
                    }
                    text {
                        class: "axis-label",
                        x: "{group.label_x}",
                        y: "{label_y}",
                        "text-anchor": "middle",
                        "{group.label}"
                    }
                }
            }
        }
        ul { class: "legend",
            li { span { class: "swatch swatch--done" } "Completed" }
            li { span { class: "swatch swatch--total" } "Total" }
        }
    }
}

#[component]
fn LevelCard(card: LevelCardVm) -> Element {
    rsx! {
        section { class: "card level-card",
            h3 { class: "{card.text_class}", "{card.label}" }
            p { class: "level-percentage", "{card.percentage}" }
            ProgressBar { fill_class: card.bar_class.to_owned(), style: card.bar_style.clone() }
            p { class: "muted", "{card.caption}" }
        }
    }
}
