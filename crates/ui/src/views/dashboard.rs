use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_session;
use crate::views::components::{LoadingPlaceholder, ProgressBar};
use crate::views::{ViewError, ViewState, fetch_failed, view_state_from_resource};
use crate::vm::{DashboardVm, TopicProgressVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let topics = ctx.topics();
    let session = use_session();
    let name = session.user().map(|user| user.name.clone()).unwrap_or_default();

    let resource = use_resource(move || {
        let topics = topics.clone();
        async move {
            let summary = topics
                .progress()
                .await
                .map_err(|err| fetch_failed("progress", &err))?;
            Ok::<_, ViewError>(map_dashboard(&summary))
        }
    });

    match view_state_from_resource(resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingPlaceholder {}
        },
        ViewState::Ready(data) => rsx! {
            DashboardBody { name, data: Some(data) }
        },
        // Fetch failures leave the welcome card on its own.
        ViewState::Error(_) => rsx! {
            DashboardBody { name, data: None }
        },
    }
}

#[component]
fn DashboardBody(name: String, #[props(!optional)] data: Option<DashboardVm>) -> Element {
    rsx! {
        div { class: "page dashboard",
            section { class: "card",
                h1 { class: "page-title", "Welcome back, {name}! 👋" }
                p { class: "page-subtitle",
                    "Ready to continue your coding journey? Check out your progress below and dive into some topics!"
                }
            }
            if let Some(data) = data {
                div { class: "grid grid-3",
                    section { class: "card overall-card",
                        span { class: "overall-badge", "{data.overall_percentage}" }
                        div {
                            h3 { "Overall Progress" }
                            p { class: "muted", "{data.overall_caption}" }
                        }
                    }
                    section { class: "card",
                        h3 { "Level Progress" }
                        ul { class: "level-lines",
                            for line in data.levels.iter() {
                                li { key: "{line.label}",
                                    span { class: "{line.class}", "{line.label}" }
                                    span { class: "muted", "{line.counts}" }
                                }
                            }
                        }
                    }
                    section { class: "card",
                        h3 { "Quick Actions" }
                        div { class: "quick-actions",
                            Link { class: "btn btn-primary", to: Route::Topics {}, "Browse Topics" }
                            Link { class: "btn btn-success", to: Route::Progress {}, "View Progress Report" }
                        }
                    }
                }
                if !data.recent.is_empty() {
                    section { class: "card",
                        h2 { class: "card-title", "Recent Progress" }
                        div { class: "grid grid-3",
                            for topic in data.recent.iter().cloned() {
                                RecentTopic { key: "{topic.name}", topic }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentTopic(topic: TopicProgressVm) -> Element {
    rsx! {
        div { class: "topic-tile",
            h3 { "{topic.name}" }
            div { class: "topic-tile-stats",
                span { class: "muted", "{topic.counts}" }
                span { class: "accent", "{topic.percentage}" }
            }
            ProgressBar { fill_class: "bar-fill", style: topic.bar_style.clone() }
        }
    }
}
