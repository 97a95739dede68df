use dioxus::prelude::*;
use services::TopicService;
use tracker_core::model::{SubTopicId, TopicId};

use crate::context::AppContext;
use crate::platform::LinkOpenerRef;
use crate::views::components::LoadingPlaceholder;
use crate::views::fetch_failed;
use crate::vm::{SubTopicRowVm, TopicBoardVm, TopicCardVm};

#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let topics = ctx.topics();
    let opener = ctx.link_opener();
    let board = use_signal(TopicBoardVm::default);

    let topics_for_load = topics.clone();
    let loader = use_resource(move || {
        let topics = topics_for_load.clone();
        let mut board = board;
        async move {
            match topics.list_topics().await {
                Ok(list) => board.set(TopicBoardVm::from_topics(list)),
                Err(err) => {
                    fetch_failed("topics", &err);
                }
            }
        }
    });

    let on_expand = use_callback(move |topic_id: TopicId| {
        let mut board = board;
        board.write().toggle_expanded(&topic_id);
    });

    let on_toggle = use_callback(move |sub_id: SubTopicId| {
        let topics = topics.clone();
        let mut board = board;
        spawn(async move {
            toggle_and_reconcile(&topics, &mut board, &sub_id).await;
        });
    });

    if matches!(*loader.state().read(), UseResourceState::Pending) {
        return rsx! { LoadingPlaceholder {} };
    }

    let cards = board.read().cards();

    rsx! {
        div { class: "page topics",
            section { class: "card",
                h1 { class: "page-title", "Topics" }
                p { class: "page-subtitle", "Explore these exciting topics!" }
            }
            div { class: "topic-list",
                for card in cards {
                    TopicCard {
                        key: "{card.id}",
                        card: card.clone(),
                        opener: opener.clone(),
                        on_expand,
                        on_toggle,
                    }
                }
            }
        }
    }
}

/// Where toggle results land: the screen's signal, or a bare board.
pub(crate) trait BoardTarget {
    fn update_board(&mut self, f: impl FnOnce(&mut TopicBoardVm));
}

impl BoardTarget for TopicBoardVm {
    fn update_board(&mut self, f: impl FnOnce(&mut TopicBoardVm)) {
        f(self);
    }
}

impl BoardTarget for Signal<TopicBoardVm> {
    fn update_board(&mut self, f: impl FnOnce(&mut TopicBoardVm)) {
        f(&mut self.write());
    }
}

/// Toggle one subtopic, apply the server's answer at once, then reconcile with a
/// fresh list so server-derived topic statuses catch up.
///
/// A failed toggle leaves the board untouched and skips the refetch. A failed
/// refetch keeps the applied flag.
pub(crate) async fn toggle_and_reconcile(
    topics: &TopicService,
    board: &mut impl BoardTarget,
    sub_id: &SubTopicId,
) {
    let completed = match topics.toggle_subtopic(sub_id).await {
        Ok(completed) => completed,
        Err(err) => {
            fetch_failed("subtopic toggle", &err);
            return;
        }
    };
    board.update_board(|board| {
        board.apply_toggle(sub_id, completed);
    });

    match topics.list_topics().await {
        Ok(list) => board.update_board(|board| board.reconcile(list)),
        Err(err) => {
            fetch_failed("updated topics", &err);
        }
    }
}

#[derive(Props, Clone)]
struct TopicCardProps {
    card: TopicCardVm,
    opener: LinkOpenerRef,
    on_expand: Callback<TopicId>,
    on_toggle: Callback<SubTopicId>,
}

impl PartialEq for TopicCardProps {
    fn eq(&self, other: &Self) -> bool {
        self.card == other.card
            && self.on_expand == other.on_expand
            && self.on_toggle == other.on_toggle
    }
}

#[component]
fn TopicCard(props: TopicCardProps) -> Element {
    let TopicCardProps {
        card,
        opener,
        on_expand,
        on_toggle,
    } = props;
    let topic_id = card.id.clone();
    let chevron = if card.expanded {
        "chevron chevron--open"
    } else {
        "chevron"
    };

    rsx! {
        div { class: "topic-card",
            div {
                class: "topic-header",
                onclick: move |_| on_expand.call(topic_id.clone()),
                div { class: "topic-header-title",
                    h2 { "{card.name}" }
                    span { class: "{card.status_class}", "{card.status_label}" }
                }
                span { class: "{chevron}" }
            }
            if card.expanded {
                div { class: "topic-body",
                    h3 { "Sub Topics" }
                    if card.rows.is_empty() {
                        p { class: "muted empty", "No subtopics available for this topic." }
                    } else {
                        table { class: "subtopic-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "LeetCode Link" }
                                    th { "YouTube Link" }
                                    th { "Article Link" }
                                    th { "Level" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for row in card.rows.iter().cloned() {
                                    SubTopicRow {
                                        key: "{row.id}",
                                        row,
                                        opener: opener.clone(),
                                        on_toggle,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone)]
struct SubTopicRowProps {
    row: SubTopicRowVm,
    opener: LinkOpenerRef,
    on_toggle: Callback<SubTopicId>,
}

impl PartialEq for SubTopicRowProps {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.on_toggle == other.on_toggle
    }
}

#[component]
fn SubTopicRow(props: SubTopicRowProps) -> Element {
    let SubTopicRowProps {
        row,
        opener,
        on_toggle,
    } = props;
    let sub_id = row.id.clone();
    let name_class = if row.completed {
        "subtopic-name subtopic-name--done"
    } else {
        "subtopic-name"
    };

    rsx! {
        tr {
            td {
                label { class: "subtopic-check",
                    input {
                        r#type: "checkbox",
                        checked: row.completed,
                        onchange: move |_| on_toggle.call(sub_id.clone()),
                    }
                    span { class: "{name_class}", "{row.name}" }
                }
            }
            td { ResourceLink { url: row.leetcode_link.clone(), label: "Practice", opener: opener.clone() } }
            td { ResourceLink { url: row.youtube_link.clone(), label: "Watch", opener: opener.clone() } }
            td { ResourceLink { url: row.article_link.clone(), label: "Read", opener } }
            td { span { class: "{row.level_class}", "{row.level_label}" } }
            td { span { class: "{row.done_class}", "{row.done_label}" } }
        }
    }
}

#[derive(Props, Clone)]
struct ResourceLinkProps {
    url: String,
    label: &'static str,
    opener: LinkOpenerRef,
}

impl PartialEq for ResourceLinkProps {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && self.label == other.label
    }
}

#[component]
fn ResourceLink(props: ResourceLinkProps) -> Element {
    let ResourceLinkProps { url, label, opener } = props;
    let target = url.clone();

    rsx! {
        a {
            class: "resource-link",
            href: "{url}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                opener.open_url(&target);
            },
            "{label}"
        }
    }
}
