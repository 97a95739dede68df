use services::InMemoryBackend;
use tracker_core::model::{
    Level, LevelCount, LevelStats, OverallProgress, ProgressSummary, Session, SubTopic,
    SubTopicId, Topic, TopicId, TopicProgress, TopicStatus, User, UserId,
};

use super::test_harness::{ViewKind, setup_view_harness};

fn asha() -> User {
    User::new(UserId::new("u1"), "Asha", "asha@example.com")
}

fn summary() -> ProgressSummary {
    ProgressSummary {
        overall: OverallProgress {
            completed: 10,
            total: 20,
            percentage: 50.0,
        },
        level_stats: LevelStats::new([
            (Level::Easy, LevelCount::new(3, 5)),
            (Level::Medium, LevelCount::new(0, 0)),
            (Level::Hard, LevelCount::new(1, 4)),
        ]),
        topic_progress: vec![TopicProgress {
            name: "Graphs".into(),
            completed: 2,
            total: 8,
            percentage: 25.0,
        }],
    }
}

fn sub(id: &str, name: &str) -> SubTopic {
    SubTopic {
        id: SubTopicId::new(id),
        name: name.into(),
        leetcode_link: format!("https://leetcode.com/problems/{id}"),
        youtube_link: String::new(),
        article_link: String::new(),
        level: Level::Medium,
        completed: false,
    }
}

fn topics() -> Vec<Topic> {
    vec![
        Topic {
            id: TopicId::new("t1"),
            name: "Algorithms".into(),
            status: TopicStatus::NotStarted,
            sub_topics: vec![sub("s1", "Binary Search")],
        },
        Topic {
            id: TopicId::new("t2"),
            name: "Databases".into(),
            status: TopicStatus::NotStarted,
            sub_topics: vec![sub("s2", "Indexing")],
        },
        Topic {
            id: TopicId::new("t3"),
            name: "Networking".into(),
            status: TopicStatus::NotStarted,
            sub_topics: Vec::new(),
        },
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_overall_progress() {
    let backend = InMemoryBackend::new().with_progress(summary());
    let mut harness = setup_view_harness(ViewKind::Dashboard, backend, Session::signed_in(asha()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome back, Asha"), "missing greeting in {html}");
    assert!(html.contains("50%"), "missing overall percentage in {html}");
    assert!(html.contains("10 of 20 completed"), "missing caption in {html}");
    assert!(html.contains("3/5"), "missing easy counts in {html}");
    assert!(html.contains("Graphs"), "missing recent topic in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_keeps_welcome_card_when_fetch_fails() {
    let backend = InMemoryBackend::new().failing_reads();
    let mut harness = setup_view_harness(ViewKind::Dashboard, backend, Session::signed_in(asha()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome back, Asha"), "missing greeting in {html}");
    assert!(!html.contains("Overall Progress"), "unexpected stats in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_expands_only_algorithms() {
    let backend = InMemoryBackend::new().with_topics(topics());
    let mut harness = setup_view_harness(ViewKind::Topics, backend, Session::signed_in(asha()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Explore these exciting topics!"), "missing subtitle in {html}");
    assert!(html.contains("Databases"), "missing collapsed card in {html}");
    assert!(html.contains("Binary Search"), "missing expanded row in {html}");
    assert!(!html.contains("Indexing"), "collapsed rows rendered in {html}");
    assert!(html.contains("Pending"), "missing status badge in {html}");
    assert!(html.contains("Practice"), "missing resource link in {html}");
    assert_eq!(harness.backend.list_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_level_cards() {
    let backend = InMemoryBackend::new().with_progress(summary());
    let mut harness = setup_view_harness(ViewKind::Progress, backend, Session::signed_in(asha()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Progress Reports"), "missing title in {html}");
    assert!(
        html.contains("Track your learning journey with detailed analytics"),
        "missing subtitle in {html}"
    );
    assert!(html.contains("Level Distribution"), "missing chart heading in {html}");
    assert!(html.contains("10 of 20 topics completed"), "missing caption in {html}");
    assert!(html.contains("60%"), "missing easy percentage in {html}");
    assert!(html.contains("25%"), "missing hard percentage in {html}");
    assert!(html.contains("0 of 0 completed"), "missing medium caption in {html}");
    assert!(html.contains("Topic-wise Progress"), "missing topic list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_failure_message() {
    let backend = InMemoryBackend::new().failing_reads();
    let mut harness = setup_view_harness(ViewKind::Progress, backend, Session::signed_in(asha()));
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Unable to load progress data."),
        "missing failure message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn guard_shows_placeholder_while_session_is_loading() {
    let mut harness =
        setup_view_harness(ViewKind::GuardAuth, InMemoryBackend::new(), Session::loading());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing placeholder in {html}");
    assert!(!html.contains("protected content"), "children leaked in {html}");

    let mut harness =
        setup_view_harness(ViewKind::GuardGuest, InMemoryBackend::new(), Session::loading());
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("guest content"), "children leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guard_renders_children_for_admitted_session() {
    let mut harness = setup_view_harness(
        ViewKind::GuardAuth,
        InMemoryBackend::new(),
        Session::signed_in(asha()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("protected content"), "missing children in {html}");

    let mut harness = setup_view_harness(
        ViewKind::GuardGuest,
        InMemoryBackend::new(),
        Session::signed_out(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("guest content"), "missing children in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn nav_bar_greets_the_user() {
    let mut harness =
        setup_view_harness(ViewKind::NavBar, InMemoryBackend::new(), Session::signed_in(asha()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome, Asha!"), "missing greeting in {html}");
    assert!(html.contains("Logout"), "missing logout button in {html}");
    assert!(html.contains("Progress"), "missing nav link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_forms_render() {
    let mut harness =
        setup_view_harness(ViewKind::Login, InMemoryBackend::new(), Session::signed_out());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in to your account"), "missing title in {html}");
    assert!(html.contains("Register"), "missing register link in {html}");

    let mut harness =
        setup_view_harness(ViewKind::Register, InMemoryBackend::new(), Session::signed_out());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Create your account"), "missing title in {html}");
    assert!(html.contains("Full name"), "missing name field in {html}");
}
