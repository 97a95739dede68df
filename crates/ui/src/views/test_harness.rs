use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AuthService, InMemoryBackend, SessionStore, TopicService};
use tracker_core::model::Session;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::guards::{RequireAuth, RequireGuest};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::routes::NavBar;
use crate::session::SignalSession;
use crate::views::{DashboardView, LoginView, ProgressView, RegisterView, TopicsView};

struct NoopOpener;

impl UiLinkOpener for NoopOpener {
    fn open_url(&self, _url: &str) {}
}

struct TestApp {
    auth: Arc<AuthService>,
    topics: Arc<TopicService>,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn topics(&self) -> Arc<TopicService> {
        Arc::clone(&self.topics)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NoopOpener)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Topics,
    Progress,
    Login,
    Register,
    NavBar,
    GuardAuth,
    GuardGuest,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
    session: Session,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let context = use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view);
    use_context_provider(|| {
        SessionStore::new(SignalSession::new(props.session.clone()), context.auth())
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Topics => rsx! { TopicsView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::NavBar => rsx! { NavBar {} },
        ViewKind::GuardAuth => rsx! {
            RequireAuth { p { "protected content" } }
        },
        ViewKind::GuardGuest => rsx! {
            RequireGuest { p { "guest content" } }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: InMemoryBackend,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending fetches resolve and re-render.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    backend: InMemoryBackend,
    session: Session,
) -> ViewHarness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        auth: Arc::new(AuthService::new(Arc::new(backend.clone()))),
        topics: Arc::new(TopicService::new(Arc::new(backend.clone()))),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            context: build_app_context(&app),
            view,
            session,
        },
    );

    ViewHarness {
        dom,
        backend,
    }
}
