use dioxus::prelude::*;
use dioxus_router::Router;
use services::SessionStore;
use tracker_core::model::Session;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::SignalSession;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_context_provider(|| {
        SessionStore::new(SignalSession::new(Session::loading()), ctx.auth())
    });

    // The one and only startup session check.
    use_hook(move || {
        spawn(async move {
            store.check_session().await;
        })
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Topic Tracker" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
