use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::guards::{RequireAuth, RequireGuest};
use crate::session::{use_session, use_session_store};
use crate::views::{DashboardView, LoginView, ProgressView, RegisterView, TopicsView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[layout(PublicLayout)]
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
    #[end_layout]
    #[layout(ProtectedLayout)]
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/topics", TopicsView)] Topics {},
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn PublicLayout() -> Element {
    rsx! {
        RequireGuest {
            div { class: "auth-shell",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn ProtectedLayout() -> Element {
    rsx! {
        RequireAuth {
            div { class: "app",
                NavBar {}
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let store = use_session_store();
    let session = use_session();
    let name = session.user().map(|user| user.name.clone()).unwrap_or_default();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-left",
                h1 { class: "navbar-title", "Dashboard" }
                ul { class: "navbar-links",
                    li { Link { class: "nav-link", active_class: "nav-link--active", to: Route::Dashboard {}, "Profile" } }
                    li { Link { class: "nav-link", active_class: "nav-link--active", to: Route::Topics {}, "Topics" } }
                    li { Link { class: "nav-link", active_class: "nav-link--active", to: Route::Progress {}, "Progress" } }
                }
            }
            div { class: "navbar-right",
                span { class: "navbar-greeting", "Welcome, {name}!" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let store = store.clone();
                        spawn(async move {
                            store.logout().await;
                        });
                    },
                    "Logout"
                }
            }
        }
    }
}
