//! Route gates. Both variants hold off while the startup session check is pending,
//! so a signed-in user never sees a flash of the login screen.

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracker_core::model::Session;

use crate::routes::Route;
use crate::session::use_session_store;
use crate::views::LoadingPlaceholder;

/// A gate decides, from session state alone, whether its children may render.
pub trait RouteGate: 'static {
    fn admits(session: &Session) -> bool;
    fn redirect_to() -> Route;
}

/// Screens for signed-in users only.
pub struct AuthenticatedOnly;

/// Login/register screens; signed-in users are sent to the dashboard.
pub struct UnauthenticatedOnly;

impl RouteGate for AuthenticatedOnly {
    fn admits(session: &Session) -> bool {
        session.is_authenticated()
    }

    fn redirect_to() -> Route {
        Route::Login {}
    }
}

impl RouteGate for UnauthenticatedOnly {
    fn admits(session: &Session) -> bool {
        !session.is_authenticated()
    }

    fn redirect_to() -> Route {
        Route::Dashboard {}
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GateDecision {
    Loading,
    Render,
    Redirect(Route),
}

#[must_use]
pub fn decide<G: RouteGate>(session: &Session) -> GateDecision {
    if session.is_loading() {
        GateDecision::Loading
    } else if G::admits(session) {
        GateDecision::Render
    } else {
        GateDecision::Redirect(G::redirect_to())
    }
}

fn use_gate<G: RouteGate>() -> GateDecision {
    let cell = *use_session_store().cell();
    let navigator = use_navigator();

    use_effect(move || {
        if let GateDecision::Redirect(target) = decide::<G>(&cell.current()) {
            let _ = navigator.replace(target);
        }
    });

    decide::<G>(&cell.current())
}

fn render_gate(decision: GateDecision, children: Element) -> Element {
    match decision {
        GateDecision::Loading => rsx! { LoadingPlaceholder {} },
        GateDecision::Render => children,
        // The effect above performs the navigation.
        GateDecision::Redirect(_) => rsx! {},
    }
}

#[component]
pub fn RequireAuth(children: Element) -> Element {
    render_gate(use_gate::<AuthenticatedOnly>(), children)
}

#[component]
pub fn RequireGuest(children: Element) -> Element {
    render_gate(use_gate::<UnauthenticatedOnly>(), children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::model::{User, UserId};

    fn signed_in() -> Session {
        Session::signed_in(User::new(UserId::new("u1"), "Asha", "asha@example.com"))
    }

    #[test]
    fn loading_never_redirects() {
        let session = Session::loading();
        assert_eq!(decide::<AuthenticatedOnly>(&session), GateDecision::Loading);
        assert_eq!(decide::<UnauthenticatedOnly>(&session), GateDecision::Loading);
    }

    #[test]
    fn authenticated_gate() {
        assert_eq!(decide::<AuthenticatedOnly>(&signed_in()), GateDecision::Render);
        assert_eq!(
            decide::<AuthenticatedOnly>(&Session::signed_out()),
            GateDecision::Redirect(Route::Login {})
        );
    }

    #[test]
    fn unauthenticated_gate() {
        assert_eq!(
            decide::<UnauthenticatedOnly>(&Session::signed_out()),
            GateDecision::Render
        );
        assert_eq!(
            decide::<UnauthenticatedOnly>(&signed_in()),
            GateDecision::Redirect(Route::Dashboard {})
        );
    }
}
