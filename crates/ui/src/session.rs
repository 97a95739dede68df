use dioxus::prelude::*;
use services::{SessionCell, SessionStore};
use tracker_core::model::Session;

/// Session slot backed by a Dioxus signal, so components that read it re-render
/// on every transition.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalSession(Signal<Session>);

impl SignalSession {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new(initial: Session) -> Self {
        Self(Signal::new(initial))
    }

    /// Read and subscribe the current component.
    #[must_use]
    pub fn current(&self) -> Session {
        self.0.read().clone()
    }
}

impl SessionCell for SignalSession {
    fn get(&self) -> Session {
        self.0.peek().clone()
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        let mut signal = self.0;
        f(&mut signal.write());
    }
}

pub type UiSessionStore = SessionStore<SignalSession>;

#[must_use]
pub fn use_session_store() -> UiSessionStore {
    use_context::<UiSessionStore>()
}

/// Current session; the calling component re-renders when it changes.
#[must_use]
pub fn use_session() -> Session {
    use_session_store().cell().current()
}
