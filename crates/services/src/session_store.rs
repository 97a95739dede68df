use std::sync::{Arc, Mutex};

use tracing::info;
use tracker_core::model::{Session, SessionEvent};

use crate::auth_service::{AuthOutcome, AuthService};

/// Storage slot the session lives in.
///
/// The UI backs this with a reactive signal so readers re-render on change; tests
/// and headless callers use [`SharedSession`].
pub trait SessionCell: Clone + 'static {
    fn get(&self) -> Session;
    fn update(&self, f: impl FnOnce(&mut Session));
}

/// Thread-safe session slot for non-UI callers.
pub type SharedSession = Arc<Mutex<Session>>;

impl SessionCell for SharedSession {
    fn get(&self) -> Session {
        match self.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        match self.lock() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

/// The single owner of session state. Views read through the cell; only these
/// four operations write to it.
///
/// Calls are not serialized: if two overlap, whichever resolves last wins.
#[derive(Clone)]
pub struct SessionStore<C> {
    cell: C,
    auth: Arc<AuthService>,
}

impl<C: SessionCell> SessionStore<C> {
    #[must_use]
    pub fn new(cell: C, auth: Arc<AuthService>) -> Self {
        Self { cell, auth }
    }

    #[must_use]
    pub fn cell(&self) -> &C {
        &self.cell
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.cell.get()
    }

    /// Resolve the startup `Loading` state against the backend.
    pub async fn check_session(&self) {
        let event = self.auth.check_session().await;
        self.apply(event);
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let (outcome, event) = self.auth.login(email, password).await;
        if let Some(event) = event {
            self.apply(event);
        }
        outcome
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthOutcome {
        let (outcome, event) = self.auth.register(name, email, password).await;
        if let Some(event) = event {
            self.apply(event);
        }
        outcome
    }

    pub async fn logout(&self) {
        let event = self.auth.logout().await;
        self.apply(event);
    }

    fn apply(&self, event: SessionEvent) {
        self.cell.update(|session| {
            session.apply(event);
            info!(phase = ?session.phase(), "session updated");
        });
    }
}
