use crate::model::User;

/// Where the client stands with respect to the backend session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The startup session check has not resolved yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Transitions accepted by [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A user payload arrived (or the lookup failed, in which case `None`).
    UserLoaded(Option<User>),
    SignedOut,
}

/// Client-side record of the current user and auth status.
///
/// `user` is `Some` exactly when the phase is `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: SessionPhase,
    user: Option<User>,
}

impl Session {
    /// The state a freshly started client is in.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            phase: SessionPhase::Loading,
            user: None,
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            phase: SessionPhase::Unauthenticated,
            user: None,
        }
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            user: Some(user),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Apply a transition. Every event settles the loading flag.
    pub fn apply(&mut self, event: SessionEvent) {
        *self = match event {
            SessionEvent::UserLoaded(Some(user)) => Self::signed_in(user),
            SessionEvent::UserLoaded(None) | SessionEvent::SignedOut => Self::signed_out(),
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}
