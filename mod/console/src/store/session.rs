use replast_state::{StateCell, SubscriptionId};

use crate::model::{Permission, Session};

/// Lifecycle of the authenticated session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Unauthenticated => None,
            SessionState::Authenticated(s) => Some(s),
        }
    }
}

/// Holds the authenticated user and the user's resolved permission set.
///
/// Writes are atomic replacements — dependent reads observe either the
/// old or the new session, never a partial one. After [`clear`], all
/// permission-gated views resolve to no access rather than stale prior
/// grants.
///
/// [`clear`]: SessionStore::clear
pub struct SessionStore {
    state: StateCell<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: StateCell::default(),
        }
    }

    /// Replace the active session wholesale.
    pub fn set(&self, session: Session) {
        tracing::info!(user_id = session.user.id.0, "session replaced");
        self.state.set(SessionState::Authenticated(session));
    }

    /// Snapshot of the current lifecycle state.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// The live session, if authenticated.
    pub fn session(&self) -> Option<Session> {
        match self.state.get() {
            SessionState::Unauthenticated => None,
            SessionState::Authenticated(s) => Some(s),
        }
    }

    /// The bearer token of the live session, if any.
    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    /// The current permission set; empty when unauthenticated.
    pub fn permissions(&self) -> Vec<Permission> {
        self.session().map(|s| s.user.permissions).unwrap_or_default()
    }

    /// Invalidate the session. Idempotent: a second concurrent clear
    /// finds the store already unauthenticated and notifies nobody.
    ///
    /// Returns whether a session was actually dropped.
    pub fn clear(&self) -> bool {
        let cleared = self.state.set_if(|s| {
            if s.is_authenticated() {
                *s = SessionState::Unauthenticated;
                true
            } else {
                false
            }
        });
        if cleared {
            tracing::info!("session cleared");
        }
        cleared
    }

    /// Subscribe to session transitions.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.state.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
