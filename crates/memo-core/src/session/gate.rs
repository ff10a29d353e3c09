//! Authorization gate: per-route access decisions derived from the
//! session state.

use std::sync::{Arc, RwLock};

use super::{apply_change, shared_state, SessionHandle, SessionProvider, SessionState, Subscription};
use crate::models::NoteId;

/// Navigable surface of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Note list, the authenticated entry point
    Notes,
    /// Create form
    NewNote,
    /// Single note detail
    Note(NoteId),
    /// Edit form
    EditNote(NoteId),
    /// Anonymous entry point
    SignIn,
    SignUp,
}

impl Route {
    #[must_use]
    pub const fn access(&self) -> RouteAccess {
        match self {
            Self::Notes | Self::NewNote | Self::Note(_) | Self::EditNote(_) => {
                RouteAccess::RequiresAuth
            }
            Self::SignIn | Self::SignUp => RouteAccess::RequiresAnon,
        }
    }
}

/// Access requirement a route declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    RequiresAuth,
    RequiresAnon,
}

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect(Route),
    /// Session still unresolved; render nothing yet.
    Pending,
}

/// Subscribes to the session provider on construction and holds the
/// subscription for its own lifetime. Views reach the current identity
/// through the [`SessionHandle`] it hands out.
pub struct AuthGate {
    state: Arc<RwLock<SessionState>>,
    _subscription: Subscription,
}

impl AuthGate {
    #[must_use]
    pub fn new(provider: &dyn SessionProvider) -> Self {
        let state = shared_state();
        let writer = Arc::clone(&state);
        let subscription = provider.subscribe(Box::new(move |user| {
            apply_change(&writer, user);
        }));

        Self {
            state,
            _subscription: subscription,
        }
    }

    /// Snapshot of the current session state.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.session().current()
    }

    /// Cloneable read view for the store and views.
    #[must_use]
    pub fn session(&self) -> SessionHandle {
        SessionHandle::new(Arc::clone(&self.state))
    }

    /// Decide whether the given route is reachable right now.
    ///
    /// Authenticated-only routes redirect anonymous visitors to the
    /// sign-in entry point; anonymous-only routes redirect signed-in
    /// users back to the note list.
    #[must_use]
    pub fn decide(&self, route: &Route) -> AccessDecision {
        match (self.current(), route.access()) {
            (SessionState::Unknown, _) => AccessDecision::Pending,
            (SessionState::Authenticated(_), RouteAccess::RequiresAuth)
            | (SessionState::Anonymous, RouteAccess::RequiresAnon) => AccessDecision::Allow,
            (SessionState::Anonymous, RouteAccess::RequiresAuth) => {
                AccessDecision::Redirect(Route::SignIn)
            }
            (SessionState::Authenticated(_), RouteAccess::RequiresAnon) => {
                AccessDecision::Redirect(Route::Notes)
            }
        }
    }
}
