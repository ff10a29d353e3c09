//! Session state and the authorization gate.
//!
//! The identity provider itself (sign-in/sign-up/sign-out) is external;
//! this module only consumes its "current user or none" notifications
//! and turns them into an explicit tri-state session.

pub mod gate;

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::UserId;

pub use gate::{AccessDecision, AuthGate, Route, RouteAccess};

/// Current identity as reported by the external session provider.
///
/// `Unknown` means no notification has arrived yet; it is transient and
/// never conflated with `Anonymous`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unknown,
    Authenticated(UserId),
    Anonymous,
}

impl SessionState {
    /// The signed-in identity, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unknown | Self::Anonymous => None,
        }
    }

    /// Whether the provider has reported anything yet.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Change notification callback: the signed-in user id, or `None` when
/// signed out.
pub type SessionCallback = Box<dyn Fn(Option<UserId>) + Send + Sync>;

/// External identity provider seam.
///
/// Implementations must invoke the callback with the current identity
/// immediately on subscribe, and again on every change, until the
/// returned [`Subscription`] is dropped.
pub trait SessionProvider {
    fn subscribe(&self, on_change: SessionCallback) -> Subscription;
}

/// RAII guard for a provider subscription; releases the callback on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    #[must_use]
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    #[must_use]
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Provider backed by a fixed identity, for clients that resolve their
/// session once per process (e.g. the CLI's stored session).
pub struct StaticSessionProvider {
    user: Option<UserId>,
}

impl StaticSessionProvider {
    #[must_use]
    pub const fn new(user: Option<UserId>) -> Self {
        Self { user }
    }

    #[must_use]
    pub const fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn subscribe(&self, on_change: SessionCallback) -> Subscription {
        on_change(self.user.clone());
        Subscription::noop()
    }
}

/// Cloneable read view of the gate's session state, passed explicitly
/// into the store and every view that needs the current identity.
#[derive(Clone)]
pub struct SessionHandle {
    state: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    fn new(state: Arc<RwLock<SessionState>>) -> Self {
        Self { state }
    }

    /// Snapshot of the session state at this moment.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub(crate) fn shared_state() -> Arc<RwLock<SessionState>> {
    Arc::new(RwLock::new(SessionState::Unknown))
}

pub(crate) fn apply_change(state: &Arc<RwLock<SessionState>>, user: Option<UserId>) {
    let next = user.map_or(SessionState::Anonymous, SessionState::Authenticated);
    tracing::debug!(state = ?next.user_id(), "session changed");
    *state.write().unwrap_or_else(PoisonError::into_inner) = next;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    use super::{SessionCallback, SessionProvider, Subscription};
    use crate::models::UserId;

    type Subscribers = Arc<Mutex<Vec<(u64, SessionCallback)>>>;

    /// Provider that emits whenever the test asks it to.
    #[derive(Default)]
    pub(crate) struct ManualSessionProvider {
        subscribers: Subscribers,
        next_id: AtomicU64,
    }

    impl ManualSessionProvider {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn emit(&self, user: Option<UserId>) {
            let subscribers = self.subscribers.lock().unwrap();
            for (_, on_change) in subscribers.iter() {
                on_change(user.clone());
            }
        }

        pub(crate) fn subscriber_count(&self) -> usize {
            self.subscribers.lock().unwrap().len()
        }
    }

    impl SessionProvider for ManualSessionProvider {
        fn subscribe(&self, on_change: SessionCallback) -> Subscription {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            self.subscribers.lock().unwrap().push((id, on_change));

            let subscribers = Arc::clone(&self.subscribers);
            Subscription::new(move || {
                subscribers
                    .lock()
                    .unwrap()
                    .retain(|(entry, _)| *entry != id);
            })
        }
    }
}
