use dioxus::prelude::*;
use session::{Session, SessionScope, ViewRouter, ViewSnapshot};
use shared_types::{ContextNotInitializedError, Role};

/// Identity handed over by the auth provider.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub display_name: String,
    pub role: Role,
}

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user.read().as_ref().map(|u| u.role)
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the session scope provided by `App`.
pub fn use_session_scope() -> Result<SessionScope, ContextNotInitializedError> {
    try_use_context::<SessionScope>().ok_or(ContextNotInitializedError::new("session scope"))
}

/// The session `AuthGuard` keeps in step with the signed-in role.
#[derive(Clone, Copy, PartialEq)]
pub struct ActiveSession(pub Memo<Option<Session>>);

/// Hook to access the current session.
///
/// Fails when rendered outside `AuthGuard` or while nobody is signed in.
/// Subscribes the caller, so it re-renders when a new session begins.
pub fn use_session() -> Result<Session, ContextNotInitializedError> {
    try_use_context::<ActiveSession>()
        .and_then(|active| active.0.cloned())
        .ok_or(ContextNotInitializedError::new("session"))
}

/// Mirror a router's snapshot into a signal for the lifetime of the caller.
///
/// The router is bound on first render, so callers remount to switch routers.
/// The subscription is dropped with the component.
pub fn use_view_snapshot(router: &ViewRouter) -> Signal<ViewSnapshot> {
    let snapshot = use_signal(|| router.snapshot());
    let binding = use_hook(|| {
        let bound = router.clone();
        let id = bound.subscribe(move |next| {
            let mut snapshot = snapshot;
            snapshot.set(next.clone());
        });
        (bound, id)
    });
    use_drop(move || binding.0.unsubscribe(binding.1));
    snapshot
}
