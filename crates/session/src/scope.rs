use shared_types::{navigation_for_role, ContextNotInitializedError, NavigationEntry, Role};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::router::ViewRouter;

/// State owned by one authenticated browsing session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: u64,
    role: Role,
    router: ViewRouter,
}

impl Session {
    fn new(id: u64, role: Role) -> Self {
        Self {
            id,
            role,
            router: ViewRouter::new(),
        }
    }

    /// Serial number, unique within the scope that began this session.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn navigation(&self) -> &'static [NavigationEntry] {
        navigation_for_role(self.role)
    }
}

/// Explicit owner of the current session, injected into consumers.
///
/// Empty until [`SessionScope::begin`]; every accessor fails with
/// [`ContextNotInitializedError`] while empty. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct SessionScope {
    current: Rc<RefCell<Option<Session>>>,
    began: Rc<Cell<u64>>,
}

impl SessionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `role`, replacing any previous one.
    ///
    /// The new session always starts on the default view; routers handed out
    /// by an earlier session are detached and no longer observed.
    pub fn begin(&self, role: Role) -> Session {
        let id = self.began.get() + 1;
        self.began.set(id);
        let session = Session::new(id, role);
        if self.current.replace(Some(session.clone())).is_some() {
            tracing::info!(role = %role, session = id, "session replaced");
        } else {
            tracing::info!(role = %role, session = id, "session started");
        }
        session
    }

    /// Tear down the current session (logout). No-op when already empty.
    pub fn end(&self) {
        if let Some(session) = self.current.take() {
            tracing::info!(role = %session.role, "session ended");
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn session(&self) -> Result<Session, ContextNotInitializedError> {
        self.current
            .borrow()
            .clone()
            .ok_or(ContextNotInitializedError::new("session"))
    }

    pub fn router(&self) -> Result<ViewRouter, ContextNotInitializedError> {
        self.current
            .borrow()
            .as_ref()
            .map(|session| session.router.clone())
            .ok_or(ContextNotInitializedError::new("view router"))
    }

    pub fn role(&self) -> Result<Role, ContextNotInitializedError> {
        self.current
            .borrow()
            .as_ref()
            .map(|session| session.role)
            .ok_or(ContextNotInitializedError::new("session role"))
    }

    pub fn navigation(&self) -> Result<&'static [NavigationEntry], ContextNotInitializedError> {
        self.current
            .borrow()
            .as_ref()
            .map(Session::navigation)
            .ok_or(ContextNotInitializedError::new("navigation"))
    }
}

impl PartialEq for SessionScope {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}
