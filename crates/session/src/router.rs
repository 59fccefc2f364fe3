//! Content-view router: the session's "which panel is showing" state.
//!
//! Purely synchronous. Every transition rebuilds the whole [`ViewSnapshot`]
//! before any subscriber runs, so nobody observes a title that belongs to a
//! different view id.

use shared_types::{is_coming_soon, resolve_title, ViewId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Active view plus the metadata derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub active_view: ViewId,
    pub page_title: &'static str,
    pub is_coming_soon: bool,
}

impl ViewSnapshot {
    pub fn for_view(active_view: ViewId) -> Self {
        let page_title = resolve_title(active_view.as_str());
        let is_coming_soon = is_coming_soon(active_view.as_str());
        Self {
            active_view,
            page_title,
            is_coming_soon,
        }
    }
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self::for_view(ViewId::default())
    }
}

/// Handle returned by [`ViewRouter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&ViewSnapshot)>;

struct RouterInner {
    snapshot: RefCell<ViewSnapshot>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

/// Cheaply clonable handle to one session's active-view state.
#[derive(Clone)]
pub struct ViewRouter {
    inner: Rc<RouterInner>,
}

impl ViewRouter {
    /// A router sitting on the default view.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RouterInner {
                snapshot: RefCell::new(ViewSnapshot::default()),
                subscribers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
            }),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    pub fn active_view(&self) -> ViewId {
        self.inner.snapshot.borrow().active_view.clone()
    }

    pub fn page_title(&self) -> &'static str {
        self.inner.snapshot.borrow().page_title
    }

    pub fn is_coming_soon(&self) -> bool {
        self.inner.snapshot.borrow().is_coming_soon
    }

    /// Overwrite the active view and notify every subscriber before returning.
    ///
    /// Unconditional: setting the current view again still notifies. Callers
    /// reacting to a notification must not transition again for the same
    /// navigation event; the router does not break cycles.
    pub fn set_active_view(&self, view_id: impl Into<ViewId>) {
        let snapshot = ViewSnapshot::for_view(view_id.into());
        tracing::debug!(
            view = %snapshot.active_view,
            title = snapshot.page_title,
            coming_soon = snapshot.is_coming_soon,
            "active view changed"
        );
        *self.inner.snapshot.borrow_mut() = snapshot.clone();

        // Clone the list so subscribers can subscribe or transition re-entrantly.
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&ViewSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRouter")
            .field("snapshot", &*self.inner.snapshot.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl PartialEq for ViewRouter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
