//! Parallel stat aggregator.
//!
//! Each tracked statistic owns a [`StatQueryState`] and a generation counter.
//! Issuing a fetch bumps the counter; a response is applied only while its
//! generation is still current, so a slow superseded request can never
//! overwrite a newer result. Fetch failures stay on the failing statistic.

use futures::future::{join_all, FutureExt, LocalBoxFuture};
use shared_types::StatFetchError;
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Loading/data/error triple for one statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct StatQueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<StatFetchError>,
}

impl<T> StatQueryState<T> {
    pub fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn succeeded(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: StatFetchError) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error),
        }
    }
}

impl<T> Default for StatQueryState<T> {
    fn default() -> Self {
        Self::loading()
    }
}

pub type StatFuture<T> = LocalBoxFuture<'static, Result<T, StatFetchError>>;

type Fetcher<T> = Rc<dyn Fn() -> StatFuture<T>>;
type Listener<K, T> = Rc<dyn Fn(K, &StatQueryState<T>)>;

struct Slot<K, T> {
    key: K,
    state: StatQueryState<T>,
    generation: u64,
    fetch: Fetcher<T>,
}

struct AggregatorInner<K, T> {
    slots: RefCell<Vec<Slot<K, T>>>,
    listeners: RefCell<Vec<Listener<K, T>>>,
}

impl<K, T> AggregatorInner<K, T>
where
    K: Copy + fmt::Debug + 'static,
    T: Clone + 'static,
{
    fn notify(&self, index: usize) {
        let (key, state) = {
            let slots = self.slots.borrow();
            (slots[index].key, slots[index].state.clone())
        };
        let listeners: Vec<Listener<K, T>> = self.listeners.borrow().iter().cloned().collect();
        for listener in listeners {
            listener(key, &state);
        }
    }

    fn settle(&self, index: usize, generation: u64, outcome: Result<T, StatFetchError>) {
        {
            let mut slots = self.slots.borrow_mut();
            let slot = &mut slots[index];
            if slot.generation != generation {
                tracing::debug!(
                    stat = ?slot.key,
                    generation,
                    current = slot.generation,
                    "discarding stale statistic result"
                );
                return;
            }
            slot.state = match outcome {
                Ok(data) => StatQueryState::succeeded(data),
                Err(error) => {
                    tracing::warn!(stat = ?slot.key, %error, "statistic fetch failed");
                    StatQueryState::failed(error)
                }
            };
        }
        self.notify(index);
    }
}

/// Tracks several independently fetched statistics keyed by `K`.
///
/// Single-threaded: clones share state through `Rc` and the returned futures
/// are `!Send`. Drive them with whatever local executor the caller owns.
pub struct StatAggregator<K, T> {
    inner: Rc<AggregatorInner<K, T>>,
}

impl<K, T> Clone for StatAggregator<K, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K, T> PartialEq for StatAggregator<K, T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<K, T> StatAggregator<K, T>
where
    K: Copy + Eq + fmt::Debug + 'static,
    T: Clone + 'static,
{
    pub fn builder() -> StatAggregatorBuilder<K, T> {
        StatAggregatorBuilder { slots: Vec::new() }
    }

    pub fn keys(&self) -> Vec<K> {
        self.inner.slots.borrow().iter().map(|slot| slot.key).collect()
    }

    pub fn state(&self, key: K) -> Option<StatQueryState<T>> {
        self.inner
            .slots
            .borrow()
            .iter()
            .find(|slot| slot.key == key)
            .map(|slot| slot.state.clone())
    }

    /// Every statistic's state, in tracking order.
    pub fn states(&self) -> Vec<(K, StatQueryState<T>)> {
        self.inner
            .slots
            .borrow()
            .iter()
            .map(|slot| (slot.key, slot.state.clone()))
            .collect()
    }

    /// Generation of the most recently issued fetch; 0 before the first one.
    pub fn generation(&self, key: K) -> Option<u64> {
        self.inner
            .slots
            .borrow()
            .iter()
            .find(|slot| slot.key == key)
            .map(|slot| slot.generation)
    }

    /// Called synchronously after every state transition of any statistic.
    pub fn subscribe(&self, f: impl Fn(K, &StatQueryState<T>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(f));
    }

    /// Reset every statistic to loading and issue all fetches at once.
    ///
    /// The fetches are issued before this returns; the future only waits for
    /// them to settle. Fetches left over from an earlier call are not awaited
    /// and their late results are discarded.
    pub fn refetch_all(&self) -> LocalBoxFuture<'static, ()> {
        let count = self.inner.slots.borrow().len();
        let pending: Vec<_> = (0..count).map(|index| self.dispatch(index)).collect();
        join_all(pending).map(|_| ()).boxed_local()
    }

    /// Re-issue one statistic's fetch. `None` if `key` is not tracked.
    pub fn retry(&self, key: K) -> Option<LocalBoxFuture<'static, ()>> {
        let index = self
            .inner
            .slots
            .borrow()
            .iter()
            .position(|slot| slot.key == key)?;
        Some(self.dispatch(index))
    }

    fn dispatch(&self, index: usize) -> LocalBoxFuture<'static, ()> {
        let (generation, fetch) = {
            let mut slots = self.inner.slots.borrow_mut();
            let slot = &mut slots[index];
            slot.generation += 1;
            slot.state = StatQueryState::loading();
            (slot.generation, Rc::clone(&slot.fetch))
        };
        self.inner.notify(index);

        let pending = fetch();
        let inner = Rc::clone(&self.inner);
        async move {
            let outcome = pending.await;
            inner.settle(index, generation, outcome);
        }
        .boxed_local()
    }
}

impl<K, T> fmt::Debug for StatAggregator<K, T>
where
    K: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.inner.slots.borrow();
        f.debug_map()
            .entries(slots.iter().map(|slot| (&slot.key, &slot.state)))
            .finish()
    }
}

/// Collects the statistics an aggregator tracks.
pub struct StatAggregatorBuilder<K, T> {
    slots: Vec<Slot<K, T>>,
}

impl<K, T> StatAggregatorBuilder<K, T>
where
    K: Copy + Eq + fmt::Debug + 'static,
    T: Clone + 'static,
{
    /// Track `key`, fetched by calling `fetch`. Tracking a key twice keeps
    /// its original position and replaces the fetcher.
    pub fn track<F, Fut, E>(mut self, key: K, fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: fmt::Display,
    {
        let fetch: Fetcher<T> = Rc::new(move || {
            let pending = fetch();
            async move { pending.await.map_err(StatFetchError::from_display) }.boxed_local()
        });
        match self.slots.iter_mut().find(|slot| slot.key == key) {
            Some(slot) => slot.fetch = fetch,
            None => self.slots.push(Slot {
                key,
                state: StatQueryState::loading(),
                generation: 0,
                fetch,
            }),
        }
        self
    }

    pub fn build(self) -> StatAggregator<K, T> {
        StatAggregator {
            inner: Rc::new(AggregatorInner {
                slots: RefCell::new(self.slots),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }
}
