use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub type Reply = Result<u64, String>;

/// Transport whose replies are released by the test, one channel per call.
///
/// Each call to the fetcher takes the next queued receiver, so tests decide
/// exactly when (and in which order) every issued fetch resolves.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    pending: Rc<RefCell<VecDeque<oneshot::Receiver<Reply>>>>,
    calls: Rc<Cell<usize>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply slot for the next call and return its sender.
    pub fn expect_call(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn fetcher(&self) -> impl Fn() -> LocalBoxFuture<'static, Reply> {
        let transport = self.clone();
        move || {
            transport.calls.set(transport.calls.get() + 1);
            let next = transport.pending.borrow_mut().pop_front();
            async move {
                match next {
                    Some(rx) => rx.await.unwrap_or_else(|_| Err("reply dropped".to_string())),
                    None => Err("unexpected call".to_string()),
                }
            }
            .boxed_local()
        }
    }
}

/// Transport that always answers immediately with `reply`.
pub fn immediate(reply: Reply) -> impl Fn() -> LocalBoxFuture<'static, Reply> {
    move || {
        let reply = reply.clone();
        async move { reply }.boxed_local()
    }
}
