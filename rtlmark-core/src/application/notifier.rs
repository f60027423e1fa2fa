//! Document direction state with change notification
//!
//! A [`DirectionNotifier`] belongs to whichever layer renders a document:
//! one instance per open document, editor or session. It records the last
//! direction derived from the document text and notifies every registered
//! observer, synchronously and in registration order, on each update.
//! Updates are not de-duplicated.
//!
//! Concurrent updates are serialized: each one is stored and delivered to
//! every observer before the next one starts, so the last change an
//! observer receives always equals [`DirectionNotifier::current`]. An
//! update issued from inside an observer is queued and delivered once the
//! running dispatch has finished.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, ThreadId};

use crate::domain::{classify, Direction};

/// Payload delivered to observers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionChange {
    /// New document direction
    pub direction: Direction,
    /// Whether the document text mixes Arabic and Latin letters
    pub is_mixed: bool,
}

type Callback = Arc<dyn Fn(DirectionChange) + Send + Sync>;

#[derive(Clone)]
enum Observer {
    Callback(Callback),
    Channel(mpsc::Sender<DirectionChange>),
}

impl Observer {
    /// Deliver `change`, false once a channel receiver has hung up
    fn notify(&self, change: DirectionChange) -> bool {
        match self {
            Observer::Callback(callback) => {
                callback(change);
                true
            }
            Observer::Channel(sender) => sender.send(change).is_ok(),
        }
    }
}

#[derive(Default)]
struct State {
    current: DirectionChange,
    observers: Vec<(u64, Observer)>,
    next_id: u64,
    /// Changes stored but not yet delivered
    pending: VecDeque<DirectionChange>,
    /// Thread currently delivering changes
    dispatcher: Option<ThreadId>,
}

impl State {
    fn register(&mut self, observer: Observer) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    // Observers run outside the lock, so a poisoned lock still holds consistent state
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the dispatch lock and resets the queue when delivery ends, even by panic
struct Dispatch<'a> {
    state: &'a Mutex<State>,
    _serial: MutexGuard<'a, ()>,
}

impl Drop for Dispatch<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        state.dispatcher = None;
        state.pending.clear();
    }
}

/// Per-document direction state and observer list
#[derive(Clone, Default)]
pub struct DirectionNotifier {
    state: Arc<Mutex<State>>,
    dispatch: Arc<Mutex<()>>,
}

impl fmt::Debug for DirectionNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("DirectionNotifier")
            .field("current", &state.current)
            .field("observers", &state.observers.len())
            .finish()
    }
}

impl DirectionNotifier {
    /// Create a notifier in the initial LTR, non-mixed state
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the document direction from `text` and notify observers.
    ///
    /// `None` and empty text yield LTR, non-mixed. Returns the change that
    /// was delivered.
    ///
    /// Blocks while another thread is delivering an update. Called from
    /// inside an observer, the change is stored and queued behind the
    /// running delivery instead.
    pub fn set_document_direction<'a>(&self, text: impl Into<Option<&'a str>>) -> DirectionChange {
        let verdict = text.into().map(classify).unwrap_or_default();
        let change = DirectionChange {
            direction: verdict.direction(),
            is_mixed: verdict.is_mixed(),
        };

        let me = thread::current().id();
        {
            let mut state = lock(&self.state);
            if state.dispatcher == Some(me) {
                state.current = change;
                state.pending.push_back(change);
                log::trace!("queued nested direction update {}", change.direction);
                return change;
            }
        }

        let _dispatch = Dispatch {
            state: &self.state,
            _serial: self
                .dispatch
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        };
        {
            let mut state = lock(&self.state);
            state.current = change;
            state.pending.push_back(change);
            state.dispatcher = Some(me);
        }

        loop {
            let (next, observers) = {
                let mut state = lock(&self.state);
                let Some(next) = state.pending.pop_front() else {
                    break;
                };
                (next, state.observers.clone())
            };

            log::trace!(
                "document direction set to {} (mixed: {}), notifying {} observers",
                next.direction,
                next.is_mixed,
                observers.len()
            );
            let closed: Vec<u64> = observers
                .iter()
                .filter(|(_, observer)| !observer.notify(next))
                .map(|(id, _)| *id)
                .collect();

            if !closed.is_empty() {
                log::debug!("pruning {} closed direction channels", closed.len());
                lock(&self.state)
                    .observers
                    .retain(|(id, _)| !closed.contains(id));
            }
        }

        change
    }

    /// Last direction set, LTR if never set
    pub fn document_direction(&self) -> Direction {
        lock(&self.state).current.direction
    }

    /// Whether the last document text was mixed
    pub fn has_mixed_content(&self) -> bool {
        lock(&self.state).current.is_mixed
    }

    /// Last delivered change
    pub fn current(&self) -> DirectionChange {
        lock(&self.state).current
    }

    /// Register a callback invoked on every update.
    ///
    /// The callback runs on the updating thread without the state lock
    /// held, so it may register or remove observers itself. Such changes
    /// take effect from the next update on.
    pub fn on_direction_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(DirectionChange) + Send + Sync + 'static,
    {
        self.subscribe(Observer::Callback(Arc::new(callback)))
    }

    /// Deliver every update to a channel. The registration is dropped
    /// automatically once the receiver hangs up.
    pub fn subscribe_channel(&self, sender: mpsc::Sender<DirectionChange>) -> Subscription {
        self.subscribe(Observer::Channel(sender))
    }

    fn subscribe(&self, observer: Observer) -> Subscription {
        let id = lock(&self.state).register(observer);
        log::debug!("registered direction observer #{id}");
        Subscription {
            state: Arc::downgrade(&self.state),
            id: Some(id),
        }
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        lock(&self.state).observers.len()
    }

    /// Remove every observer, e.g. when the host document is torn down
    pub fn clear_observers(&self) {
        let mut state = lock(&self.state);
        log::debug!("clearing {} direction observers", state.observers.len());
        state.observers.clear();
    }
}

/// Registration handle returned by [`DirectionNotifier::on_direction_change`].
///
/// Dropping the handle deregisters the observer.
#[must_use = "dropping a Subscription immediately deregisters its observer"]
pub struct Subscription {
    state: Weak<Mutex<State>>,
    id: Option<u64>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Subscription {
    /// Deregister the observer
    pub fn unsubscribe(mut self) {
        self.remove();
    }

    /// Whether the observer is still registered
    pub fn is_active(&self) -> bool {
        let (Some(id), Some(state)) = (self.id, self.state.upgrade()) else {
            return false;
        };
        let active = lock(&state).observers.iter().any(|(oid, _)| *oid == id);
        active
    }

    fn remove(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(state) = self.state.upgrade() {
            lock(&state).observers.retain(|(oid, _)| *oid != id);
            log::debug!("removed direction observer #{id}");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}
