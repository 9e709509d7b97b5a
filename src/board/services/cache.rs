//! Read-through query cache holding the authoritative task collections.
//!
//! Each [`TaskFilter`] owns one entry. Reads fetch through the gateway when
//! the entry is missing or has been invalidated; subscribers hear about
//! every applied fetch result. Fetches are tagged with a per-entry
//! generation and a result older than the one already applied is dropped,
//! so a slow refresh never overwrites a newer collection.

use crate::board::ports::{GatewayError, TaskGateway};
use crate::task::domain::{Task, TaskFilter};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// State of one cached query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    /// The first fetch has not completed.
    Loading,
    /// The last applied fetch succeeded.
    Ready(Arc<[Task]>),
    /// The last applied fetch failed.
    Failed(GatewayError),
}

/// Handle returned by [`QueryCache::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&QueryState) + Send + Sync>;

#[derive(Debug)]
struct CacheEntry {
    state: QueryState,
    stale: bool,
    issued: u64,
    applied: u64,
}

impl Default for CacheEntry {
    fn default() -> Self {
        Self {
            state: QueryState::Loading,
            stale: true,
            issued: 0,
            applied: 0,
        }
    }
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<TaskFilter, CacheEntry>,
    listeners: HashMap<TaskFilter, Vec<(SubscriptionId, Listener)>>,
    next_subscription: u64,
}

/// Query cache owning task collections keyed by filter.
///
/// The board reads through the cache and never edits a collection itself;
/// after a mutation it invalidates the key and reads again.
pub struct QueryCache<G>
where
    G: TaskGateway,
{
    gateway: Arc<G>,
    state: Mutex<CacheState>,
}

impl<G> QueryCache<G>
where
    G: TaskGateway,
{
    /// Creates an empty cache in front of `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Returns the gateway the cache reads through.
    #[must_use]
    pub const fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached state for `filter` without fetching.
    ///
    /// Returns `None` when the filter has never been read.
    #[must_use]
    pub fn peek(&self, filter: TaskFilter) -> Option<QueryState> {
        self.lock()
            .entries
            .get(&filter)
            .map(|entry| entry.state.clone())
    }

    /// Returns the state for `filter`, fetching when missing, stale, or failed.
    ///
    /// While a fetch is pending the previous state stays readable through
    /// [`QueryCache::peek`], and concurrent reads return it without issuing
    /// a second request.
    pub async fn get(&self, filter: TaskFilter) -> QueryState {
        let generation = {
            let mut state = self.lock();
            let entry = state.entries.entry(filter).or_default();
            let failed = matches!(entry.state, QueryState::Failed(_));
            if !entry.stale && !failed {
                return entry.state.clone();
            }
            entry.stale = false;
            entry.issued += 1;
            entry.issued
        };

        debug!(%filter, generation, "fetching task collection");
        let fetched = match self.gateway.fetch_tasks(filter).await {
            Ok(tasks) => QueryState::Ready(tasks.into()),
            Err(err) => QueryState::Failed(err),
        };

        let (current, listeners) = {
            let mut state = self.lock();
            let entry = state.entries.entry(filter).or_default();
            if generation <= entry.applied {
                debug!(%filter, generation, applied = entry.applied, "discarding stale fetch");
                return entry.state.clone();
            }
            entry.applied = generation;
            entry.state = fetched;
            let current = entry.state.clone();
            let listeners: Vec<Listener> = state
                .listeners
                .get(&filter)
                .map(|subscribed| {
                    subscribed
                        .iter()
                        .map(|(_, listener)| Arc::clone(listener))
                        .collect()
                })
                .unwrap_or_default();
            (current, listeners)
        };

        for listener in listeners {
            listener(&current);
        }
        current
    }

    /// Marks the entry for `filter` stale so the next read refetches.
    pub fn invalidate(&self, filter: TaskFilter) {
        if let Some(entry) = self.lock().entries.get_mut(&filter) {
            entry.stale = true;
            debug!(%filter, "task collection invalidated");
        }
    }

    /// Registers `listener` for every applied fetch of `filter`.
    ///
    /// Listeners run after the cache lock is released, so they may read the
    /// cache again.
    pub fn subscribe(
        &self,
        filter: TaskFilter,
        listener: impl Fn(&QueryState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut state = self.lock();
        state.next_subscription += 1;
        let id = SubscriptionId(state.next_subscription);
        state
            .listeners
            .entry(filter)
            .or_default()
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.lock();
        let mut removed = false;
        for subscribed in state.listeners.values_mut() {
            let before = subscribed.len();
            subscribed.retain(|(existing, _)| *existing != id);
            removed |= subscribed.len() != before;
        }
        removed
    }
}
