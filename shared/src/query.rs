//! Keyed request cache with in-flight deduplication and explicit invalidation.
//!
//! The store never performs I/O. A caller asks for a [`FetchTicket`]; if it
//! gets one it issues the request and hands the outcome back through
//! [`QueryStore::settle`]. Everyone else reads [`QueryStore::snapshot`].

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use tracing::{debug, warn};

use crate::{
    error::RequestError,
    loadable::{Loadable, MutationStatus},
};

/// Permission to run one request for `key`.
///
/// Only the most recently issued ticket for a key may settle it; tickets made
/// obsolete by [`QueryStore::invalidate`] are ignored.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket<K> {
    key: K,
    id: u64,
}

impl<K> FetchTicket<K> {
    /// Key this ticket fetches.
    pub fn key(&self) -> &K {
        &self.key
    }
}

#[derive(Debug)]
struct Entry<V> {
    data: Option<V>,
    error: Option<String>,
    stale: bool,
    in_flight: Option<u64>,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            stale: false,
            in_flight: None,
        }
    }
}

impl<V> Entry<V> {
    fn needs_fetch(&self) -> bool {
        self.in_flight.is_none() && (self.stale || (self.data.is_none() && self.error.is_none()))
    }
}

/// Cached query results keyed by logical query identity.
#[derive(Debug)]
pub struct QueryStore<K, V> {
    entries: HashMap<K, Entry<V>>,
    next_ticket: u64,
}

impl<K, V> Default for QueryStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_ticket: 0,
        }
    }
}

impl<K, V> QueryStore<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the right to fetch `key`.
    ///
    /// Returns `None` when a fetch is already in flight or the cached entry
    /// is fresh. A failed entry stays failed until invalidated.
    pub fn acquire(&mut self, key: &K) -> Option<FetchTicket<K>> {
        let entry = self.entries.entry(key.clone()).or_default();
        if !entry.needs_fetch() {
            return None;
        }

        self.next_ticket += 1;
        let id = self.next_ticket;
        entry.in_flight = Some(id);
        debug!(?key, ticket = id, "query fetch acquired");
        Some(FetchTicket {
            key: key.clone(),
            id,
        })
    }

    /// [`acquire`](Self::acquire) driven by an optional selection. Without a
    /// key nothing is claimed and no entry is created.
    pub fn acquire_selected(&mut self, key: Option<&K>) -> Option<FetchTicket<K>> {
        key.and_then(|key| self.acquire(key))
    }

    /// Fold the outcome of a mutation that changes the query at `key`.
    ///
    /// Success invalidates `key` so its next read refetches; failure leaves
    /// the cached entry untouched. Returns the mutation's settled status.
    pub fn apply_mutation<T, E>(&mut self, key: &K, result: &Result<T, E>) -> MutationStatus {
        if result.is_ok() {
            self.invalidate(key);
        }
        MutationStatus::settled(result)
    }

    /// Record the outcome of a fetch. Returns `false` if the ticket was
    /// superseded and the outcome dropped.
    pub fn settle(&mut self, ticket: FetchTicket<K>, result: Result<V, RequestError>) -> bool {
        let FetchTicket {
            key,
            id,
        } = ticket;
        let Some(entry) = self.entries.get_mut(&key) else {
            warn!(?key, ticket = id, "settle for unknown query key");
            return false;
        };
        if entry.in_flight != Some(id) {
            warn!(?key, ticket = id, "dropping superseded query result");
            return false;
        }

        entry.in_flight = None;
        entry.stale = false;
        match result {
            Ok(value) => {
                entry.data = Some(value);
                entry.error = None;
                debug!(?key, ticket = id, "query settled");
            },
            Err(err) => {
                debug!(?key, ticket = id, detail = err.detail(), "query failed");
                entry.error = Some(err.to_string());
            },
        }
        true
    }

    /// Mark `key` stale so the next [`acquire`](Self::acquire) refetches.
    ///
    /// An in-flight fetch for the key is superseded. Cached data stays
    /// readable until the refetch settles.
    pub fn invalidate(&mut self, key: &K) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stale = true;
            entry.in_flight = None;
            debug!(?key, "query invalidated");
        }
    }

    /// Current view of `key`.
    ///
    /// A failure outranks older data, and an unknown key reads as loading
    /// because a fetch is about to be acquired for it.
    pub fn snapshot(&self, key: &K) -> Loadable<V> {
        match self.entries.get(key) {
            Some(Entry {
                error: Some(message),
                ..
            }) => Loadable::Failed(message.clone()),
            Some(Entry {
                data: Some(value),
                ..
            }) => Loadable::Ready(value.clone()),
            _ => Loadable::Loading,
        }
    }

    #[cfg(test)]
    fn is_fetching(&self, key: &K) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.in_flight.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;

    fn list_failure() -> RequestError {
        RequestError::new(Operation::ListArticles, "HTTP error: 500")
    }

    #[test]
    fn unknown_key_reads_as_loading() {
        let store: QueryStore<(), Vec<u32>> = QueryStore::new();
        assert_eq!(store.snapshot(&()), Loadable::Loading);
        assert!(!store.is_fetching(&()));
    }

    #[test]
    fn concurrent_acquire_is_deduplicated() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let first = store.acquire(&());
        let second = store.acquire(&());

        assert!(first.is_some());
        assert!(second.is_none());
        assert!(store.is_fetching(&()));
        assert_eq!(store.snapshot(&()), Loadable::Loading);
    }

    #[test]
    fn settled_data_is_served_without_refetch() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let ticket = store.acquire(&()).unwrap();

        assert!(store.settle(ticket, Ok(vec![3, 1, 2])));
        assert_eq!(store.snapshot(&()), Loadable::Ready(vec![3, 1, 2]));
        assert!(store.acquire(&()).is_none());
    }

    #[test]
    fn empty_result_is_ready_not_loading() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let ticket = store.acquire(&()).unwrap();
        store.settle(ticket, Ok(Vec::new()));

        assert_eq!(store.snapshot(&()), Loadable::Ready(Vec::new()));
    }

    #[test]
    fn failure_is_sticky_until_invalidated() {
        let mut store: QueryStore<String, u32> = QueryStore::new();
        let key = "missing".to_string();
        let ticket = store.acquire(&key).unwrap();
        store.settle(ticket, Err(RequestError::new(Operation::GetArticle, "HTTP error: 404")));

        assert_eq!(store.snapshot(&key), Loadable::Failed("Failed to fetch blog".to_string()));
        assert!(store.acquire(&key).is_none());

        store.invalidate(&key);
        assert!(store.acquire(&key).is_some());
    }

    #[test]
    fn keys_are_independent() {
        let mut store: QueryStore<String, u32> = QueryStore::new();
        let a = store.acquire(&"a".to_string()).unwrap();
        let b = store.acquire(&"b".to_string()).unwrap();
        store.settle(a, Ok(1));

        assert_eq!(store.snapshot(&"a".to_string()), Loadable::Ready(1));
        assert_eq!(store.snapshot(&"b".to_string()), Loadable::Loading);
        assert_eq!(b.key(), "b");
    }

    #[test]
    fn invalidation_keeps_old_data_until_refetch_lands() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let ticket = store.acquire(&()).unwrap();
        store.settle(ticket, Ok(vec![1]));

        store.invalidate(&());
        assert_eq!(store.snapshot(&()), Loadable::Ready(vec![1]));

        let refetch = store.acquire(&()).unwrap();
        assert!(store.settle(refetch, Ok(vec![1, 2])));
        assert_eq!(store.snapshot(&()), Loadable::Ready(vec![1, 2]));
    }

    #[test]
    fn invalidation_supersedes_in_flight_fetch() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let stale_ticket = store.acquire(&()).unwrap();

        store.invalidate(&());
        let fresh_ticket = store.acquire(&()).unwrap();

        assert!(!store.settle(stale_ticket, Ok(vec![1])));
        assert_eq!(store.snapshot(&()), Loadable::Loading);
        assert!(store.settle(fresh_ticket, Ok(vec![1, 2])));
        assert_eq!(store.snapshot(&()), Loadable::Ready(vec![1, 2]));
    }

    #[test]
    fn error_outranks_previous_data_and_clears_on_success() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let ticket = store.acquire(&()).unwrap();
        store.settle(ticket, Ok(vec![1]));

        store.invalidate(&());
        let ticket = store.acquire(&()).unwrap();
        store.settle(ticket, Err(list_failure()));
        assert_eq!(store.snapshot(&()), Loadable::Failed("Failed to fetch blogs".to_string()));

        store.invalidate(&());
        let ticket = store.acquire(&()).unwrap();
        store.settle(ticket, Ok(vec![1, 2]));
        assert_eq!(store.snapshot(&()), Loadable::Ready(vec![1, 2]));
    }

    #[test]
    fn no_selection_claims_nothing() {
        let mut store: QueryStore<String, u32> = QueryStore::new();

        assert!(store.acquire_selected(None).is_none());
        assert!(store.entries.is_empty());

        let key = "4".to_string();
        assert!(store.acquire_selected(Some(&key)).is_some());
        assert!(store.is_fetching(&key));
    }

    #[test]
    fn successful_mutation_invalidates_the_list() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let ticket = store.acquire(&()).unwrap();
        store.settle(ticket, Ok(vec![1]));

        let created: Result<u32, RequestError> = Ok(2);
        let status = store.apply_mutation(&(), &created);

        assert!(status.is_success());
        // old list stays visible while the refetch runs
        assert_eq!(store.snapshot(&()), Loadable::Ready(vec![1]));
        let ticket = store.acquire(&()).expect("stale list refetches");
        store.settle(ticket, Ok(vec![1, 2]));
        assert_eq!(store.snapshot(&()), Loadable::Ready(vec![1, 2]));
    }

    #[test]
    fn failed_mutation_leaves_the_list_fresh() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let ticket = store.acquire(&()).unwrap();
        store.settle(ticket, Ok(vec![1]));

        let created: Result<u32, RequestError> =
            Err(RequestError::new(Operation::CreateArticle, "HTTP error: 500"));
        let status = store.apply_mutation(&(), &created);

        assert!(status.is_error());
        assert!(store.acquire(&()).is_none());
        assert_eq!(store.snapshot(&()), Loadable::Ready(vec![1]));
    }

    #[test]
    fn mutation_supersedes_an_in_flight_list_fetch() {
        let mut store: QueryStore<(), Vec<u32>> = QueryStore::new();
        let early = store.acquire(&()).unwrap();

        let created: Result<(), RequestError> = Ok(());
        store.apply_mutation(&(), &created);

        assert!(!store.settle(early, Ok(vec![9])));
        assert!(store.acquire(&()).is_some());
    }

    #[test]
    fn invalidating_unknown_key_is_a_no_op() {
        let mut store: QueryStore<(), u32> = QueryStore::new();
        store.invalidate(&());
        assert!(!store.is_fetching(&()));
        assert!(store.acquire(&()).is_some());
    }

    #[test]
    fn settle_emits_tracing_events_under_a_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut store: QueryStore<(), u32> = QueryStore::new();
            let ticket = store.acquire(&()).unwrap();
            store.invalidate(&());
            assert!(!store.settle(ticket, Ok(1)));
        });
    }
}
