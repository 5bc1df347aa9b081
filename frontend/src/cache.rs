//! Explicit request cache shared by the list and detail panels.
//!
//! The root component owns one [`ArticleCache`] and passes it down through
//! props. Every change to the underlying stores bumps a revision held in a
//! Yew reducer, which re-renders the tree from the root.

use std::{cell::RefCell, rc::Rc};

use inkpress_shared::{Loadable, MutationStatus, QueryStore, RequestError};
use yew::prelude::*;

use crate::{api, models::Article};

/// Monotonic counter; each increment re-renders cache consumers.
#[derive(Debug, Default, PartialEq)]
pub struct CacheRevision(u64);

impl Reducible for CacheRevision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0 + 1))
    }
}

pub struct CacheStores {
    articles: RefCell<QueryStore<(), Vec<Article>>>,
    details: RefCell<QueryStore<String, Article>>,
    notify: UseReducerDispatcher<CacheRevision>,
}

impl CacheStores {
    pub fn new(notify: UseReducerDispatcher<CacheRevision>) -> Self {
        Self {
            articles: RefCell::new(QueryStore::new()),
            details: RefCell::new(QueryStore::new()),
            notify,
        }
    }

    fn changed(&self) {
        self.notify.dispatch(());
    }
}

/// Handle to the request cache, cheap to clone into props.
///
/// Two handles compare equal when they point at the same stores at the same
/// revision, so props change exactly when cached data may have changed.
#[derive(Clone)]
pub struct ArticleCache {
    stores: Rc<CacheStores>,
    revision: u64,
}

impl PartialEq for ArticleCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stores, &other.stores) && self.revision == other.revision
    }
}

impl ArticleCache {
    pub fn new(stores: Rc<CacheStores>, revision: &CacheRevision) -> Self {
        Self {
            stores,
            revision: revision.0,
        }
    }

    /// Cached state of the "all articles" query.
    pub fn articles(&self) -> Loadable<Vec<Article>> {
        self.stores.articles.borrow().snapshot(&())
    }

    /// Cached state of the query for one article.
    pub fn article(&self, id: &str) -> Loadable<Article> {
        self.stores.details.borrow().snapshot(&id.to_string())
    }

    /// Start the list request unless it is fresh or already in flight.
    pub fn ensure_articles(&self) {
        let Some(ticket) = self.stores.articles.borrow_mut().acquire(&()) else {
            return;
        };

        let stores = self.stores.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_articles().await;
            log_failure(&result);
            if stores.articles.borrow_mut().settle(ticket, result) {
                stores.changed();
            }
        });
    }

    /// Start the request for the selected id unless it is fresh or already
    /// in flight. Without a selection nothing is requested.
    pub fn ensure_article(&self, id: Option<&str>) {
        let id = id.map(str::to_string);
        let Some(ticket) = self.stores.details.borrow_mut().acquire_selected(id.as_ref()) else {
            return;
        };

        let stores = self.stores.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_article(ticket.key()).await;
            log_failure(&result);
            if stores.details.borrow_mut().settle(ticket, result) {
                stores.changed();
            }
        });
    }

    /// Fold a finished create into the cache. A success marks the list
    /// stale, so mounted list views refetch on the next render.
    pub fn settle_create<T>(&self, result: &Result<T, RequestError>) -> MutationStatus {
        let status = self.stores.articles.borrow_mut().apply_mutation(&(), result);
        if status.is_success() {
            self.stores.changed();
        }
        status
    }
}

fn log_failure<T>(result: &Result<T, RequestError>) {
    if let Err(e) = result {
        web_sys::console::error_1(
            &format!("{} failed: {}", e.operation(), e.detail()).into(),
        );
    }
}
