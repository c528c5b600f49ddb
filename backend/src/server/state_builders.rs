//! Builders for the store ports and the HTTP state layered on them.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use bookmarks::domain::BookmarkService;
use bookmarks::domain::ports::{AccountRepository, BookmarkRepository};
use bookmarks::inbound::http::state::HttpState;
use bookmarks::outbound::memory::InMemoryStore;
use bookmarks::outbound::persistence::{DbPool, DieselAccountRepository, DieselBookmarkRepository};

/// The pair of store ports shared by seeding and request handling.
#[derive(Clone)]
pub struct Stores {
    pub accounts: Arc<dyn AccountRepository>,
    pub bookmarks: Arc<dyn BookmarkRepository>,
}

impl Stores {
    /// Process-local tables.
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            accounts: Arc::new(store.accounts()),
            bookmarks: Arc::new(store.bookmarks()),
        }
    }

    /// PostgreSQL repositories sharing `pool`.
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            accounts: Arc::new(DieselAccountRepository::new(pool.clone())),
            bookmarks: Arc::new(DieselBookmarkRepository::new(pool)),
        }
    }

    /// PostgreSQL when a pool is available, in-memory otherwise.
    pub fn from_pool(pool: Option<DbPool>) -> Self {
        match pool {
            Some(pool) => {
                info!(store = "postgres", "bookmark store selected");
                Self::postgres(pool)
            }
            None => {
                info!(store = "memory", "bookmark store selected");
                Self::in_memory()
            }
        }
    }
}

/// Wire the bookmark service behind both driving ports.
pub fn build_http_state(stores: &Stores) -> web::Data<HttpState> {
    let service = Arc::new(BookmarkService::new(
        Arc::clone(&stores.accounts),
        Arc::clone(&stores.bookmarks),
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}
