//! In-process store adapters.
//!
//! Used when no database is configured and by HTTP tests. Both repositories
//! share one set of tables so bookmarks can resolve their owning account.
//! Identifiers are sequential per table and start at 1.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, BookmarkRepository, BookmarkRepositoryError,
};
use crate::domain::{
    Account, AccountId, Bookmark, BookmarkId, NewAccount, NewBookmark, Username,
};

#[derive(Debug, Default)]
struct Tables {
    accounts: Vec<Account>,
    bookmarks: Vec<Bookmark>,
}

impl Tables {
    fn next_id(len: usize) -> Option<i64> {
        i64::try_from(len).ok()?.checked_add(1)
    }
}

/// Shared in-memory tables.
///
/// # Examples
/// ```
/// use bookmarks::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let _accounts = store.accounts();
/// let _bookmarks = store.bookmarks();
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Account repository backed by these tables.
    #[must_use]
    pub fn accounts(&self) -> InMemoryAccountRepository {
        InMemoryAccountRepository {
            store: self.clone(),
        }
    }

    /// Bookmark repository backed by these tables.
    #[must_use]
    pub fn bookmarks(&self) -> InMemoryBookmarkRepository {
        InMemoryBookmarkRepository {
            store: self.clone(),
        }
    }
}

/// [`AccountRepository`] over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryAccountRepository {
    store: InMemoryStore,
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut tables = self.store.tables.write().await;
        if tables
            .accounts
            .iter()
            .any(|existing| existing.username() == &account.username)
        {
            return Err(AccountRepositoryError::duplicate_username(
                account.username.as_ref(),
            ));
        }
        let id = Tables::next_id(tables.accounts.len())
            .ok_or_else(|| AccountRepositoryError::query("account id space exhausted"))?;
        let id = AccountId::new(id).map_err(|err| AccountRepositoryError::query(err.to_string()))?;
        let saved = Account::new(id, account);
        tables.accounts.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .accounts
            .iter()
            .find(|account| account.username() == username)
            .cloned())
    }
}

/// [`BookmarkRepository`] over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryBookmarkRepository {
    store: InMemoryStore,
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn save(&self, bookmark: NewBookmark) -> Result<Bookmark, BookmarkRepositoryError> {
        let mut tables = self.store.tables.write().await;
        let owner = bookmark.account().id();
        if !tables.accounts.iter().any(|account| account.id() == owner) {
            return Err(BookmarkRepositoryError::unknown_account(owner.value()));
        }
        let id = Tables::next_id(tables.bookmarks.len())
            .ok_or_else(|| BookmarkRepositoryError::query("bookmark id space exhausted"))?;
        let id =
            BookmarkId::new(id).map_err(|err| BookmarkRepositoryError::query(err.to_string()))?;
        let saved = Bookmark::new(id, bookmark);
        tables.bookmarks.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(
        &self,
        id: BookmarkId,
    ) -> Result<Option<Bookmark>, BookmarkRepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .bookmarks
            .iter()
            .find(|bookmark| bookmark.id() == id)
            .cloned())
    }

    async fn find_by_account_username(
        &self,
        username: &Username,
    ) -> Result<Vec<Bookmark>, BookmarkRepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .bookmarks
            .iter()
            .filter(|bookmark| bookmark.account().username() == username)
            .cloned()
            .collect())
    }
}
