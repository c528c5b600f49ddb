//! Port for bookmark persistence.

use async_trait::async_trait;

use crate::domain::{Bookmark, BookmarkId, NewBookmark, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by bookmark repository adapters.
    pub enum BookmarkRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "bookmark repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "bookmark repository query failed: {message}",
        /// The owning account is not present in the store.
        UnknownAccount { account_id: i64 } =>
            "account {account_id} does not exist",
    }
}

/// Bookmark store.
///
/// `save` assigns the [`BookmarkId`]. Every call creates a new row; there is
/// no de-duplication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Persist a new bookmark and return it with its assigned id.
    async fn save(&self, bookmark: NewBookmark) -> Result<Bookmark, BookmarkRepositoryError>;

    /// Fetch a bookmark by id.
    async fn find_by_id(&self, id: BookmarkId)
    -> Result<Option<Bookmark>, BookmarkRepositoryError>;

    /// All bookmarks whose owner has `username`, in store iteration order.
    async fn find_by_account_username(
        &self,
        username: &Username,
    ) -> Result<Vec<Bookmark>, BookmarkRepositoryError>;
}
