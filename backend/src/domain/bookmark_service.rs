//! Bookmark use-cases over the account and bookmark stores.
//!
//! Every operation resolves the owning account first. An unknown username is
//! an explicit [`BookmarkServiceError::UserNotFound`] that callers check
//! before any bookmark data is read or written.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, AddBookmarkRequest, BookmarkRepository,
    BookmarkRepositoryError, BookmarksCommand, BookmarksQuery,
};
use crate::domain::{
    Account, Bookmark, BookmarkId, BookmarkValidationError, Error, NewBookmark, Username,
};

/// Failures raised by [`BookmarkService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookmarkServiceError {
    /// No account has this username.
    #[error("could not find user '{username}'.")]
    UserNotFound { username: String },
    /// No bookmark with this id belongs to the user.
    #[error("could not find bookmark '{id}'.")]
    BookmarkNotFound { id: String },
    /// Bookmark input failed validation.
    #[error(transparent)]
    InvalidBookmark(#[from] BookmarkValidationError),
    #[error(transparent)]
    Accounts(#[from] AccountRepositoryError),
    #[error(transparent)]
    Bookmarks(#[from] BookmarkRepositoryError),
}

impl BookmarkServiceError {
    /// Unknown user, keyed by the raw identifier the client sent.
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    /// Unknown bookmark, keyed by the raw identifier the client sent.
    pub fn bookmark_not_found(id: impl Into<String>) -> Self {
        Self::BookmarkNotFound { id: id.into() }
    }
}

impl From<BookmarkServiceError> for Error {
    fn from(value: BookmarkServiceError) -> Self {
        match value {
            BookmarkServiceError::UserNotFound { .. }
            | BookmarkServiceError::BookmarkNotFound { .. } => Error::not_found(value.to_string()),
            BookmarkServiceError::InvalidBookmark(err) => Error::invalid_request(err.to_string()),
            BookmarkServiceError::Accounts(AccountRepositoryError::Connection { message })
            | BookmarkServiceError::Bookmarks(BookmarkRepositoryError::Connection { message }) => {
                Error::service_unavailable(format!("bookmark store unavailable: {message}"))
            }
            BookmarkServiceError::Accounts(AccountRepositoryError::DuplicateUsername {
                username,
            }) => Error::conflict(format!("username '{username}' is already taken")),
            BookmarkServiceError::Accounts(err) => {
                Error::internal(format!("account store error: {err}"))
            }
            BookmarkServiceError::Bookmarks(err) => {
                Error::internal(format!("bookmark store error: {err}"))
            }
        }
    }
}

/// Bookmark service implementing the driving ports.
pub struct BookmarkService<A: ?Sized, B: ?Sized> {
    accounts: Arc<A>,
    bookmarks: Arc<B>,
}

impl<A: ?Sized, B: ?Sized> Clone for BookmarkService<A, B> {
    fn clone(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
            bookmarks: Arc::clone(&self.bookmarks),
        }
    }
}

impl<A: ?Sized, B: ?Sized> BookmarkService<A, B> {
    /// Create a service over the given stores.
    pub fn new(accounts: Arc<A>, bookmarks: Arc<B>) -> Self {
        Self {
            accounts,
            bookmarks,
        }
    }
}

impl<A, B> BookmarkService<A, B>
where
    A: AccountRepository + ?Sized,
    B: BookmarkRepository + ?Sized,
{
    /// Resolve the account that scopes every bookmark operation.
    pub async fn require_account(
        &self,
        username: &Username,
    ) -> Result<Account, BookmarkServiceError> {
        self.accounts
            .find_by_username(username)
            .await?
            .ok_or_else(|| BookmarkServiceError::user_not_found(username.as_ref()))
    }

    /// Create a bookmark for an existing account.
    pub async fn add(&self, request: AddBookmarkRequest) -> Result<Bookmark, BookmarkServiceError> {
        let AddBookmarkRequest {
            username,
            uri,
            description,
        } = request;
        let account = self.require_account(&username).await?;
        let draft = NewBookmark::new(account, uri, description)?;
        let bookmark = self.bookmarks.save(draft).await?;
        debug!(username = %username, bookmark_id = %bookmark.id(), "bookmark saved");
        Ok(bookmark)
    }

    /// Fetch one bookmark; bookmarks owned by other users are not found.
    pub async fn find(
        &self,
        username: &Username,
        id: BookmarkId,
    ) -> Result<Bookmark, BookmarkServiceError> {
        let account = self.require_account(username).await?;
        self.bookmarks
            .find_by_id(id)
            .await?
            .filter(|bookmark| bookmark.account().id() == account.id())
            .ok_or_else(|| BookmarkServiceError::bookmark_not_found(id.to_string()))
    }

    /// List the bookmarks owned by `username`.
    pub async fn list(&self, username: &Username) -> Result<Vec<Bookmark>, BookmarkServiceError> {
        self.require_account(username).await?;
        Ok(self.bookmarks.find_by_account_username(username).await?)
    }
}

#[async_trait]
impl<A, B> BookmarksCommand for BookmarkService<A, B>
where
    A: AccountRepository + ?Sized,
    B: BookmarkRepository + ?Sized,
{
    async fn add_bookmark(&self, request: AddBookmarkRequest) -> Result<Bookmark, Error> {
        Ok(self.add(request).await?)
    }
}

#[async_trait]
impl<A, B> BookmarksQuery for BookmarkService<A, B>
where
    A: AccountRepository + ?Sized,
    B: BookmarkRepository + ?Sized,
{
    async fn bookmark(&self, username: &Username, id: BookmarkId) -> Result<Bookmark, Error> {
        Ok(self.find(username, id).await?)
    }

    async fn ensure_user(&self, username: &Username) -> Result<(), Error> {
        self.require_account(username).await?;
        Ok(())
    }

    async fn bookmarks(&self, username: &Username) -> Result<Vec<Bookmark>, Error> {
        Ok(self.list(username).await?)
    }
}

#[cfg(test)]
mod tests;
