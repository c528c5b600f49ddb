//! Driving port for bookmark mutations.

use async_trait::async_trait;

use crate::domain::{Bookmark, Error, Username};

/// Request to create a bookmark for an existing account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookmarkRequest {
    /// Owner of the new bookmark.
    pub username: Username,
    pub uri: String,
    pub description: String,
}

/// Driving port consumed by inbound adapters to create bookmarks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarksCommand: Send + Sync {
    /// Create a bookmark owned by `request.username`.
    ///
    /// # Errors
    ///
    /// - [`crate::domain::ErrorCode::NotFound`] when the account does not exist;
    /// - [`crate::domain::ErrorCode::InvalidRequest`] when the uri is blank;
    /// - store failures otherwise.
    async fn add_bookmark(&self, request: AddBookmarkRequest) -> Result<Bookmark, Error>;
}
