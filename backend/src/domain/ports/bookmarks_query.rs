//! Driving port for bookmark reads.

use async_trait::async_trait;

use crate::domain::{Bookmark, BookmarkId, Error, Username};

/// Driving port consumed by inbound adapters to read bookmarks.
///
/// Both reads check that the account exists before touching bookmark data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarksQuery: Send + Sync {
    /// Fetch one bookmark owned by `username`.
    async fn bookmark(&self, username: &Username, id: BookmarkId) -> Result<Bookmark, Error>;

    /// Succeeds when an account named `username` exists.
    async fn ensure_user(&self, username: &Username) -> Result<(), Error>;

    /// Every bookmark owned by `username`.
    async fn bookmarks(&self, username: &Username) -> Result<Vec<Bookmark>, Error>;
}
