//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`BookmarksCommand`, `BookmarksQuery`) are consumed by inbound ones.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod bookmark_repository;
mod bookmarks_command;
mod bookmarks_query;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
#[cfg(test)]
pub use bookmark_repository::MockBookmarkRepository;
pub use bookmark_repository::{BookmarkRepository, BookmarkRepositoryError};
#[cfg(test)]
pub use bookmarks_command::MockBookmarksCommand;
pub use bookmarks_command::{AddBookmarkRequest, BookmarksCommand};
#[cfg(test)]
pub use bookmarks_query::MockBookmarksQuery;
pub use bookmarks_query::BookmarksQuery;
