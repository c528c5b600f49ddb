//! Demo data seeding.
//!
//! Creates a fixed roster of accounts with two bookmarks each. Seeding is not
//! idempotent: every run appends new rows, and stores that enforce unique
//! usernames reject a second run.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, BookmarkRepository, BookmarkRepositoryError,
};
use crate::domain::{
    AccountValidationError, BookmarkValidationError, NewAccount, NewBookmark, Username,
};

/// Usernames seeded at startup, in insertion order.
pub const DEMO_USERNAMES: [&str; 8] = [
    "jhoeller", "dsyer", "pwebb", "orgierke", "rwinch", "mfisher", "mpollack", "jlong",
];

/// Password given to every demo account.
pub const DEMO_PASSWORD: &str = "password";

/// Description shared by every demo bookmark.
pub const DEMO_DESCRIPTION: &str = "A description";

/// The two deterministic bookmark URIs seeded for `username`.
///
/// # Examples
/// ```
/// use bookmarks::domain::demo_bookmark_uris;
///
/// assert_eq!(
///     demo_bookmark_uris("jlong"),
///     ["http://bookmark.com/1/jlong", "http://bookmark.com/2/jlong"],
/// );
/// ```
#[must_use]
pub fn demo_bookmark_uris(username: &str) -> [String; 2] {
    [1, 2].map(|n| format!("http://bookmark.com/{n}/{username}"))
}

/// Rows written by one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoDataOutcome {
    pub accounts: usize,
    pub bookmarks: usize,
}

/// Errors raised while seeding. Any of them aborts startup.
#[derive(Debug, Error)]
pub enum DemoDataSeedingError {
    #[error("demo username is invalid: {0}")]
    Username(#[from] AccountValidationError),
    #[error("demo bookmark is invalid: {0}")]
    Bookmark(#[from] BookmarkValidationError),
    #[error("demo account could not be saved: {0}")]
    Accounts(#[from] AccountRepositoryError),
    #[error("demo bookmark could not be saved: {0}")]
    Bookmarks(#[from] BookmarkRepositoryError),
}

/// Writes the demo roster through the store ports.
pub struct DemoDataSeeder<A: ?Sized, B: ?Sized> {
    accounts: Arc<A>,
    bookmarks: Arc<B>,
}

impl<A: ?Sized, B: ?Sized> DemoDataSeeder<A, B> {
    pub fn new(accounts: Arc<A>, bookmarks: Arc<B>) -> Self {
        Self {
            accounts,
            bookmarks,
        }
    }
}

impl<A, B> DemoDataSeeder<A, B>
where
    A: AccountRepository + ?Sized,
    B: BookmarkRepository + ?Sized,
{
    /// Insert every demo account and its two bookmarks, stopping at the first
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`DemoDataSeedingError`] when a row is rejected by its store.
    pub async fn seed(&self) -> Result<DemoDataOutcome, DemoDataSeedingError> {
        let mut outcome = DemoDataOutcome {
            accounts: 0,
            bookmarks: 0,
        };
        for name in DEMO_USERNAMES {
            let username = Username::new(name)?;
            let account = self
                .accounts
                .save(NewAccount::new(username, DEMO_PASSWORD))
                .await?;
            outcome.accounts += 1;

            for uri in demo_bookmark_uris(name) {
                let draft = NewBookmark::new(account.clone(), uri, DEMO_DESCRIPTION)?;
                let bookmark = self.bookmarks.save(draft).await?;
                debug!(username = name, bookmark_id = %bookmark.id(), "demo bookmark seeded");
                outcome.bookmarks += 1;
            }
        }
        Ok(outcome)
    }
}
