//! Bookmarks owned by accounts.

use std::fmt;
use std::str::FromStr;

use crate::domain::Account;

/// Validation errors for bookmark input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookmarkValidationError {
    #[error("bookmark uri must not be empty")]
    EmptyUri,
    #[error("bookmark id must be a positive integer, got '{value}'")]
    InvalidId { value: String },
}

/// Store-assigned bookmark identifier, immutable once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookmarkId(i64);

impl BookmarkId {
    /// Wrap a raw store identifier.
    pub fn new(value: i64) -> Result<Self, BookmarkValidationError> {
        if value <= 0 {
            return Err(BookmarkValidationError::InvalidId {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkId {
    type Err = BookmarkValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i64>()
            .map_err(|_| BookmarkValidationError::InvalidId {
                value: s.to_owned(),
            })?;
        Self::new(value)
    }
}

/// Bookmark that has not been saved yet, so it has no id.
///
/// ## Invariants
/// - `account` is an existing, persisted account;
/// - `uri` is non-empty once trimmed.
///
/// # Examples
/// ```
/// use bookmarks::domain::{Account, AccountId, NewAccount, NewBookmark, Username};
///
/// let owner = Account::new(
///     AccountId::new(1).expect("valid id"),
///     NewAccount::new(Username::new("jlong").expect("valid name"), "password"),
/// );
/// let draft = NewBookmark::new(owner, "http://x/1", "d").expect("valid draft");
/// assert_eq!(draft.uri(), "http://x/1");
/// assert!(NewBookmark::new(draft.account().clone(), "  ", "d").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    account: Account,
    uri: String,
    description: String,
}

impl NewBookmark {
    pub fn new(
        account: Account,
        uri: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, BookmarkValidationError> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(BookmarkValidationError::EmptyUri);
        }
        Ok(Self {
            account,
            uri,
            description: description.into(),
        })
    }

    #[must_use]
    pub fn account(&self) -> &Account {
        &self.account
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Persisted bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    id: BookmarkId,
    account: Account,
    uri: String,
    description: String,
}

impl Bookmark {
    /// Combine a store-assigned id with a saved draft.
    #[must_use]
    pub fn new(id: BookmarkId, draft: NewBookmark) -> Self {
        let NewBookmark {
            account,
            uri,
            description,
        } = draft;
        Self {
            id,
            account,
            uri,
            description,
        }
    }

    #[must_use]
    pub fn id(&self) -> BookmarkId {
        self.id
    }

    /// Owning account.
    #[must_use]
    pub fn account(&self) -> &Account {
        &self.account
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
