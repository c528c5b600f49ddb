//! Account identity.

use std::fmt;

/// Maximum username length in characters.
pub const USERNAME_MAX: usize = 64;

/// Validation errors for account primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("username must not have surrounding whitespace")]
    PaddedUsername,
    #[error("username must not contain '/'")]
    UsernameContainsSlash,
    #[error("username must be at most {max} characters")]
    UsernameTooLong { max: usize },
    #[error("account id must be positive, got {value}")]
    NonPositiveId { value: i64 },
}

/// Store-assigned account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(i64);

impl AccountId {
    /// Wrap a raw store identifier.
    pub fn new(value: i64) -> Result<Self, AccountValidationError> {
        if value <= 0 {
            return Err(AccountValidationError::NonPositiveId { value });
        }
        Ok(Self(value))
    }

    /// Raw identifier for persistence adapters.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique account name. Also the path segment scoping bookmark routes.
///
/// ## Invariants
/// - non-empty, no leading or trailing whitespace;
/// - contains no `/`, so it always fits in a single path segment;
/// - at most [`USERNAME_MAX`] characters.
///
/// # Examples
/// ```
/// use bookmarks::domain::Username;
///
/// let username = Username::new("jlong").expect("valid username");
/// assert_eq!(username.as_ref(), "jlong");
/// assert!(Username::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AccountValidationError::EmptyUsername);
        }
        if value.trim() != value {
            return Err(AccountValidationError::PaddedUsername);
        }
        if value.contains('/') {
            return Err(AccountValidationError::UsernameContainsSlash);
        }
        if value.chars().count() > USERNAME_MAX {
            return Err(AccountValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account awaiting its first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: Username,
    pub password: String,
}

impl NewAccount {
    pub fn new(username: Username, password: impl Into<String>) -> Self {
        Self {
            username,
            password: password.into(),
        }
    }
}

/// Persisted account.
///
/// The password is opaque to this service and never leaves the process in a
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    username: Username,
    password: String,
}

impl Account {
    /// Combine a store-assigned id with the saved fields.
    #[must_use]
    pub fn new(id: AccountId, account: NewAccount) -> Self {
        let NewAccount { username, password } = account;
        Self {
            id,
            username,
            password,
        }
    }

    #[must_use]
    pub fn id(&self) -> AccountId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}
