//! Port for account persistence.

use async_trait::async_trait;

use crate::domain::{Account, NewAccount, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}",
        /// Another account already owns the username.
        DuplicateUsername { username: String } =>
            "username '{username}' is already taken",
    }
}

/// Account store.
///
/// Usernames are unique; `save` assigns the [`crate::domain::AccountId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account and return it with its assigned id.
    async fn save(&self, account: NewAccount) -> Result<Account, AccountRepositoryError>;

    /// Look an account up by its unique username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountRepositoryError>;
}
