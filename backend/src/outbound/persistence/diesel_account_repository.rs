//! PostgreSQL-backed `AccountRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountId, NewAccount, Username};

use super::diesel_basic_error_mapping::{
    constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Diesel implementation of [`AccountRepository`].
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    map_basic_pool_error(error, AccountRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AccountRepositoryError {
    map_basic_diesel_error(
        error,
        AccountRepositoryError::query,
        AccountRepositoryError::connection,
    )
}

pub(crate) fn row_to_account(row: AccountRow) -> Result<Account, AccountRepositoryError> {
    let id = AccountId::new(row.id)
        .map_err(|err| AccountRepositoryError::query(format!("stored account id: {err}")))?;
    let username = Username::new(row.username)
        .map_err(|err| AccountRepositoryError::query(format!("stored username: {err}")))?;
    Ok(Account::new(id, NewAccount::new(username, row.password)))
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn save(&self, account: NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(accounts::table)
            .values(NewAccountRow {
                username: account.username.as_ref(),
                password: &account.password,
            })
            .returning(AccountRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| match constraint_violation(&err) {
                Some(DatabaseErrorKind::UniqueViolation) => {
                    AccountRepositoryError::duplicate_username(account.username.as_ref())
                }
                _ => map_diesel_error(err),
            })?;
        row_to_account(row)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        accounts::table
            .filter(accounts::username.eq(username.as_ref()))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_account)
            .transpose()
    }
}
