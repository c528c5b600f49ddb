//! PostgreSQL-backed `BookmarkRepository`.
//!
//! Reads join `accounts` so every bookmark comes back with its owner.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookmarkRepository, BookmarkRepositoryError};
use crate::domain::{Bookmark, BookmarkId, NewBookmark, Username};

use super::diesel_account_repository::row_to_account;
use super::diesel_basic_error_mapping::{
    constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{AccountRow, BookmarkRow, NewBookmarkRow};
use super::pool::{DbPool, PoolError};
use super::schema::{accounts, bookmarks};

/// Diesel implementation of [`BookmarkRepository`].
#[derive(Clone)]
pub struct DieselBookmarkRepository {
    pool: DbPool,
}

impl DieselBookmarkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookmarkRepositoryError {
    map_basic_pool_error(error, BookmarkRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BookmarkRepositoryError {
    map_basic_diesel_error(
        error,
        BookmarkRepositoryError::query,
        BookmarkRepositoryError::connection,
    )
}

fn stored_id(value: i64) -> Result<BookmarkId, BookmarkRepositoryError> {
    BookmarkId::new(value)
        .map_err(|err| BookmarkRepositoryError::query(format!("stored bookmark id: {err}")))
}

fn row_to_bookmark(
    (row, owner): (BookmarkRow, AccountRow),
) -> Result<Bookmark, BookmarkRepositoryError> {
    let id = stored_id(row.id)?;
    if row.account_id != owner.id {
        return Err(BookmarkRepositoryError::query(format!(
            "bookmark {} joined account {} instead of owner {}",
            row.id, owner.id, row.account_id
        )));
    }
    let account =
        row_to_account(owner).map_err(|err| BookmarkRepositoryError::query(err.to_string()))?;
    let draft = NewBookmark::new(account, row.uri, row.description)
        .map_err(|err| BookmarkRepositoryError::query(format!("stored bookmark: {err}")))?;
    Ok(Bookmark::new(id, draft))
}

#[async_trait]
impl BookmarkRepository for DieselBookmarkRepository {
    async fn save(&self, bookmark: NewBookmark) -> Result<Bookmark, BookmarkRepositoryError> {
        let owner = bookmark.account().id().value();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(bookmarks::table)
            .values(NewBookmarkRow {
                account_id: owner,
                uri: bookmark.uri(),
                description: bookmark.description(),
            })
            .returning(BookmarkRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| match constraint_violation(&err) {
                Some(DatabaseErrorKind::ForeignKeyViolation) => {
                    BookmarkRepositoryError::unknown_account(owner)
                }
                _ => map_diesel_error(err),
            })?;
        Ok(Bookmark::new(stored_id(row.id)?, bookmark))
    }

    async fn find_by_id(
        &self,
        id: BookmarkId,
    ) -> Result<Option<Bookmark>, BookmarkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        bookmarks::table
            .inner_join(accounts::table)
            .filter(bookmarks::id.eq(id.value()))
            .select((BookmarkRow::as_select(), AccountRow::as_select()))
            .first::<(BookmarkRow, AccountRow)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_bookmark)
            .transpose()
    }

    async fn find_by_account_username(
        &self,
        username: &Username,
    ) -> Result<Vec<Bookmark>, BookmarkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        bookmarks::table
            .inner_join(accounts::table)
            .filter(accounts::username.eq(username.as_ref()))
            .order(bookmarks::id.asc())
            .select((BookmarkRow::as_select(), AccountRow::as_select()))
            .load::<(BookmarkRow, AccountRow)>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_iter()
            .map(row_to_bookmark)
            .collect()
    }
}
