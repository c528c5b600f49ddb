//! Internal Diesel row structs. Never exposed to the domain.

use diesel::prelude::*;

use super::schema::{accounts, bookmarks};

/// Row read from `accounts`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Row read from `bookmarks`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookmarks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookmarkRow {
    pub id: i64,
    pub account_id: i64,
    pub uri: String,
    pub description: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookmarks)]
pub(crate) struct NewBookmarkRow<'a> {
    pub account_id: i64,
    pub uri: &'a str,
    pub description: &'a str,
}
