//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{MockBookmarksCommand, MockBookmarksQuery};
use crate::domain::{Account, AccountId, Bookmark, BookmarkId, NewAccount, NewBookmark, Username};
use crate::inbound::http::state::HttpState;

/// An account with the given id and username.
pub fn account(id: i64, username: &str) -> Account {
    Account::new(
        AccountId::new(id).expect("valid account id"),
        NewAccount::new(Username::new(username).expect("valid username"), "password"),
    )
}

/// A stored bookmark owned by `owner`.
pub fn bookmark(owner: &Account, id: i64, uri: &str) -> Bookmark {
    let draft = NewBookmark::new(owner.clone(), uri, "A description").expect("valid draft");
    Bookmark::new(BookmarkId::new(id).expect("valid bookmark id"), draft)
}

/// HTTP state over the given mocks.
pub fn state_with(
    command: MockBookmarksCommand,
    query: MockBookmarksQuery,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(command), Arc::new(query)))
}
