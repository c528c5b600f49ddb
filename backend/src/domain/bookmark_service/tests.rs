//! Tests for the bookmark service.

use super::*;
use crate::domain::ports::{MockAccountRepository, MockBookmarkRepository};
use crate::domain::{AccountId, ErrorCode, NewAccount};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

#[fixture]
fn jlong() -> Account {
    account(1, "jlong")
}

fn account(id: i64, name: &str) -> Account {
    Account::new(
        AccountId::new(id).expect("valid id"),
        NewAccount::new(Username::new(name).expect("valid name"), "password"),
    )
}

fn bookmark(id: i64, owner: &Account, uri: &str) -> Bookmark {
    let draft = NewBookmark::new(owner.clone(), uri, "A description").expect("valid draft");
    Bookmark::new(BookmarkId::new(id).expect("valid id"), draft)
}

fn accounts_knowing(account: Option<Account>) -> MockAccountRepository {
    let mut accounts = MockAccountRepository::new();
    accounts
        .expect_find_by_username()
        .returning(move |_| Ok(account.clone()));
    accounts
}

fn service(
    accounts: MockAccountRepository,
    bookmarks: MockBookmarkRepository,
) -> BookmarkService<MockAccountRepository, MockBookmarkRepository> {
    BookmarkService::new(Arc::new(accounts), Arc::new(bookmarks))
}

fn username(name: &str) -> Username {
    Username::new(name).expect("valid name")
}

#[rstest]
#[tokio::test]
async fn add_saves_bookmark_for_existing_account(jlong: Account) {
    let owner = jlong.clone();
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks
        .expect_save()
        .withf(move |draft| {
            draft.account() == &owner && draft.uri() == "http://x/1" && draft.description() == "d"
        })
        .times(1)
        .returning(|draft| Ok(Bookmark::new(BookmarkId::new(5).expect("valid id"), draft)));

    let saved = service(accounts_knowing(Some(jlong.clone())), bookmarks)
        .add(AddBookmarkRequest {
            username: username("jlong"),
            uri: "http://x/1".to_owned(),
            description: "d".to_owned(),
        })
        .await
        .expect("bookmark saved");

    assert_eq!(saved.id().value(), 5);
    assert_eq!(saved.account(), &jlong);
}

#[rstest]
#[tokio::test]
async fn add_for_unknown_user_never_touches_bookmarks() {
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks.expect_save().never();

    let err = service(accounts_knowing(None), bookmarks)
        .add(AddBookmarkRequest {
            username: username("ghost"),
            uri: "http://x/1".to_owned(),
            description: "d".to_owned(),
        })
        .await
        .expect_err("unknown user");

    assert_eq!(err, BookmarkServiceError::user_not_found("ghost"));
    assert_eq!(err.to_string(), "could not find user 'ghost'.");
}

#[rstest]
#[tokio::test]
async fn add_rejects_blank_uri_after_resolving_user(jlong: Account) {
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks.expect_save().never();

    let err = service(accounts_knowing(Some(jlong)), bookmarks)
        .add(AddBookmarkRequest {
            username: username("jlong"),
            uri: "   ".to_owned(),
            description: "d".to_owned(),
        })
        .await
        .expect_err("blank uri");

    assert_eq!(
        err,
        BookmarkServiceError::InvalidBookmark(BookmarkValidationError::EmptyUri)
    );
}

#[rstest]
#[tokio::test]
async fn find_returns_owned_bookmark(jlong: Account) {
    let stored = bookmark(3, &jlong, "http://bookmark.com/1/jlong");
    let expected = stored.clone();
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks
        .expect_find_by_id()
        .with(eq(BookmarkId::new(3).expect("valid id")))
        .returning(move |_| Ok(Some(stored.clone())));

    let found = service(accounts_knowing(Some(jlong)), bookmarks)
        .find(&username("jlong"), BookmarkId::new(3).expect("valid id"))
        .await
        .expect("bookmark found");

    assert_eq!(found, expected);
}

#[rstest]
#[tokio::test]
async fn find_hides_bookmarks_owned_by_someone_else(jlong: Account) {
    let other = account(2, "dsyer");
    let stored = bookmark(3, &other, "http://bookmark.com/1/dsyer");
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored.clone())));

    let err = service(accounts_knowing(Some(jlong)), bookmarks)
        .find(&username("jlong"), BookmarkId::new(3).expect("valid id"))
        .await
        .expect_err("foreign bookmark");

    assert_eq!(err, BookmarkServiceError::bookmark_not_found("3"));
}

#[rstest]
#[tokio::test]
async fn find_reports_missing_bookmark(jlong: Account) {
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks.expect_find_by_id().returning(|_| Ok(None));

    let err = service(accounts_knowing(Some(jlong)), bookmarks)
        .find(&username("jlong"), BookmarkId::new(99).expect("valid id"))
        .await
        .expect_err("missing bookmark");

    assert_eq!(err.to_string(), "could not find bookmark '99'.");
}

#[rstest]
#[tokio::test]
async fn list_checks_the_user_before_reading_bookmarks() {
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks.expect_find_by_account_username().never();

    let err = service(accounts_knowing(None), bookmarks)
        .list(&username("ghost"))
        .await
        .expect_err("unknown user");

    assert_eq!(err, BookmarkServiceError::user_not_found("ghost"));
}

#[rstest]
#[tokio::test]
async fn list_returns_store_order(jlong: Account) {
    let stored = vec![
        bookmark(2, &jlong, "http://bookmark.com/2/jlong"),
        bookmark(1, &jlong, "http://bookmark.com/1/jlong"),
    ];
    let expected = stored.clone();
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks
        .expect_find_by_account_username()
        .with(eq(username("jlong")))
        .returning(move |_| Ok(stored.clone()));

    let listed = service(accounts_knowing(Some(jlong)), bookmarks)
        .list(&username("jlong"))
        .await
        .expect("bookmarks listed");

    assert_eq!(listed, expected);
}

#[rstest]
#[tokio::test]
async fn query_port_maps_unknown_user_to_not_found() {
    let bookmarks = MockBookmarkRepository::new();
    let err = service(accounts_knowing(None), bookmarks)
        .bookmarks(&username("ghost"))
        .await
        .expect_err("unknown user");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "could not find user 'ghost'.");
}

#[rstest]
#[case(Some(account(1, "jlong")), None)]
#[case(None, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn ensure_user_only_consults_accounts(
    #[case] known: Option<Account>,
    #[case] expected: Option<ErrorCode>,
) {
    let mut bookmarks = MockBookmarkRepository::new();
    bookmarks.expect_find_by_account_username().never();
    bookmarks.expect_find_by_id().never();

    let result = service(accounts_knowing(known), bookmarks)
        .ensure_user(&username("jlong"))
        .await;

    assert_eq!(result.err().map(|err| err.code()), expected);
}

#[rstest]
#[case(BookmarkServiceError::user_not_found("x"), ErrorCode::NotFound)]
#[case(BookmarkServiceError::bookmark_not_found("1"), ErrorCode::NotFound)]
#[case(
    BookmarkServiceError::InvalidBookmark(BookmarkValidationError::EmptyUri),
    ErrorCode::InvalidRequest
)]
#[case(
    BookmarkServiceError::Accounts(AccountRepositoryError::connection("refused")),
    ErrorCode::ServiceUnavailable
)]
#[case(
    BookmarkServiceError::Bookmarks(BookmarkRepositoryError::connection("refused")),
    ErrorCode::ServiceUnavailable
)]
#[case(
    BookmarkServiceError::Accounts(AccountRepositoryError::duplicate_username("jlong")),
    ErrorCode::Conflict
)]
#[case(
    BookmarkServiceError::Accounts(AccountRepositoryError::query("syntax")),
    ErrorCode::InternalError
)]
#[case(
    BookmarkServiceError::Bookmarks(BookmarkRepositoryError::unknown_account(4_i64)),
    ErrorCode::InternalError
)]
fn service_errors_map_to_domain_codes(
    #[case] error: BookmarkServiceError,
    #[case] expected: ErrorCode,
) {
    assert_eq!(Error::from(error).code(), expected);
}
