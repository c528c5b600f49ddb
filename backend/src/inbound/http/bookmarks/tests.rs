//! Handler tests over mocked driving ports.

use super::*;
use crate::domain::ports::{MockBookmarksCommand, MockBookmarksQuery};
use crate::inbound::http::error::{ErrorEnvelope, json_config};
use crate::inbound::http::test_utils::{account, bookmark, state_with};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

const HOST: &str = "bookmarks.test";

async fn call(
    state: web::Data<HttpState>,
    req: actix_test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .app_data(state)
            .service(add_bookmark)
            .service(read_bookmarks)
            .service(read_bookmark),
    )
    .await;
    actix_test::call_service(&app, req.insert_header(("host", HOST)).to_request()).await
}

fn unknown_user(name: &str) -> Error {
    BookmarkServiceError::user_not_found(name).into()
}

fn username(name: &str) -> Username {
    Username::new(name).expect("valid name")
}

#[rstest]
#[actix_web::test]
async fn add_returns_created_with_location() {
    let owner = account(1, "jlong");
    let mut command = MockBookmarksCommand::new();
    command
        .expect_add_bookmark()
        .with(eq(AddBookmarkRequest {
            username: username("jlong"),
            uri: "http://x/1".to_owned(),
            description: "d".to_owned(),
        }))
        .times(1)
        .returning(move |req| Ok(bookmark(&owner, 17, &req.uri)));

    let res = call(
        state_with(command, MockBookmarksQuery::new()),
        actix_test::TestRequest::post()
            .uri("/jlong/bookmarks")
            .set_json(json!({"uri": "http://x/1", "description": "d"})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers().get(header::LOCATION).map(|v| v.as_bytes()),
        Some(&b"http://bookmarks.test/jlong/bookmarks/17"[..])
    );
    let body = actix_test::read_body(res).await;
    assert!(body.is_empty());
}

#[rstest]
#[actix_web::test]
async fn add_for_unknown_user_is_not_found() {
    let mut command = MockBookmarksCommand::new();
    command
        .expect_add_bookmark()
        .returning(|_| Err(unknown_user("ghost")));

    let res = call(
        state_with(command, MockBookmarksQuery::new()),
        actix_test::TestRequest::post()
            .uri("/ghost/bookmarks")
            .set_json(json!({"uri": "http://x/1", "description": "d"})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "could not find user 'ghost'.");
}

#[rstest]
#[actix_web::test]
async fn add_with_unusable_host_writes_nothing() {
    let mut command = MockBookmarksCommand::new();
    command.expect_add_bookmark().never();

    let res = call(
        state_with(command, MockBookmarksQuery::new()),
        actix_test::TestRequest::post()
            .uri("/jlong/bookmarks")
            .insert_header(("x-forwarded-host", "bad host"))
            .set_json(json!({"uri": "http://x/1", "description": "d"})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn links_follow_the_forwarded_host() {
    let owner = account(1, "jlong");
    let stored = vec![bookmark(&owner, 1, "http://bookmark.com/1/jlong")];
    let mut query = MockBookmarksQuery::new();
    query
        .expect_bookmarks()
        .returning(move |_| Ok(stored.clone()));

    let res = call(
        state_with(MockBookmarksCommand::new(), query),
        actix_test::TestRequest::get()
            .uri("/jlong/bookmarks")
            .insert_header(("x-forwarded-proto", "https"))
            .insert_header(("x-forwarded-host", "bookmarks.example.org")),
    )
    .await;

    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body["_embedded"]["bookmarkResourceList"][0]["_links"]["self"]["href"],
        "https://bookmarks.example.org/jlong/bookmarks/1"
    );
}

#[rstest]
#[case::missing_description(json!({"uri": "http://x/1"}))]
#[case::wrong_type(json!({"uri": 5, "description": "d"}))]
#[actix_web::test]
async fn add_rejects_malformed_bodies(#[case] payload: Value) {
    let mut command = MockBookmarksCommand::new();
    command.expect_add_bookmark().never();

    let res = call(
        state_with(command, MockBookmarksQuery::new()),
        actix_test::TestRequest::post()
            .uri("/jlong/bookmarks")
            .set_json(payload),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn invalid_usernames_are_reported_as_unknown_users() {
    let mut query = MockBookmarksQuery::new();
    query.expect_bookmarks().never();

    let res = call(
        state_with(MockBookmarksCommand::new(), query),
        actix_test::TestRequest::get().uri("/%20padded%20/bookmarks"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "could not find user ' padded '.");
}

#[rstest]
#[actix_web::test]
async fn list_wraps_bookmarks_in_linked_resources() {
    let owner = account(1, "jlong");
    let stored = vec![
        bookmark(&owner, 1, "http://bookmark.com/1/jlong"),
        bookmark(&owner, 2, "http://bookmark.com/2/jlong"),
    ];
    let mut query = MockBookmarksQuery::new();
    query
        .expect_bookmarks()
        .with(eq(username("jlong")))
        .returning(move |_| Ok(stored.clone()));

    let res = call(
        state_with(MockBookmarksCommand::new(), query),
        actix_test::TestRequest::get().uri("/jlong/bookmarks"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body["_embedded"]["bookmarkResourceList"][0],
        json!({
            "bookmark": {
                "id": 1,
                "uri": "http://bookmark.com/1/jlong",
                "description": "A description",
                "account": {"id": 1, "username": "jlong"}
            },
            "_links": {
                "bookmark-uri": {"href": "http://bookmark.com/1/jlong"},
                "bookmarks": {"href": "http://bookmarks.test/jlong/bookmarks"},
                "self": {"href": "http://bookmarks.test/jlong/bookmarks/1"}
            }
        })
    );
    assert_eq!(
        body["_embedded"]["bookmarkResourceList"][1]["_links"]["self"]["href"],
        "http://bookmarks.test/jlong/bookmarks/2"
    );
}

#[rstest]
#[actix_web::test]
async fn empty_lists_keep_the_embedded_envelope() {
    let mut query = MockBookmarksQuery::new();
    query.expect_bookmarks().returning(|_| Ok(Vec::new()));

    let res = call(
        state_with(MockBookmarksCommand::new(), query),
        actix_test::TestRequest::get().uri("/jlong/bookmarks"),
    )
    .await;

    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"_embedded": {"bookmarkResourceList": []}}));
}

#[rstest]
#[actix_web::test]
async fn read_returns_raw_bookmark_without_password() {
    let owner = account(4, "dsyer");
    let stored = bookmark(&owner, 9, "http://bookmark.com/1/dsyer");
    let mut query = MockBookmarksQuery::new();
    query
        .expect_bookmark()
        .withf(|name, id| name == &username("dsyer") && id.value() == 9)
        .returning(move |_, _| Ok(stored.clone()));

    let res = call(
        state_with(MockBookmarksCommand::new(), query),
        actix_test::TestRequest::get().uri("/dsyer/bookmarks/9"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "id": 9,
            "uri": "http://bookmark.com/1/dsyer",
            "description": "A description",
            "account": {"id": 4, "username": "dsyer"}
        })
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_bookmark_id_checks_the_user_first() {
    let mut query = MockBookmarksQuery::new();
    query
        .expect_ensure_user()
        .with(eq(username("ghost")))
        .times(1)
        .returning(|_| Err(unknown_user("ghost")));
    query.expect_bookmarks().never();
    query.expect_bookmark().never();

    let res = call(
        state_with(MockBookmarksCommand::new(), query),
        actix_test::TestRequest::get().uri("/ghost/bookmarks/abc"),
    )
    .await;

    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "could not find user 'ghost'.");
}

#[rstest]
#[actix_web::test]
async fn malformed_bookmark_id_for_known_user_is_not_found() {
    let mut query = MockBookmarksQuery::new();
    query.expect_ensure_user().times(1).returning(|_| Ok(()));
    query.expect_bookmarks().never();

    let res = call(
        state_with(MockBookmarksCommand::new(), query),
        actix_test::TestRequest::get().uri("/jlong/bookmarks/abc"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "could not find bookmark 'abc'.");
}

#[rstest]
#[actix_web::test]
async fn store_outages_surface_as_service_unavailable() {
    let mut query = MockBookmarksQuery::new();
    query
        .expect_bookmarks()
        .returning(|_| Err(Error::service_unavailable("bookmark store unavailable: refused")));

    let res = call(
        state_with(MockBookmarksCommand::new(), query),
        actix_test::TestRequest::get().uri("/jlong/bookmarks"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
