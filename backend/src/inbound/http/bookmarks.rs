//! Bookmark HTTP handlers.
//!
//! ```text
//! POST /{user_id}/bookmarks {"uri":"http://example.com","description":"..."}
//! GET  /{user_id}/bookmarks
//! GET  /{user_id}/bookmarks/{bookmark_id}
//! ```
//!
//! Every route resolves `user_id` before touching bookmark data, so an
//! unknown user is always reported ahead of any other failure.

use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, get, http::header, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::AddBookmarkRequest;
use crate::domain::{Account, Bookmark, BookmarkId, BookmarkServiceError, Error, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::hypermedia::{Link, RouteTemplates, bookmark_url, request_base};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use url::Url;

/// Request body for `POST /{user_id}/bookmarks`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateBookmarkRequest {
    #[schema(example = "http://bookmark.com/3/jlong")]
    pub uri: String,
    #[schema(example = "A description")]
    pub description: String,
}

/// Owner summary embedded in a bookmark. The password is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().value(),
            username: account.username().to_string(),
        }
    }
}

/// Raw bookmark representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookmarkResponse {
    pub id: i64,
    pub uri: String,
    pub description: String,
    pub account: AccountResponse,
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id().value(),
            uri: bookmark.uri().to_owned(),
            description: bookmark.description().to_owned(),
            account: AccountResponse::from(bookmark.account()),
        }
    }
}

/// A bookmark with its navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookmarkResourceResponse {
    pub bookmark: BookmarkResponse,
    #[serde(rename = "_links")]
    pub links: BTreeMap<String, Link>,
}

impl BookmarkResourceResponse {
    /// Wrap `bookmark` with every link the registry knows.
    pub fn assemble(
        links: &RouteTemplates,
        base: &Url,
        bookmark: &Bookmark,
    ) -> Result<Self, Error> {
        Ok(Self {
            bookmark: BookmarkResponse::from(bookmark),
            links: links.links(base, bookmark)?,
        })
    }
}

/// Embedded resource list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmbeddedBookmarks {
    #[serde(rename = "bookmarkResourceList")]
    pub bookmark_resource_list: Vec<BookmarkResourceResponse>,
}

/// Collection of a user's bookmark resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookmarkCollectionResponse {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedBookmarks,
}

fn parse_username(raw: &str) -> Result<Username, Error> {
    Username::new(raw).map_err(|_| BookmarkServiceError::user_not_found(raw).into())
}

/// Create a bookmark for an existing user.
#[utoipa::path(
    post,
    path = "/{user_id}/bookmarks",
    request_body = CreateBookmarkRequest,
    params(("user_id" = String, Path, description = "Owner username")),
    responses(
        (
            status = 201,
            description = "Bookmark created",
            headers(("Location" = String, description = "URL of the new bookmark"))
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["bookmarks"],
    operation_id = "addBookmark"
)]
#[post("/{user_id}/bookmarks")]
pub async fn add_bookmark(
    req: HttpRequest,
    state: web::Data<HttpState>,
    user_id: web::Path<String>,
    payload: web::Json<CreateBookmarkRequest>,
) -> ApiResult<HttpResponse> {
    let username = parse_username(&user_id)?;
    let base = request_base(&req)?;
    let CreateBookmarkRequest { uri, description } = payload.into_inner();
    let bookmark = state
        .bookmarks
        .add_bookmark(AddBookmarkRequest {
            username,
            uri,
            description,
        })
        .await?;
    let location = bookmark_url(&base, &bookmark)?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.as_str()))
        .finish())
}

/// Fetch one bookmark owned by the user.
#[utoipa::path(
    get,
    path = "/{user_id}/bookmarks/{bookmark_id}",
    params(
        ("user_id" = String, Path, description = "Owner username"),
        ("bookmark_id" = String, Path, description = "Bookmark identifier")
    ),
    responses(
        (status = 200, description = "Bookmark", body = BookmarkResponse),
        (status = 404, description = "Unknown user or bookmark", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["bookmarks"],
    operation_id = "readBookmark"
)]
#[get("/{user_id}/bookmarks/{bookmark_id}")]
pub async fn read_bookmark(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<BookmarkResponse>> {
    let (user_id, raw_id) = path.into_inner();
    let username = parse_username(&user_id)?;
    let id = match raw_id.parse::<BookmarkId>() {
        Ok(id) => id,
        Err(_) => {
            // Unknown users still win over malformed ids.
            state.bookmarks_query.ensure_user(&username).await?;
            return Err(BookmarkServiceError::bookmark_not_found(raw_id).into());
        }
    };
    let bookmark = state.bookmarks_query.bookmark(&username, id).await?;
    Ok(web::Json(BookmarkResponse::from(&bookmark)))
}

/// List the user's bookmarks as linked resources.
#[utoipa::path(
    get,
    path = "/{user_id}/bookmarks",
    params(("user_id" = String, Path, description = "Owner username")),
    responses(
        (status = 200, description = "Bookmark resources", body = BookmarkCollectionResponse),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["bookmarks"],
    operation_id = "readBookmarks"
)]
#[get("/{user_id}/bookmarks")]
pub async fn read_bookmarks(
    req: HttpRequest,
    state: web::Data<HttpState>,
    user_id: web::Path<String>,
) -> ApiResult<web::Json<BookmarkCollectionResponse>> {
    let username = parse_username(&user_id)?;
    let bookmarks = state.bookmarks_query.bookmarks(&username).await?;
    let base = request_base(&req)?;
    let resources = bookmarks
        .iter()
        .map(|bookmark| BookmarkResourceResponse::assemble(&state.links, &base, bookmark))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(web::Json(BookmarkCollectionResponse {
        embedded: EmbeddedBookmarks {
            bookmark_resource_list: resources,
        },
    }))
}

#[cfg(test)]
mod tests;
