//! OpenAPI documentation.
//!
//! [`ApiDoc`] aggregates every handler's `utoipa::path` annotation and the
//! response schemas. Swagger UI serves it in debug builds and the
//! `openapi-dump` binary prints it.

use crate::inbound::http::bookmarks::{
    AccountResponse, BookmarkCollectionResponse, BookmarkResourceResponse, BookmarkResponse,
    CreateBookmarkRequest, EmbeddedBookmarks,
};
use crate::inbound::http::hypermedia::Link;
use crate::inbound::http::schemas::ErrorSchema;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookmarks API",
        description = "Per-user bookmarks with hypermedia links, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::bookmarks::add_bookmark,
        crate::inbound::http::bookmarks::read_bookmark,
        crate::inbound::http::bookmarks::read_bookmarks,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateBookmarkRequest,
        AccountResponse,
        BookmarkResponse,
        BookmarkResourceResponse,
        BookmarkCollectionResponse,
        EmbeddedBookmarks,
        Link,
        ErrorSchema,
    )),
    tags(
        (name = "bookmarks", description = "Bookmarks owned by a user"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
