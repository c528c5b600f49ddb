//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only depend on the driving
//! ports, so they can be exercised without any store.

use std::sync::Arc;

use crate::domain::ports::{BookmarksCommand, BookmarksQuery};
use crate::inbound::http::hypermedia::RouteTemplates;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub bookmarks: Arc<dyn BookmarksCommand>,
    pub bookmarks_query: Arc<dyn BookmarksQuery>,
    pub links: RouteTemplates,
}

impl HttpState {
    /// Build state with the default link registry.
    pub fn new(
        bookmarks: Arc<dyn BookmarksCommand>,
        bookmarks_query: Arc<dyn BookmarksQuery>,
    ) -> Self {
        Self {
            bookmarks,
            bookmarks_query,
            links: RouteTemplates::default(),
        }
    }
}
