//! Hypermedia links for bookmark resources.
//!
//! Links are produced from an explicit registry mapping each [`Relation`] to a
//! builder. Route links expand the same [`RouteTemplate`] constants the
//! handlers are mounted on, so a `self` link always matches the read route.

use std::collections::BTreeMap;

use actix_web::HttpRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use utoipa::ToSchema;

use crate::domain::{Bookmark, Error};

/// Collection route of one user's bookmarks.
pub const BOOKMARKS_ROUTE: RouteTemplate = RouteTemplate::new("/{user_id}/bookmarks");

/// Single bookmark route.
pub const BOOKMARK_ROUTE: RouteTemplate =
    RouteTemplate::new("/{user_id}/bookmarks/{bookmark_id}");

/// Errors raised while expanding a link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("route '{pattern}' needs parameter '{name}'")]
    MissingParameter { pattern: &'static str, name: String },
    #[error("'{base}' cannot carry a path")]
    CannotBeABase { base: String },
}

impl From<LinkError> for Error {
    fn from(value: LinkError) -> Self {
        Error::internal(format!("link generation failed: {value}"))
    }
}

/// A path pattern with `{name}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTemplate {
    pattern: &'static str,
}

impl RouteTemplate {
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// The pattern in actix routing syntax.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Substitute `params` into the pattern and resolve it against `base`.
    ///
    /// Each substituted value is percent-encoded as a single path segment.
    ///
    /// # Examples
    /// ```
    /// use bookmarks::inbound::http::hypermedia::BOOKMARK_ROUTE;
    /// use url::Url;
    ///
    /// let base = Url::parse("http://localhost:8080/").expect("valid base");
    /// let url = BOOKMARK_ROUTE
    ///     .expand(&base, &[("user_id", "jlong"), ("bookmark_id", "7")])
    ///     .expect("all parameters supplied");
    /// assert_eq!(url.as_str(), "http://localhost:8080/jlong/bookmarks/7");
    /// ```
    pub fn expand(&self, base: &Url, params: &[(&str, &str)]) -> Result<Url, LinkError> {
        let segments = self
            .pattern
            .trim_start_matches('/')
            .split('/')
            .map(|segment| self.resolve_segment(segment, params))
            .collect::<Result<Vec<_>, _>>()?;

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| LinkError::CannotBeABase {
                base: base.to_string(),
            })?
            .clear()
            .extend(segments);
        Ok(url)
    }

    fn resolve_segment<'a>(
        &self,
        segment: &'a str,
        params: &[(&'a str, &'a str)],
    ) -> Result<&'a str, LinkError> {
        let Some(name) = segment
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        else {
            return Ok(segment);
        };
        params
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(*value))
            .ok_or_else(|| LinkError::MissingParameter {
                pattern: self.pattern,
                name: name.to_owned(),
            })
    }
}

/// Link relations attached to a bookmark resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    /// The bookmarked external URI.
    BookmarkUri,
    /// The owner's bookmark collection.
    Bookmarks,
    /// The bookmark itself.
    SelfLink,
}

impl Relation {
    /// Name used as the key under `_links`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BookmarkUri => "bookmark-uri",
            Self::Bookmarks => "bookmarks",
            Self::SelfLink => "self",
        }
    }
}

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    #[schema(example = "http://localhost:8080/jlong/bookmarks/1")]
    pub href: String,
}

/// Builds the target of one relation for a stored bookmark.
pub type LinkBuilder = fn(&Url, &Bookmark) -> Result<String, LinkError>;

fn bookmark_uri_link(_: &Url, bookmark: &Bookmark) -> Result<String, LinkError> {
    Ok(bookmark.uri().to_owned())
}

fn bookmarks_link(base: &Url, bookmark: &Bookmark) -> Result<String, LinkError> {
    let username = bookmark.account().username();
    Ok(BOOKMARKS_ROUTE
        .expand(base, &[("user_id", username.as_ref())])?
        .into())
}

/// Absolute URL of a stored bookmark, shared by `self` links and `Location`.
pub fn bookmark_url(base: &Url, bookmark: &Bookmark) -> Result<Url, LinkError> {
    let username = bookmark.account().username();
    let id = bookmark.id().to_string();
    BOOKMARK_ROUTE.expand(
        base,
        &[("user_id", username.as_ref()), ("bookmark_id", id.as_str())],
    )
}

fn self_link(base: &Url, bookmark: &Bookmark) -> Result<String, LinkError> {
    Ok(bookmark_url(base, bookmark)?.into())
}

/// Registry of relation builders.
#[derive(Clone)]
pub struct RouteTemplates {
    builders: BTreeMap<Relation, LinkBuilder>,
}

impl Default for RouteTemplates {
    fn default() -> Self {
        Self::new()
            .with(Relation::BookmarkUri, bookmark_uri_link)
            .with(Relation::Bookmarks, bookmarks_link)
            .with(Relation::SelfLink, self_link)
    }
}

impl RouteTemplates {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// Register `builder` for `relation`, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, relation: Relation, builder: LinkBuilder) -> Self {
        self.builders.insert(relation, builder);
        self
    }

    /// Evaluate every registered relation for `bookmark`.
    pub fn links(
        &self,
        base: &Url,
        bookmark: &Bookmark,
    ) -> Result<BTreeMap<String, Link>, LinkError> {
        self.builders
            .iter()
            .map(|(relation, build)| {
                let href = build(base, bookmark)?;
                Ok((relation.as_str().to_owned(), Link { href }))
            })
            .collect()
    }
}

/// Scheme and authority the client used to reach this service.
///
/// Resolved through actix `ConnectionInfo`, which prefers `Forwarded` and
/// `X-Forwarded-*` over `Host`. The service must therefore sit behind a proxy
/// that overwrites those headers; a directly exposed instance lets clients
/// choose the host written into `Location` and `_links`.
///
/// # Errors
///
/// Returns an invalid-request error when the resolved host is not a valid URL
/// authority.
pub fn request_base(req: &HttpRequest) -> Result<Url, Error> {
    let info = req.connection_info();
    let raw = format!("{}://{}/", info.scheme(), info.host());
    Url::parse(&raw).map_err(|err| Error::invalid_request(format!("invalid host '{raw}': {err}")))
}
