//! Domain primitives, services and ports.
//!
//! Purpose: keep bookmark rules independent of HTTP and storage. Adapters in
//! `inbound` and `outbound` depend on this module, never the reverse.
//!
//! Public surface:
//! - `Account`, `Username`, `AccountId`: account identity.
//! - `Bookmark`, `NewBookmark`, `BookmarkId`: bookmarks and drafts.
//! - `BookmarkService`: implementation of the driving ports.
//! - `DemoDataSeeder`: startup demo roster.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod account;
pub mod bookmark;
pub mod bookmark_service;
pub mod demo_data;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::account::{Account, AccountId, AccountValidationError, NewAccount, Username};
pub use self::bookmark::{Bookmark, BookmarkId, BookmarkValidationError, NewBookmark};
pub use self::bookmark_service::{BookmarkService, BookmarkServiceError};
pub use self::demo_data::{
    DEMO_DESCRIPTION, DEMO_PASSWORD, DEMO_USERNAMES, DemoDataOutcome, DemoDataSeeder,
    DemoDataSeedingError, demo_bookmark_uris,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
