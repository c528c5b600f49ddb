//! HTTP inbound adapter exposing the bookmark endpoints.

pub mod bookmarks;
pub mod error;
pub mod health;
pub mod hypermedia;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
