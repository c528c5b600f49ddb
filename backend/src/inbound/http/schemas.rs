//! OpenAPI schema definitions for types owned by other layers.
//!
//! The error envelope is produced by the [`ResponseError`] mapping rather than
//! a DTO handlers return, so its schema is registered here.
//!
//! [`ResponseError`]: actix_web::ResponseError

use utoipa::ToSchema;

/// OpenAPI schema for the error envelope.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable failure message.
    #[schema(example = "could not find user 'nobody'.")]
    error: String,
}
