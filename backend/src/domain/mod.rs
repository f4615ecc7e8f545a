//! Domain primitives shared by the HTTP adapter.
//!
//! Purpose: define transport-agnostic types used by the API. Keep types
//! immutable and document invariants and serialisation contracts (serde) in
//! each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - LoginCredentials (alias to `auth::LoginCredentials`): validated login pair.
//! - TraceId (alias to `trace_id::TraceId`): request correlation identifier.

pub mod auth;
pub mod error;
pub mod trace_id;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
