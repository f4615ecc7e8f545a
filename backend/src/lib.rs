//! Backend library modules.
//!
//! The HTTP facade over the `coffee_data` generator: request parsing, error
//! mapping, export delivery, health probes and the OpenAPI document.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
