//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer (generate,
//! login, export, health) together with the schema wrappers from
//! [`crate::inbound::http::schemas`], so domain types stay free of utoipa.
//!
//! The document is served by Swagger UI in debug builds and printed by
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::login::{LoginRequest, LoginResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, RecordSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee data backend API",
        description = "Synthetic coffee-shop test data: generation, demo login and file export."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::generate::generate_by_path,
        crate::inbound::http::generate::generate_by_query,
        crate::inbound::http::login::login,
        crate::inbound::http::export::export_demo,
        crate::inbound::http::export::export_last,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RecordSchema,
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        LoginResponse
    )),
    tags(
        (name = "generate", description = "Generate batches of synthetic records"),
        (name = "login", description = "Demo credential check"),
        (name = "export", description = "Download datasets as files"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema structure.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/generate/{data_type}/{count}",
            "/generate/{data_type}",
            "/login",
            "/export_data/{format}",
            "/export/{format}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn login_schemas_use_german_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let request = schemas.get("LoginRequest").expect("LoginRequest schema");

        assert_object_schema_has_field(request, "benutzername");
        assert_object_schema_has_field(request, "passwort");
    }
}
