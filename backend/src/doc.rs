//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint, the schema wrappers from
//! [`crate::inbound::http::schemas`], and the shared-secret header scheme.
//! Swagger UI serves it in debug builds.

use crate::inbound::http::schemas::{
    CampusSchema, ErrorCodeSchema, ErrorSchema, StudentPayloadSchema, StudentRecordSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the security scheme guarding mutating endpoints.
pub const SHARED_SECRET_SCHEME: &str = "SharedSecret";

/// Enrich the generated document with the shared-secret header scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            SHARED_SECRET_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Shared secret, sent verbatim without a scheme prefix.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Student records API",
        description = "CRUD over student records guarded by a shared secret, plus campus lookup and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::campuses::list_campuses,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        StudentRecordSchema,
        StudentPayloadSchema,
        CampusSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "students", description = "Student record operations"),
        (name = "campuses", description = "Campus lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
