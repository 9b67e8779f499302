//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa`; these wrappers mirror their wire
//! shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Missing or mismatching `Authorization` header.
    #[schema(rename = "NAO_AUTORIZADO")]
    Unauthorized,
    /// Body absent, not JSON, or failing field validation.
    #[schema(rename = "ERRO_VALIDACAO")]
    ValidationError,
    /// No record for the requested code.
    #[schema(rename = "NAO_ENCONTRADO")]
    NotFound,
    /// Unexpected server or storage failure.
    #[schema(rename = "ERRO_INTERNO")]
    InternalError,
}

/// OpenAPI schema for the error envelope returned on every failure.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Failure category.
    #[schema(example = "NAO_ENCONTRADO")]
    erro: ErrorCodeSchema,
}

/// OpenAPI schema for [`crate::domain::StudentRecord`].
#[derive(ToSchema)]
#[schema(as = crate::domain::StudentRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentRecordSchema {
    /// Store-assigned code.
    #[schema(example = 1)]
    codigo: i32,
    /// Student name.
    #[schema(example = "Joao da Silva")]
    nome: String,
    /// Optional email address.
    #[schema(example = "joao@email.com")]
    email: Option<String>,
    /// Optional postal address.
    #[schema(example = "Rua da Felicidade, 1")]
    endereco: Option<String>,
}

/// Request body accepted by create and update.
///
/// Unknown fields are rejected.
#[derive(ToSchema)]
#[schema(as = crate::domain::StudentDraft)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentPayloadSchema {
    /// Student name; must not be blank.
    #[schema(example = "Jose Sousa")]
    nome: String,
    /// Optional email address shaped like `local@domain.tld`.
    #[schema(example = "josesousa@email.com")]
    email: Option<String>,
    /// Optional postal address.
    #[schema(example = "Rua da Felicidade, 1")]
    endereco: Option<String>,
}

/// OpenAPI schema for [`crate::domain::CampusRecord`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CampusRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CampusSchema {
    /// Campus code.
    #[schema(example = 1)]
    codigo: i32,
    /// Campus description, `null` when not recorded.
    #[schema(example = "Campus Taguatinga")]
    descricao: Option<String>,
}
