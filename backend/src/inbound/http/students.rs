//! Student records API handlers.
//!
//! ```text
//! GET    /api/v1/students/
//! GET    /api/v1/students/{code}
//! POST   /api/v1/students/        Authorization: <secret>
//! PUT    /api/v1/students/{code}  Authorization: <secret>
//! DELETE /api/v1/students/{code}  Authorization: <secret>
//! ```
//!
//! Handlers forward the raw token and body to the domain, which owns the
//! auth > validation > existence ordering. Any integer path segment reaches
//! the domain, even one no record can carry, so writes to `0` or to an
//! overflowing code still check the token first. A segment that is not an
//! integer does not match the route and is answered with 404 up front.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::ports::{CreateStudentRequest, DeleteStudentRequest, UpdateStudentRequest};
use crate::domain::{Error, StudentCode, StudentRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::PresentedToken;
use crate::inbound::http::payload::JsonPayload;
use crate::inbound::http::schemas::{ErrorSchema, StudentPayloadSchema, StudentRecordSchema};
use crate::inbound::http::state::HttpState;

/// Split a path segment into "integer" and "not a route match".
///
/// `Ok(None)` is an integer that cannot be a [`StudentCode`].
fn parse_code(raw: &str) -> Result<Option<StudentCode>, Error> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Error::not_found(format!("{raw:?} is not a student code")));
    }
    Ok(StudentCode::parse(raw))
}

/// List every student in code order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use student_records::inbound::http::students::list_students;
///
/// let app = App::new().service(list_students);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/students/",
    responses(
        (status = 200, description = "Students", body = [StudentRecordSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "listStudents",
    security([])
)]
#[get("/students/")]
pub async fn list_students(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<StudentRecord>>> {
    let records = state.students_query.list_students().await?;
    Ok(web::Json(records))
}

/// Fetch one student.
#[utoipa::path(
    get,
    path = "/api/v1/students/{code}",
    params(("code" = i32, Path, description = "Student code")),
    responses(
        (status = 200, description = "Student", body = StudentRecordSchema),
        (status = 404, description = "No such student", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "getStudent",
    security([])
)]
#[get("/students/{code}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StudentRecord>> {
    let code = parse_code(&path)?
        .ok_or_else(|| Error::not_found(format!("student {} does not exist", path.as_str())))?;
    let record = state.students_query.get_student(code).await?;
    Ok(web::Json(record))
}

/// Create a student and return it with its assigned code.
#[utoipa::path(
    post,
    path = "/api/v1/students/",
    request_body = StudentPayloadSchema,
    responses(
        (status = 201, description = "Student created", body = StudentRecordSchema),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "createStudent",
    security(("SharedSecret" = []))
)]
#[post("/students/")]
pub async fn create_student(
    state: web::Data<HttpState>,
    token: PresentedToken,
    payload: JsonPayload,
) -> ApiResult<HttpResponse> {
    let record = state
        .students
        .create_student(CreateStudentRequest {
            token: token.into_inner(),
            payload: payload.into_inner(),
        })
        .await?;
    Ok(HttpResponse::Created().json(record))
}

/// Overwrite a student. Omitted optional fields are cleared.
#[utoipa::path(
    put,
    path = "/api/v1/students/{code}",
    params(("code" = i32, Path, description = "Student code")),
    request_body = StudentPayloadSchema,
    responses(
        (status = 200, description = "Student updated", body = StudentRecordSchema),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 404, description = "No such student", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "updateStudent",
    security(("SharedSecret" = []))
)]
#[put("/students/{code}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    token: PresentedToken,
    payload: JsonPayload,
) -> ApiResult<web::Json<StudentRecord>> {
    let code = parse_code(&path)?;
    let record = state
        .students
        .update_student(UpdateStudentRequest {
            token: token.into_inner(),
            code,
            payload: payload.into_inner(),
        })
        .await?;
    Ok(web::Json(record))
}

/// Remove a student.
#[utoipa::path(
    delete,
    path = "/api/v1/students/{code}",
    params(("code" = i32, Path, description = "Student code")),
    responses(
        (status = 204, description = "Student removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 404, description = "No such student", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "deleteStudent",
    security(("SharedSecret" = []))
)]
#[delete("/students/{code}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    token: PresentedToken,
) -> ApiResult<HttpResponse> {
    let code = parse_code(&path)?;
    state
        .students
        .delete_student(DeleteStudentRequest {
            token: token.into_inner(),
            code,
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "students_tests.rs"]
mod tests;
