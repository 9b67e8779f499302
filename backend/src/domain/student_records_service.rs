//! Student records controller.
//!
//! Implements the student driving ports on top of a [`StudentRepository`].
//! Every mutating call runs its checks in a fixed order:
//!
//! 1. the presented token must match the shared secret;
//! 2. the payload must pass the schema check;
//! 3. only then is the store consulted, so a missing record is reported
//!    after, never instead of, an auth or validation failure.
//!
//! Store failures of any kind surface as `InternalError`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::domain::ports::{
    CreateStudentRequest, DeleteStudentRequest, StudentRecordsCommand, StudentRecordsQuery,
    StudentRepository, StudentRepositoryError, UpdateStudentRequest,
};
use crate::domain::{
    Error, SharedSecret, StudentCode, StudentDraft, StudentRecord, StudentValidationError,
};

fn map_repository_error(error: StudentRepositoryError) -> Error {
    Error::internal(format!("student repository error: {error}"))
}

fn map_validation_error(error: &StudentValidationError) -> Error {
    Error::validation(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": error.code(),
    }))
}

fn not_found(code: StudentCode) -> Error {
    Error::not_found(format!("student {code} does not exist"))
}

fn target_code(code: Option<StudentCode>) -> Result<StudentCode, Error> {
    code.ok_or_else(|| Error::not_found("no student can carry the requested code"))
}

fn validate_payload(payload: Option<&Value>) -> Result<StudentDraft, Error> {
    let payload = payload.ok_or_else(|| {
        Error::validation("request body must be a JSON object")
            .with_details(json!({ "code": "missing_body" }))
    })?;
    StudentDraft::from_payload(payload).map_err(|err| map_validation_error(&err))
}

/// Student records service implementing both driving ports.
pub struct StudentRecordsService<R: ?Sized> {
    repository: Arc<R>,
    secret: SharedSecret,
}

impl<R: ?Sized> Clone for StudentRecordsService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            secret: self.secret.clone(),
        }
    }
}

impl<R: ?Sized> StudentRecordsService<R> {
    /// Create a service over `repository`, guarding writes with `secret`.
    pub fn new(repository: Arc<R>, secret: SharedSecret) -> Self {
        Self { repository, secret }
    }
}

#[async_trait]
impl<R> StudentRecordsCommand for StudentRecordsService<R>
where
    R: StudentRepository + ?Sized,
{
    async fn create_student(&self, request: CreateStudentRequest) -> Result<StudentRecord, Error> {
        self.secret.authorize(request.token.as_deref())?;
        let draft = validate_payload(request.payload.as_ref())?;

        let record = self
            .repository
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        info!(code = record.code().value(), "student created");
        Ok(record)
    }

    async fn update_student(&self, request: UpdateStudentRequest) -> Result<StudentRecord, Error> {
        self.secret.authorize(request.token.as_deref())?;
        let draft = validate_payload(request.payload.as_ref())?;
        let code = target_code(request.code)?;

        let record = self
            .repository
            .update(code, &draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(code))?;
        info!(code = record.code().value(), "student updated");
        Ok(record)
    }

    async fn delete_student(&self, request: DeleteStudentRequest) -> Result<(), Error> {
        self.secret.authorize(request.token.as_deref())?;
        let code = target_code(request.code)?;

        let removed = self
            .repository
            .delete(code)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found(code));
        }
        info!(code = code.value(), "student deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> StudentRecordsQuery for StudentRecordsService<R>
where
    R: StudentRepository + ?Sized,
{
    async fn list_students(&self) -> Result<Vec<StudentRecord>, Error> {
        let records = self
            .repository
            .list()
            .await
            .map_err(map_repository_error)?;
        debug!(count = records.len(), "students listed");
        Ok(records)
    }

    async fn get_student(&self, code: StudentCode) -> Result<StudentRecord, Error> {
        self.repository
            .find_by_code(code)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(code))
    }
}

#[cfg(test)]
#[path = "student_records_service_tests.rs"]
mod tests;
