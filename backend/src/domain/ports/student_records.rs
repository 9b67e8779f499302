//! Driving ports for the student resource.
//!
//! Inbound adapters build these requests from raw transport input: the token
//! as presented (if any) and the payload as parsed JSON (absent when the body
//! is missing or not JSON). Authorization and validation happen behind the
//! port so every adapter gets the same precedence.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Error, StudentCode, StudentRecord};

/// Request to create a student record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudentRequest {
    /// Token presented by the caller.
    pub token: Option<String>,
    /// Parsed request body.
    pub payload: Option<Value>,
}

/// Request to overwrite a student record.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStudentRequest {
    /// Token presented by the caller.
    pub token: Option<String>,
    /// Target record. `None` when the caller named an integer that no
    /// record can carry.
    pub code: Option<StudentCode>,
    /// Parsed request body.
    pub payload: Option<Value>,
}

/// Request to remove a student record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudentRequest {
    /// Token presented by the caller.
    pub token: Option<String>,
    /// Target record. `None` when the caller named an integer that no
    /// record can carry.
    pub code: Option<StudentCode>,
}

/// Mutating operations on student records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRecordsCommand: Send + Sync {
    /// Validate and persist a new record.
    async fn create_student(&self, request: CreateStudentRequest) -> Result<StudentRecord, Error>;

    /// Validate and overwrite an existing record.
    async fn update_student(&self, request: UpdateStudentRequest) -> Result<StudentRecord, Error>;

    /// Remove an existing record.
    async fn delete_student(&self, request: DeleteStudentRequest) -> Result<(), Error>;
}

/// Read operations on student records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRecordsQuery: Send + Sync {
    /// All records in insertion order.
    async fn list_students(&self) -> Result<Vec<StudentRecord>, Error>;

    /// One record by code.
    async fn get_student(&self, code: StudentCode) -> Result<StudentRecord, Error>;
}
