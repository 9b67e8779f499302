//! Domain primitives, ports and services.
//!
//! Purpose: define the student record types, the validation that guards them,
//! and the controller that applies authorization and error classification in
//! front of the store. Nothing here depends on Actix or Diesel.
//!
//! Public surface:
//! - `Error`/`ErrorCode`: transport-agnostic failure kinds.
//! - `StudentRecord`, `StudentDraft`, `StudentCode`: the student entity.
//! - `CampusRecord`: campus lookup rows.
//! - `SharedSecret`: static-token authorization.
//! - `StudentRecordsService`: the resource controller.

pub mod auth;
pub mod campus;
pub mod error;
pub mod ports;
pub mod student;
mod student_records_service;

pub use self::auth::{SharedSecret, SharedSecretError};
pub use self::campus::CampusRecord;
pub use self::error::{Error, ErrorCode};
pub use self::student::{
    EmailAddress, StudentCode, StudentDraft, StudentName, StudentRecord, StudentValidationError,
};
pub use self::student_records_service::StudentRecordsService;
