//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`StudentRecords*`) are implemented by domain services and consumed
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod campus_repository;
mod student_records;
mod student_repository;

#[cfg(test)]
pub use campus_repository::MockCampusRepository;
pub use campus_repository::{CampusRepository, CampusRepositoryError};
#[cfg(test)]
pub use student_records::{MockStudentRecordsCommand, MockStudentRecordsQuery};
pub use student_records::{
    CreateStudentRequest, DeleteStudentRequest, StudentRecordsCommand, StudentRecordsQuery,
    UpdateStudentRequest,
};
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
