//! Port for student record persistence.
//!
//! Implementations own code assignment: `insert` must hand out a code greater
//! than every code previously handed out, even under concurrent callers.

use async_trait::async_trait;

use crate::domain::{StudentCode, StudentDraft, StudentRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "student repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "student repository query failed: {message}",
    }
}

/// Data-access interface over the `students` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All records in ascending code order.
    async fn list(&self) -> Result<Vec<StudentRecord>, StudentRepositoryError>;

    /// Fetch one record by code.
    async fn find_by_code(
        &self,
        code: StudentCode,
    ) -> Result<Option<StudentRecord>, StudentRepositoryError>;

    /// Persist a new record under the next code.
    async fn insert(&self, draft: &StudentDraft) -> Result<StudentRecord, StudentRepositoryError>;

    /// Overwrite the content of an existing record.
    ///
    /// Returns `None` when no record has `code`.
    async fn update(
        &self,
        code: StudentCode,
        draft: &StudentDraft,
    ) -> Result<Option<StudentRecord>, StudentRepositoryError>;

    /// Remove a record. Returns whether a record was removed.
    async fn delete(&self, code: StudentCode) -> Result<bool, StudentRepositoryError>;
}
