//! Process-local repository adapters.
//!
//! Records live behind a mutex; codes come from a counter that only moves
//! forward, so a deleted code is never handed out again.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CampusRepository, CampusRepositoryError, StudentRepository, StudentRepositoryError,
};
use crate::domain::{CampusRecord, StudentCode, StudentDraft, StudentRecord};

#[derive(Debug)]
struct StudentTable {
    records: BTreeMap<StudentCode, StudentRecord>,
    last_code: i32,
}

/// In-memory implementation of [`StudentRepository`].
#[derive(Debug)]
pub struct InMemoryStudentRepository {
    table: Mutex<StudentTable>,
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStudentRepository {
    /// Create an empty repository.
    pub const fn new() -> Self {
        Self {
            table: Mutex::new(StudentTable {
                records: BTreeMap::new(),
                last_code: 0,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StudentTable>, StudentRepositoryError> {
        self.table
            .lock()
            .map_err(|_| StudentRepositoryError::query("student table lock poisoned"))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list(&self) -> Result<Vec<StudentRecord>, StudentRepositoryError> {
        Ok(self.lock()?.records.values().cloned().collect())
    }

    async fn find_by_code(
        &self,
        code: StudentCode,
    ) -> Result<Option<StudentRecord>, StudentRepositoryError> {
        Ok(self.lock()?.records.get(&code).cloned())
    }

    async fn insert(&self, draft: &StudentDraft) -> Result<StudentRecord, StudentRepositoryError> {
        let mut table = self.lock()?;
        let next = table
            .last_code
            .checked_add(1)
            .and_then(StudentCode::new)
            .ok_or_else(|| StudentRepositoryError::query("student code space exhausted"))?;
        let record = StudentRecord::new(next, draft.clone());
        table.last_code = next.value();
        table.records.insert(next, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        code: StudentCode,
        draft: &StudentDraft,
    ) -> Result<Option<StudentRecord>, StudentRepositoryError> {
        let mut table = self.lock()?;
        let Some(slot) = table.records.get_mut(&code) else {
            return Ok(None);
        };
        *slot = StudentRecord::new(code, draft.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, code: StudentCode) -> Result<bool, StudentRepositoryError> {
        Ok(self.lock()?.records.remove(&code).is_some())
    }
}

/// In-memory implementation of [`CampusRepository`] over a fixed list.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCampusRepository {
    campuses: Vec<CampusRecord>,
}

impl InMemoryCampusRepository {
    /// Create a repository holding `campuses`, kept in code order.
    pub fn new(mut campuses: Vec<CampusRecord>) -> Self {
        campuses.sort_by_key(CampusRecord::code);
        Self { campuses }
    }
}

#[async_trait]
impl CampusRepository for InMemoryCampusRepository {
    async fn list(&self) -> Result<Vec<CampusRecord>, CampusRepositoryError> {
        Ok(self.campuses.clone())
    }
}
