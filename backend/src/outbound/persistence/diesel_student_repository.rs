//! PostgreSQL-backed `StudentRepository` implementation using Diesel ORM.
//!
//! Code assignment is delegated to the `students.code` identity column.
//! Rows are re-validated through [`StudentDraft`] when read back.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{StudentCode, StudentDraft, StudentRecord};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewStudentRow, StudentChangeset, StudentRow};
use super::pool::{DbPool, PoolError};
use super::schema::students;

/// Diesel-backed implementation of the student repository port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StudentRepositoryError {
    map_basic_pool_error(error, StudentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> StudentRepositoryError {
    map_basic_diesel_error(
        error,
        StudentRepositoryError::query,
        StudentRepositoryError::connection,
    )
}

/// Convert a database row into a validated domain record.
fn row_to_record(row: StudentRow) -> Result<StudentRecord, StudentRepositoryError> {
    let StudentRow {
        code,
        name,
        email,
        address,
    } = row;

    let code = StudentCode::new(code).ok_or_else(|| {
        StudentRepositoryError::query(format!("stored student code {code} is not positive"))
    })?;
    let draft = StudentDraft::try_from_parts(name, email, address).map_err(|err| {
        StudentRepositoryError::query(format!("stored student {code} is invalid: {err}"))
    })?;
    Ok(StudentRecord::new(code, draft))
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn list(&self) -> Result<Vec<StudentRecord>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<StudentRow> = students::table
            .order(students::code.asc())
            .select(StudentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn find_by_code(
        &self,
        code: StudentCode,
    ) -> Result<Option<StudentRecord>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = students::table
            .find(code.value())
            .select(StudentRow::as_select())
            .first::<StudentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn insert(&self, draft: &StudentDraft) -> Result<StudentRecord, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(students::table)
            .values(NewStudentRow::from(draft))
            .returning(StudentRow::as_returning())
            .get_result::<StudentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_record(row)
    }

    async fn update(
        &self,
        code: StudentCode,
        draft: &StudentDraft,
    ) -> Result<Option<StudentRecord>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(students::table.find(code.value()))
            .set(StudentChangeset::from(draft))
            .returning(StudentRow::as_returning())
            .get_result::<StudentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn delete(&self, code: StudentCode) -> Result<bool, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(students::table.find(code.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
