//! PostgreSQL-backed `CampusRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::CampusRecord;
use crate::domain::ports::{CampusRepository, CampusRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::CampusRow;
use super::pool::DbPool;
use super::schema::campuses;

/// Diesel-backed implementation of the campus repository port.
#[derive(Clone)]
pub struct DieselCampusRepository {
    pool: DbPool,
}

impl DieselCampusRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampusRepository for DieselCampusRepository {
    async fn list(&self) -> Result<Vec<CampusRecord>, CampusRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, CampusRepositoryError::connection))?;

        let rows: Vec<CampusRow> = campuses::table
            .order(campuses::code.asc())
            .select(CampusRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    CampusRepositoryError::query,
                    CampusRepositoryError::connection,
                )
            })?;

        Ok(rows
            .into_iter()
            .map(|row| CampusRecord::new(row.code, row.description))
            .collect())
    }
}
