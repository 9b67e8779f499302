//! Builders for HTTP state from server configuration.

use std::sync::Arc;

use tracing::warn;

use student_records::domain::StudentRecordsService;
use student_records::domain::ports::{CampusRepository, StudentRepository};
use student_records::inbound::http::state::HttpState;
use student_records::outbound::memory::{InMemoryCampusRepository, InMemoryStudentRepository};
use student_records::outbound::persistence::{DieselCampusRepository, DieselStudentRepository};

use super::ServerConfig;

/// Pick the storage adapters for `config`.
///
/// A pool selects the Diesel repositories; without one the process keeps
/// records in memory and loses them on exit.
fn build_repositories(
    config: &ServerConfig,
) -> (Arc<dyn StudentRepository>, Arc<dyn CampusRepository>) {
    match &config.db_pool {
        Some(pool) => (
            Arc::new(DieselStudentRepository::new(pool.clone())),
            Arc::new(DieselCampusRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; student records are kept in memory");
            (
                Arc::new(InMemoryStudentRepository::new()),
                Arc::new(InMemoryCampusRepository::default()),
            )
        }
    }
}

/// Build the handler state shared by every worker.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let (students, campuses) = build_repositories(config);
    HttpState::from_service(
        StudentRecordsService::new(students, config.secret.clone()),
        campuses,
    )
}
