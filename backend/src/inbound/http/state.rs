//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only see domain
//! ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::StudentRecordsService;
use crate::domain::ports::{
    CampusRepository, StudentRecordsCommand, StudentRecordsQuery, StudentRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, update and delete.
    pub students: Arc<dyn StudentRecordsCommand>,
    /// List and get.
    pub students_query: Arc<dyn StudentRecordsQuery>,
    /// Campus lookup.
    pub campuses: Arc<dyn CampusRepository>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(
        students: Arc<dyn StudentRecordsCommand>,
        students_query: Arc<dyn StudentRecordsQuery>,
        campuses: Arc<dyn CampusRepository>,
    ) -> Self {
        Self {
            students,
            students_query,
            campuses,
        }
    }

    /// Serve both student ports from one service instance.
    pub fn from_service<R>(
        service: StudentRecordsService<R>,
        campuses: Arc<dyn CampusRepository>,
    ) -> Self
    where
        R: StudentRepository + ?Sized + 'static,
    {
        let service = Arc::new(service);
        Self::new(service.clone(), service, campuses)
    }
}
