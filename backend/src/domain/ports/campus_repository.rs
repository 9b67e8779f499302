//! Port for reading the campus lookup table.

use async_trait::async_trait;

use crate::domain::CampusRecord;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by campus repository adapters.
    pub enum CampusRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "campus repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "campus repository query failed: {message}",
    }
}

/// Read access to campus rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampusRepository: Send + Sync {
    /// All campuses in ascending code order.
    async fn list(&self) -> Result<Vec<CampusRecord>, CampusRepositoryError>;
}
