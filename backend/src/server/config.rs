//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use student_records::domain::SharedSecret;
use student_records::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) secret: SharedSecret,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration with in-memory storage.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, secret: SharedSecret) -> Self {
        Self {
            bind_addr,
            secret,
            db_pool: None,
        }
    }

    /// Attach a database connection pool so the Diesel repositories are used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
