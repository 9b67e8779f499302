//! Student records service library.
//!
//! Layout follows a hexagonal split: [`domain`] holds the records model,
//! validation and ports; [`inbound`] adapts HTTP onto the driving ports;
//! [`outbound`] implements storage ports for PostgreSQL and memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
