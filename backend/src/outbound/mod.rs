//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM, plus
//!   the embedded schema migrations.
//! - **memory**: process-local repositories used when no database is
//!   configured and by tests.
//!
//! Adapters only translate between domain types and storage representations.

pub mod memory;
pub mod persistence;
