//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories here implement the domain storage ports on top of
//! `diesel-async` with `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Stored rows are re-validated on the way out.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel failures map onto the port
//!   error enums, which the domain reports as internal errors.
//!
//! # Example
//!
//! ```ignore
//! use student_records::outbound::persistence::{DbPool, DieselStudentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/students")).await?;
//! let repo = DieselStudentRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_campus_repository;
mod diesel_student_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_campus_repository::DieselCampusRepository;
pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::MigrationError;
pub use pool::{DbPool, PoolConfig, PoolError};
