//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod campuses;
pub mod error;
pub mod health;
pub mod payload;
pub mod schemas;
pub mod state;
pub mod students;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Every versioned API route, mounted under `/api/v1`.
pub fn api_v1_scope() -> Scope {
    web::scope("/api/v1")
        .service(students::list_students)
        .service(students::get_student)
        .service(students::create_student)
        .service(students::update_student)
        .service(students::delete_student)
        .service(campuses::list_campuses)
}
