//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::StudentDraft;

use super::schema::{campuses, students};

/// Row struct for reading from the students table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StudentRow {
    pub code: i32,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Insertable struct for new student records. The code is left to the
/// identity column.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub(crate) struct NewStudentRow<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
}

/// Changeset for overwriting a student record.
///
/// Absent optional fields are written as `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = students)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct StudentChangeset<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
}

impl<'a> From<&'a StudentDraft> for NewStudentRow<'a> {
    fn from(draft: &'a StudentDraft) -> Self {
        Self {
            name: draft.name().as_ref(),
            email: draft.email().map(AsRef::as_ref),
            address: draft.address(),
        }
    }
}

impl<'a> From<&'a StudentDraft> for StudentChangeset<'a> {
    fn from(draft: &'a StudentDraft) -> Self {
        Self {
            name: draft.name().as_ref(),
            email: draft.email().map(AsRef::as_ref),
            address: draft.address(),
        }
    }
}

/// Row struct for reading from the campuses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = campuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CampusRow {
    pub code: i32,
    pub description: Option<String>,
}
