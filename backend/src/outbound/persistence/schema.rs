//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Student records. `code` is an identity column, so codes are never
    /// reused after a delete.
    students (code) {
        code -> Int4,
        name -> Varchar,
        email -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Campus lookup table.
    campuses (code) {
        code -> Int4,
        description -> Nullable<Varchar>,
    }
}
