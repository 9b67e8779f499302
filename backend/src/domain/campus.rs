//! Campus lookup records.

use serde::Serialize;

/// Row of the campus lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampusRecord {
    #[serde(rename = "codigo")]
    code: i32,
    #[serde(rename = "descricao")]
    description: Option<String>,
}

impl CampusRecord {
    /// Build a campus record. The description may be absent.
    pub const fn new(code: i32, description: Option<String>) -> Self {
        Self { code, description }
    }

    /// Campus code.
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Human-readable campus description, when recorded.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
