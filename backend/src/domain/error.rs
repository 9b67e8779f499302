//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and the `{"erro": ...}` envelope; nothing here knows about Actix.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::middleware::TraceId;

/// Stable machine-readable error code describing the failure category.
///
/// The serialised names are the wire identifiers clients match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The shared secret is missing or does not match.
    #[serde(rename = "NAO_AUTORIZADO")]
    Unauthorized,
    /// The payload is absent, malformed, or fails field validation.
    #[serde(rename = "ERRO_VALIDACAO")]
    ValidationError,
    /// No record exists for the requested code.
    #[serde(rename = "NAO_ENCONTRADO")]
    NotFound,
    /// Anything raised below the controller, including storage failures.
    #[serde(rename = "ERRO_INTERNO")]
    InternalError,
}

impl ErrorCode {
    /// Wire identifier for this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "NAO_AUTORIZADO",
            Self::ValidationError => "ERRO_VALIDACAO",
            Self::NotFound => "NAO_ENCONTRADO",
            Self::InternalError => "ERRO_INTERNO",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error value returned by every controller operation.
///
/// `message` and `details` are meant for logs. Adapters decide how much of
/// them reaches a client; the HTTP adapter only exposes [`ErrorCode`].
///
/// # Examples
/// ```
/// use student_records::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("student 7 does not exist");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the trace identifier of the current request, if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message for logs.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier of the request that produced the error.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use student_records::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::validation("bad").with_details(json!({ "field": "nome" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::ValidationError`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}
