//! Student record data model.
//!
//! A [`StudentDraft`] is the validated, code-less content of a record as
//! supplied by a client. The store assigns a [`StudentCode`] on insert and
//! hands back a [`StudentRecord`].
//!
//! Wire names follow the public API: `codigo`, `nome`, `email`, `endereco`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload field carrying the student name.
pub const NAME_FIELD: &str = "nome";
/// Payload field carrying the optional email address.
pub const EMAIL_FIELD: &str = "email";
/// Payload field carrying the optional postal address.
pub const ADDRESS_FIELD: &str = "endereco";

const KNOWN_FIELDS: [&str; 3] = [NAME_FIELD, EMAIL_FIELD, ADDRESS_FIELD];

/// Validation errors raised while checking a student payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    /// The payload is absent or is not a JSON object.
    NotAnObject,
    /// The payload carries a field the schema does not define.
    UnknownField {
        /// Offending key.
        field: String,
    },
    /// A known field has the wrong JSON type.
    InvalidType {
        /// Field with the wrong type.
        field: &'static str,
    },
    /// `nome` is absent.
    MissingName,
    /// `nome` is blank once trimmed.
    EmptyName,
    /// `email` does not look like `local@domain`.
    InvalidEmail,
}

impl StudentValidationError {
    /// Field the failure relates to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::NotAnObject => None,
            Self::UnknownField { field } => Some(field.as_str()),
            Self::InvalidType { field } => Some(*field),
            Self::MissingName | Self::EmptyName => Some(NAME_FIELD),
            Self::InvalidEmail => Some(EMAIL_FIELD),
        }
    }

    /// Stable identifier of the failure, used in log details.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotAnObject => "not_an_object",
            Self::UnknownField { .. } => "unknown_field",
            Self::InvalidType { .. } => "invalid_type",
            Self::MissingName => "missing_field",
            Self::EmptyName => "empty_field",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "payload must be a JSON object"),
            Self::UnknownField { field } => write!(f, "unknown field: {field}"),
            Self::InvalidType { field } => write!(f, "{field} must be a string"),
            Self::MissingName => write!(f, "missing required field: {NAME_FIELD}"),
            Self::EmptyName => write!(f, "{NAME_FIELD} must not be empty"),
            Self::InvalidEmail => write!(f, "{EMAIL_FIELD} must look like local@domain"),
        }
    }
}

impl std::error::Error for StudentValidationError {}

/// Store-assigned identifier of a student record.
///
/// Codes are positive and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentCode(i32);

impl StudentCode {
    /// Wrap a raw code, rejecting zero and negative values.
    pub const fn new(value: i32) -> Option<Self> {
        if value > 0 { Some(Self(value)) } else { None }
    }

    /// Raw integer value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Parse a code from a path segment.
    ///
    /// # Examples
    /// ```
    /// use student_records::domain::StudentCode;
    ///
    /// assert_eq!(StudentCode::parse("12").map(StudentCode::value), Some(12));
    /// assert!(StudentCode::parse("abc").is_none());
    /// assert!(StudentCode::parse("-1").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i32>().ok().and_then(Self::new)
    }
}

impl fmt::Display for StudentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank student name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentName(String);

impl StudentName {
    /// Validate and construct a name. The stored value is kept as given.
    pub fn new(name: impl Into<String>) -> Result<Self, StudentValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StudentValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<StudentName> for String {
    fn from(value: StudentName) -> Self {
        value.0
    }
}

impl TryFrom<String> for StudentName {
    type Error = StudentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local part, '@', then at least two dot-separated labels.
        match Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$") {
            Ok(re) => re,
            Err(err) => panic!("email regex failed to compile: {err}"),
        }
    })
}

/// Email address matching a basic `local@domain` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an email address.
    ///
    /// # Examples
    /// ```
    /// use student_records::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("josesousa@email.com").is_ok());
    /// assert!(EmailAddress::new("josesousa.com").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, StudentValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(StudentValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = StudentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated record content without a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    name: StudentName,
    email: Option<EmailAddress>,
    address: Option<String>,
}

impl StudentDraft {
    /// Assemble a draft from already validated parts.
    pub const fn new(name: StudentName, email: Option<EmailAddress>, address: Option<String>) -> Self {
        Self {
            name,
            email,
            address,
        }
    }

    /// Validate the raw strings of a stored or constructed record.
    pub fn try_from_parts(
        name: impl Into<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Result<Self, StudentValidationError> {
        Ok(Self::new(
            StudentName::new(name)?,
            email.map(EmailAddress::new).transpose()?,
            address,
        ))
    }

    /// Run the payload schema check and build a draft.
    ///
    /// The check runs on the untyped JSON value: the payload must be an
    /// object, carry only known fields, hold strings (or `null` for the
    /// optional fields), and satisfy the name and email rules.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use student_records::domain::{StudentDraft, StudentValidationError};
    ///
    /// let draft = StudentDraft::from_payload(&json!({ "nome": "Jose Silva" }))
    ///     .expect("name alone is enough");
    /// assert_eq!(draft.name().as_ref(), "Jose Silva");
    ///
    /// let err = StudentDraft::from_payload(&json!({ "teste": 123 })).unwrap_err();
    /// assert_eq!(err, StudentValidationError::UnknownField { field: "teste".into() });
    /// ```
    pub fn from_payload(payload: &Value) -> Result<Self, StudentValidationError> {
        let fields = payload
            .as_object()
            .ok_or(StudentValidationError::NotAnObject)?;

        if let Some(unknown) = fields.keys().find(|key| !KNOWN_FIELDS.contains(&key.as_str())) {
            return Err(StudentValidationError::UnknownField {
                field: unknown.clone(),
            });
        }

        let name = match fields.get(NAME_FIELD) {
            None | Some(Value::Null) => return Err(StudentValidationError::MissingName),
            Some(Value::String(name)) => StudentName::new(name.as_str())?,
            Some(_) => {
                return Err(StudentValidationError::InvalidType { field: NAME_FIELD });
            }
        };
        let email = optional_string(fields, EMAIL_FIELD)?
            .map(EmailAddress::new)
            .transpose()?;
        let address = optional_string(fields, ADDRESS_FIELD)?;

        Ok(Self::new(name, email, address))
    }

    /// Student name.
    pub const fn name(&self) -> &StudentName {
        &self.name
    }

    /// Optional email address.
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Optional postal address.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

fn optional_string(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, StudentValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(StudentValidationError::InvalidType { field }),
    }
}

/// Persisted student record.
///
/// ## Invariants
/// - `code` was assigned by the store and is unique.
/// - Content satisfies the same rules as [`StudentDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    #[serde(rename = "codigo")]
    code: StudentCode,
    #[serde(rename = "nome")]
    name: StudentName,
    email: Option<EmailAddress>,
    #[serde(rename = "endereco")]
    address: Option<String>,
}

impl StudentRecord {
    /// Attach a store-assigned code to validated content.
    pub fn new(code: StudentCode, draft: StudentDraft) -> Self {
        let StudentDraft {
            name,
            email,
            address,
        } = draft;
        Self {
            code,
            name,
            email,
            address,
        }
    }

    /// Store-assigned code.
    pub const fn code(&self) -> StudentCode {
        self.code
    }

    /// Student name.
    pub const fn name(&self) -> &StudentName {
        &self.name
    }

    /// Optional email address.
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Optional postal address.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}
