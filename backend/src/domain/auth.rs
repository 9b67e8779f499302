//! Shared-secret authorization.
//!
//! Mutating operations require the caller to present the configured token.
//! Only a SHA-256 digest of the secret is retained; the raw value is zeroed
//! as soon as the digest is computed.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::Error;

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Errors raised while constructing a [`SharedSecret`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SharedSecretError {
    /// The configured token is empty or whitespace.
    #[error("shared secret must not be empty")]
    Empty,
}

/// Static token compared against the `Authorization` header.
#[derive(Clone)]
pub struct SharedSecret {
    digest: [u8; 32],
}

fn digest_of(value: &[u8]) -> [u8; 32] {
    Sha256::digest(value).into()
}

impl SharedSecret {
    /// Build a secret from the configured token.
    ///
    /// # Examples
    /// ```
    /// use student_records::domain::SharedSecret;
    ///
    /// let secret = SharedSecret::new("123").expect("non-empty token");
    /// assert!(secret.matches(Some("123")));
    /// assert!(!secret.matches(Some("456")));
    /// assert!(!secret.matches(None));
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self, SharedSecretError> {
        let token = Zeroizing::new(token.into());
        if token.trim().is_empty() {
            return Err(SharedSecretError::Empty);
        }
        Ok(Self {
            digest: digest_of(token.as_bytes()),
        })
    }

    /// Return whether the presented token equals the secret.
    ///
    /// Digests are compared in full so timing does not reveal how much of a
    /// guess matched.
    pub fn matches(&self, presented: Option<&str>) -> bool {
        let Some(presented) = presented else {
            return false;
        };
        let candidate = digest_of(presented.as_bytes());
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0_u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }

    /// Require the presented token, failing with `Unauthorized` otherwise.
    pub fn authorize(&self, presented: Option<&str>) -> Result<(), Error> {
        if self.matches(presented) {
            Ok(())
        } else {
            Err(Error::unauthorized("missing or invalid authorization token"))
        }
    }

    /// Truncated hex digest identifying the active secret in logs.
    pub fn fingerprint(&self) -> String {
        hex::encode(self.digest.get(..FINGERPRINT_BYTES).unwrap_or(&self.digest))
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}
