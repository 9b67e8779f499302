//! Lenient JSON body extraction.
//!
//! Handlers must check the token before looking at the body, so body
//! problems cannot surface as extractor errors. [`JsonPayload`] always
//! succeeds: a missing, unreadable or unparsable body becomes `None` and is
//! reported later as a validation failure. So does a body whose
//! `Content-Type` is not JSON, whatever it contains.

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;
use tracing::debug;

/// Largest body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Parsed request body, absent when the body is empty or not JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonPayload(Option<Value>);

impl JsonPayload {
    /// Decode raw body bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self(None);
        }
        match serde_json::from_slice(bytes) {
            Ok(value) => Self(Some(value)),
            Err(err) => {
                debug!(error = %err, "request body is not valid JSON");
                Self(None)
            }
        }
    }

    /// Consume the extractor, yielding the decoded value.
    pub fn into_inner(self) -> Option<Value> {
        self.0
    }
}

/// Whether a media type (without parameters) names JSON.
///
/// Accepts `application/json` and structured `application/*+json` types.
fn declares_json(content_type: &str) -> bool {
    let essence = content_type.trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl FromRequest for JsonPayload {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !declares_json(req.content_type()) {
            debug!(content_type = req.content_type(), "request body is not declared as JSON");
            return Box::pin(async { Ok(Self(None)) });
        }
        let bytes = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            match bytes.await {
                Ok(bytes) if bytes.len() <= MAX_BODY_BYTES => Ok(Self::from_bytes(&bytes)),
                Ok(bytes) => {
                    debug!(len = bytes.len(), "request body too large");
                    Ok(Self(None))
                }
                Err(err) => {
                    debug!(error = %err, "request body could not be read");
                    Ok(Self(None))
                }
            }
        })
    }
}
