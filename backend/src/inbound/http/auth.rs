//! Extraction of the shared-secret token from requests.
//!
//! The `Authorization` header is taken verbatim; no scheme prefix is
//! stripped. Comparing it against the secret is the domain's job, so the
//! extractor never fails.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

/// Token presented by the caller, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentedToken(Option<String>);

impl PresentedToken {
    /// Read the token from `req`. Headers that are not valid visible ASCII
    /// count as absent.
    pub fn from_http_request(req: &HttpRequest) -> Self {
        Self(
            req.headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned),
        )
    }

    /// Consume the extractor, yielding the raw token.
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl FromRequest for PresentedToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_http_request(req)))
    }
}
