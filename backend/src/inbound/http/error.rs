//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! return it directly. Clients only ever see `{"erro": CODE}`; the message
//! and details go to the log.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode};
use crate::middleware::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) erro: ErrorCode,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_error(err: &Error) {
    if matches!(err.code(), ErrorCode::InternalError) {
        error!(
            code = %err.code(),
            message = err.message(),
            details = ?err.details(),
            trace_id = err.trace_id(),
            "request failed"
        );
    } else {
        debug!(
            code = %err.code(),
            message = err.message(),
            details = ?err.details(),
            "request rejected"
        );
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_error(self);

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody { erro: self.code() })
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        Self::internal(format!("actix error promoted to domain error: {err}"))
    }
}

/// Fallback for unmatched routes, so they answer with the same envelope.
pub async fn route_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("no route matches the request"))
}
