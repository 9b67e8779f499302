//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every endpoint, currently the
//! per-request trace identifier and its logging span.

pub mod trace;

pub use trace::{Trace, TraceId, TRACE_ID_HEADER};
