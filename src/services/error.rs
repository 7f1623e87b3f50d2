//! Failure contract for capability resolution.
//!
//! A resolution failure is a wiring defect, not a transient condition: errors
//! are raised synchronously at the failed lookup and are never retried,
//! suppressed, or mapped to a default instance. Callers that can tolerate
//! absence use the optional or enumerating lookups, which do not produce
//! errors at all.

use crate::services::id::ServiceId;
use thiserror::Error;

/// Errors raised by the resolution core and the records it hosts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required capability has no registered handle.
    ///
    /// Surfacing this during startup names the exact capability the wiring
    /// forgot; hosts treat it as fatal.
    #[error("no service registered for capability '{0}'")]
    NotFound(ServiceId),
    /// A required argument or record field was absent at a call site.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}
