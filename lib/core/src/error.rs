use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. The presentation layer matches
// on these — never on the human-readable message string.

/// Stable error code constants.
///
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const SESSION_EXPIRED: &str = "SESSION_EXPIRED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const FETCH_FAILED: &str = "FETCH_FAILED";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── Error ───────────────────────────────────────────────────────────

/// Unified error type used across the console core.
///
/// Each variant maps to a stable error code (see [`error_code`]).
/// Note that a resolved permission degree of zero is *not* an error —
/// a hidden navigational item is normal, expected state.
#[derive(Error, Debug)]
pub enum Error {
    /// Login was rejected; no session was created.
    #[error("{0}")]
    InvalidCredentials(String),

    /// A token check failed after login; the session has been cleared
    /// and the user must re-authenticate. Never retried automatically.
    #[error("session expired")]
    SessionExpired,

    /// Authenticated but the server refused the operation.
    #[error("{0}")]
    PermissionDenied(String),

    /// Resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Input or selection is invalid.
    #[error("{0}")]
    Validation(String),

    /// A list/CRUD call failed (network or server error). Session,
    /// context, and permission state remain unchanged.
    #[error("{0}")]
    Fetch(String),

    /// Unexpected internal error.
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidCredentials(_) => error_code::INVALID_CREDENTIALS,
            Error::SessionExpired => error_code::SESSION_EXPIRED,
            Error::PermissionDenied(_) => error_code::PERMISSION_DENIED,
            Error::NotFound(_) => error_code::NOT_FOUND,
            Error::Validation(_) => error_code::VALIDATION_FAILED,
            Error::Fetch(_) => error_code::FETCH_FAILED,
            Error::Internal(_) => error_code::INTERNAL,
        }
    }

    /// Map an HTTP status from an external collaborator to an error.
    ///
    /// A 401 after login means the token is no longer valid, so it maps
    /// to [`Error::SessionExpired`]; callers on the login path translate
    /// that back to [`Error::InvalidCredentials`].
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Error::SessionExpired,
            403 => Error::PermissionDenied(message),
            404 => Error::NotFound(message),
            400 | 422 => Error::Validation(message),
            _ => Error::Fetch(format!("HTTP {}: {}", status, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_mapping() {
        assert_eq!(Error::InvalidCredentials("x".into()).error_code(), "INVALID_CREDENTIALS");
        assert_eq!(Error::SessionExpired.error_code(), "SESSION_EXPIRED");
        assert_eq!(Error::PermissionDenied("x".into()).error_code(), "PERMISSION_DENIED");
        assert_eq!(Error::NotFound("x".into()).error_code(), "NOT_FOUND");
        assert_eq!(Error::Validation("x".into()).error_code(), "VALIDATION_FAILED");
        assert_eq!(Error::Fetch("x".into()).error_code(), "FETCH_FAILED");
        assert_eq!(Error::Internal("x".into()).error_code(), "INTERNAL");
    }

    #[test]
    fn from_status_mapping() {
        assert!(matches!(Error::from_status(401, "expired"), Error::SessionExpired));
        assert!(matches!(Error::from_status(403, "no"), Error::PermissionDenied(_)));
        assert!(matches!(Error::from_status(404, "gone"), Error::NotFound(_)));
        assert!(matches!(Error::from_status(400, "bad"), Error::Validation(_)));
        assert!(matches!(Error::from_status(422, "bad"), Error::Validation(_)));
        assert!(matches!(Error::from_status(500, "boom"), Error::Fetch(_)));
    }

    #[test]
    fn fetch_message_includes_status() {
        let e = Error::from_status(502, "bad gateway");
        assert_eq!(e.to_string(), "HTTP 502: bad gateway");
    }

    #[test]
    fn error_display_is_just_message() {
        assert_eq!(Error::NotFound("color 123".into()).to_string(), "color 123");
        assert_eq!(Error::Validation("bad input".into()).to_string(), "bad input");
        assert_eq!(Error::SessionExpired.to_string(), "session expired");
    }
}
