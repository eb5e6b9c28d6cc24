//! Shared error type across govguard crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed message.
    BadRequest,
    /// Well-formed request refused by an admission stage.
    InvalidRequest,
    /// Configuration rejected at load time.
    ConfigInvalid,
    /// Unsupported envelope or config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidRequest => "INVALID_REQUEST",
            ClientCode::ConfigInvalid => "CONFIG_INVALID",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GovGuardError>;

/// Unified error type used by core and node.
#[derive(Debug, Error)]
pub enum GovGuardError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl GovGuardError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GovGuardError::BadRequest(_) => ClientCode::BadRequest,
            GovGuardError::InvalidRequest(_) => ClientCode::InvalidRequest,
            GovGuardError::Config(_) => ClientCode::ConfigInvalid,
            GovGuardError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            GovGuardError::Internal(_) => ClientCode::Internal,
        }
    }
}
