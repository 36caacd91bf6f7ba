//! Shared error type across wtpolicy crates.

use thiserror::Error;

/// Fault classes (stable API).
///
/// The host only sees a non-zero exit status, so each kind maps to a distinct
/// code to keep faults distinguishable in its logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete request.
    Protocol,
    /// Existing persisted state failed to parse.
    StateCorruption,
    /// Storage location could not be created, read or written.
    Io,
    /// Invalid plugin configuration.
    Config,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Protocol => "PROTOCOL",
            ErrorKind::StateCorruption => "STATE_CORRUPTION",
            ErrorKind::Io => "IO",
            ErrorKind::Config => "CONFIG",
        }
    }

    /// Process exit status for this kind. Never zero.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Protocol => 2,
            ErrorKind::StateCorruption => 3,
            ErrorKind::Io => 4,
            ErrorKind::Config => 5,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Unified error type used by core and plugin.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("protocol: {0}")]
    Protocol(String),
    #[error("state corruption: {0}")]
    StateCorruption(String),
    #[error("io: {0}")]
    Io(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl PolicyError {
    /// Map error to its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PolicyError::Protocol(_) => ErrorKind::Protocol,
            PolicyError::StateCorruption(_) => ErrorKind::StateCorruption,
            PolicyError::Io(_) => ErrorKind::Io,
            PolicyError::Config(_) | PolicyError::UnsupportedVersion => ErrorKind::Config,
        }
    }
}
