//! Error codes for the Statclash backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses. Add new codes here; never pass ad-hoc strings
//! as error codes.

use core::fmt;

/// Centralized error codes for the Statclash backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Malformed session id in the path
    InvalidSessionId,
    /// Guess direction was neither "higher" nor "lower"
    InvalidDirection,
    /// General validation error
    ValidationError,

    // Resources
    /// No session with the given id
    SessionNotFound,

    // Round generation
    /// Selector exhausted its bounded attempts
    SelectionExhausted,

    // Collaborators
    /// Entity data source failed (network, decode, not-found)
    UpstreamUnavailable,
    /// Progress store read/write failure
    StoreError,

    // Operational
    /// Configuration error
    ConfigError,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidSessionId => "INVALID_SESSION_ID",
            ErrorCode::InvalidDirection => "INVALID_DIRECTION",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::SelectionExhausted => "SELECTION_EXHAUSTED",
            ErrorCode::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ErrorCode::StoreError => "STORE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InternalError => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
