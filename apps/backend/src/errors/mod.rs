//! Error handling for the Statclash backend.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, NotFoundKind, UpstreamErrorKind};
pub use error_code::ErrorCode;
