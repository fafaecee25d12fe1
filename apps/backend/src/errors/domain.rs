//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.
//!
//! Errors here are always data: neither ties nor game-over are modeled as
//! errors anywhere in the engine.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Pokemon,
    Other(String),
}

/// Upstream (entity data source) failure kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UpstreamErrorKind {
    Network,
    Timeout,
    Status(u16),
    Decode,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// The round selector ran out of bounded attempts to find two
    /// distinct entities
    SelectionExhausted(String),
    /// Entity fetch failed; never retried inside the core
    Upstream(UpstreamErrorKind, String),
    /// Progress store read/write failure
    Store(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::SelectionExhausted(d) => write!(f, "selection exhausted: {d}"),
            DomainError::Upstream(kind, d) => write!(f, "upstream {kind:?}: {d}"),
            DomainError::Store(d) => write!(f, "store error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn selection_exhausted(detail: impl Into<String>) -> Self {
        Self::SelectionExhausted(detail.into())
    }
    pub fn upstream(kind: UpstreamErrorKind, detail: impl Into<String>) -> Self {
        Self::Upstream(kind, detail.into())
    }
    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store(detail.into())
    }
}
