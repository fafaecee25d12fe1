//! Seam to the persistent progress store.

use async_trait::async_trait;

use crate::domain::SavedProgress;
use crate::errors::DomainError;

/// Persistent key-value storage for game progress.
///
/// `load` runs once at session start; `save` runs whenever score, streak or
/// the monotone records change. Single writer, last write wins.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// `Ok(None)` means no progress has been saved yet.
    async fn load(&self) -> Result<Option<SavedProgress>, DomainError>;

    async fn save(&self, progress: &SavedProgress) -> Result<(), DomainError>;
}
