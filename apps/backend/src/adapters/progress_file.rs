//! JSON-file progress store.
//!
//! Single-writer persistence for the monotone records and the resumable
//! counters. Writes take an exclusive advisory lock so a concurrent reader
//! never observes a torn file; semantics are last-write-wins.

use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs4::fs_std::FileExt;

use crate::domain::SavedProgress;
use crate::error::AppError;
use crate::errors::DomainError;
use crate::services::progress::ProgressStore;

const DEFAULT_PROGRESS_FILE: &str = "statclash_progress.json";

pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from `PROGRESS_FILE`, defaulting to the working directory.
    pub fn from_env() -> Result<Self, AppError> {
        let path = std::env::var("PROGRESS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PROGRESS_FILE));
        Ok(Self::new(path))
    }
}

fn read_progress(path: &Path) -> Result<Option<SavedProgress>, DomainError> {
    let mut file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DomainError::store(format!("open {}: {e}", path.display()))),
    };

    file.lock_shared()
        .map_err(|e| DomainError::store(format!("lock {}: {e}", path.display())))?;
    let mut raw = String::new();
    let result = file.read_to_string(&mut raw);
    let _ = FileExt::unlock(&file);
    result.map_err(|e| DomainError::store(format!("read {}: {e}", path.display())))?;

    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| DomainError::store(format!("corrupt progress file {}: {e}", path.display())))
}

fn write_progress(path: &Path, progress: &SavedProgress) -> Result<(), DomainError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainError::store(format!("mkdir {}: {e}", parent.display())))?;
        }
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)
        .map_err(|e| DomainError::store(format!("open {}: {e}", path.display())))?;

    file.lock_exclusive()
        .map_err(|e| DomainError::store(format!("lock {}: {e}", path.display())))?;
    let result = (|| -> std::io::Result<()> {
        let mut file = &file;
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        let body = serde_json::to_vec_pretty(progress).expect("progress serializes");
        file.write_all(&body)?;
        file.flush()
    })();
    let _ = FileExt::unlock(&file);

    result.map_err(|e| DomainError::store(format!("write {}: {e}", path.display())))
}

#[async_trait]
impl ProgressStore for JsonProgressStore {
    async fn load(&self) -> Result<Option<SavedProgress>, DomainError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_progress(&path))
            .await
            .map_err(|e| DomainError::store(format!("load task failed: {e}")))?
    }

    async fn save(&self, progress: &SavedProgress) -> Result<(), DomainError> {
        let path = self.path.clone();
        let progress = *progress;
        tokio::task::spawn_blocking(move || write_progress(&path, &progress))
            .await
            .map_err(|e| DomainError::store(format!("save task failed: {e}")))?
    }
}
