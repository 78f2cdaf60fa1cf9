use async_trait::async_trait;
use quran_core::model::ReadingProgress;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
///
/// Note that an unparsable persisted blob is *not* an error: `load`
/// recovers it as the default aggregate. Only infrastructure failures
/// (connection, write rejection) surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the singleton reading-progress record.
///
/// The aggregate is read on every metrics query and rewritten wholesale on
/// every mutation; implementations must replace the stored value atomically
/// rather than appending or patching.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the current aggregate.
    ///
    /// A missing or unparsable stored record yields the default aggregate
    /// (empty collections, no last-read pointer) instead of an error, so
    /// corruption or absence never crashes the caller.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` only when the medium itself is
    /// unreachable.
    async fn load(&self) -> Result<ReadingProgress, StorageError>;

    /// Persist the full aggregate, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be serialized or stored;
    /// on error the previously persisted value is left untouched.
    async fn save(&self, progress: &ReadingProgress) -> Result<(), StorageError>;
}

/// Parses a stored blob, falling back to the default aggregate when the
/// content is unreadable. Shared by all backends so the corruption policy
/// stays in one place.
pub(crate) fn parse_or_default(raw: &str) -> ReadingProgress {
    match serde_json::from_str(raw) {
        Ok(progress) => progress,
        Err(err) => {
            tracing::warn!(error = %err, "stored progress is unparsable, starting fresh");
            ReadingProgress::default()
        }
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Holds the serialized blob rather than the deserialized aggregate so it
/// exercises the same parse-or-default path as durable backends.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    blob: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored blob with arbitrary bytes, bypassing
    /// serialization. Lets tests stage corrupt or legacy-schema records.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_raw_blob(&self, raw: impl Into<String>) {
        let mut guard = self.blob.lock().expect("blob lock poisoned");
        *guard = Some(raw.into());
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<ReadingProgress, StorageError> {
        let guard = self
            .blob
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(match guard.as_deref() {
            Some(raw) => parse_or_default(raw),
            None => ReadingProgress::default(),
        })
    }

    async fn save(&self, progress: &ReadingProgress) -> Result<(), StorageError> {
        let raw = serde_json::to_string(progress)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut guard = self
            .blob
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(raw);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Arc::new(InMemoryRepository::new()),
        }
    }
}
