use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::content::{ContentService, HttpQuranApi};
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles the app-facing services over one storage backend and one
/// remote content client.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    content: Arc<ContentService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the live content API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(storage, clock))
    }

    /// Build services over in-memory storage, for tests and prototyping.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(Storage::in_memory(), clock)
    }

    fn from_storage(storage: Storage, clock: Clock) -> Self {
        let progress = Arc::new(ProgressService::new(clock, Arc::clone(&storage.progress)));
        let content = Arc::new(ContentService::new(Arc::new(HttpQuranApi::default())));
        Self { progress, content }
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }

    #[must_use]
    pub fn content(&self) -> &ContentService {
        &self.content
    }
}
