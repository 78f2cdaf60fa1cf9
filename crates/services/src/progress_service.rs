use std::sync::Arc;

use quran_core::metrics;
use quran_core::model::{BookmarkDraft, ChapterId, ReadingProgress, VerseKey};
use storage::repository::ProgressRepository;

use crate::Clock;
use crate::error::ProgressServiceError;

/// The single mutation surface over the persisted reading progress.
///
/// Every mutation is a read-modify-write against the latest loaded snapshot
/// and ends by reloading the snapshot for the caller, so returned values
/// always reflect what was actually persisted. There is no concurrency
/// control: the design assumes one active caller per device.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, progress }
    }

    /// Read-only snapshot of the current aggregate.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the store is unreachable.
    pub async fn load(&self) -> Result<ReadingProgress, ProgressServiceError> {
        Ok(self.progress.load().await?)
    }

    /// Mark one verse as read and move the last-read pointer to it.
    ///
    /// Inserting an already-read verse is a no-op for the read set, but the
    /// last-read pointer is updated unconditionally. After persisting, the
    /// chapter's completion is re-evaluated against the just-persisted
    /// state, so marking every verse of a chapter converges to completion.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if load or save fails; on a
    /// failed save the previously persisted aggregate is untouched.
    pub async fn mark_read(
        &self,
        chapter_id: ChapterId,
        verse_number: u16,
        total_verses: u16,
    ) -> Result<ReadingProgress, ProgressServiceError> {
        let mut progress = self.progress.load().await?;
        progress.insert_read(VerseKey::new(chapter_id, verse_number));
        progress.set_last_read(chapter_id, verse_number);
        self.progress.save(&progress).await?;

        self.mark_chapter_complete(chapter_id, total_verses).await
    }

    /// Record the chapter as completed when every verse `1..=total_verses`
    /// is in the read set.
    ///
    /// Completion is a monotonic cache over the read set: once recorded it
    /// is never revoked, and nothing is persisted when the chapter is
    /// incomplete or already recorded.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if load or save fails.
    pub async fn mark_chapter_complete(
        &self,
        chapter_id: ChapterId,
        total_verses: u16,
    ) -> Result<ReadingProgress, ProgressServiceError> {
        let mut progress = self.progress.load().await?;
        if progress.complete_chapter_if_read(chapter_id, total_verses) {
            self.progress.save(&progress).await?;
        }
        Ok(self.progress.load().await?)
    }

    /// Strict bookmark toggle: removes the bookmark for the draft's verse
    /// key if present, otherwise inserts it stamped with the current
    /// instant. Callers needing add-only or remove-only semantics must
    /// check `is_bookmarked` first.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if load or save fails.
    pub async fn toggle_bookmark(
        &self,
        draft: BookmarkDraft,
    ) -> Result<ReadingProgress, ProgressServiceError> {
        let mut progress = self.progress.load().await?;
        progress.toggle_bookmark(draft, self.clock.now());
        self.progress.save(&progress).await?;
        Ok(self.progress.load().await?)
    }

    /// Unconditionally move the "resume here" pointer, independent of
    /// whether the verse was ever marked read. Used on plain navigation.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if load or save fails.
    pub async fn set_last_read(
        &self,
        chapter_id: ChapterId,
        verse_number: u16,
    ) -> Result<ReadingProgress, ProgressServiceError> {
        let mut progress = self.progress.load().await?;
        progress.set_last_read(chapter_id, verse_number);
        self.progress.save(&progress).await?;
        Ok(self.progress.load().await?)
    }

    /// True when the verse has been marked read.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the store is unreachable.
    pub async fn is_verse_read(&self, key: VerseKey) -> Result<bool, ProgressServiceError> {
        let progress = self.progress.load().await?;
        Ok(metrics::is_verse_read(&progress, key))
    }

    /// True when a bookmark exists for the verse.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the store is unreachable.
    pub async fn is_bookmarked(&self, key: VerseKey) -> Result<bool, ProgressServiceError> {
        let progress = self.progress.load().await?;
        Ok(metrics::is_bookmarked(&progress, key))
    }

    /// Rounded read percentage for one chapter.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the store is unreachable.
    pub async fn chapter_percent(
        &self,
        chapter_id: ChapterId,
        verses_count: u16,
    ) -> Result<u8, ProgressServiceError> {
        let progress = self.progress.load().await?;
        Ok(metrics::chapter_percent(&progress, chapter_id, verses_count))
    }

    /// Rounded read percentage across the whole corpus.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the store is unreachable.
    pub async fn overall_percent(&self) -> Result<u8, ProgressServiceError> {
        let progress = self.progress.load().await?;
        Ok(metrics::overall_percent(&progress))
    }
}
