//! Content retrieval and normalization over the remote chapter/verse service.

use std::collections::HashMap;
use std::sync::Arc;

use quran_core::model::{Chapter, ChapterId, Translation, Verse, VerseKey};

use crate::error::RetrievalError;

mod api;
pub mod wire;

pub use api::{ContentConfig, HttpQuranApi, QuranApi};

/// Verses requested per page, matching the remote default.
pub const DEFAULT_PAGE_SIZE: u16 = 20;

/// Translation resource requested alongside the canonical text
/// (Dr. Mustafa Khattab, The Clear Quran).
pub const DEFAULT_TRANSLATION_RESOURCE: u32 = 131;

/// One normalized page of verses plus the reported page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersesPage {
    pub verses: Vec<Verse>,
    pub total_pages: u32,
}

/// Fetches and normalizes chapter/verse data.
///
/// Verse pages reconcile two independently failing remote responses: the
/// canonical-text request is authoritative for verse identity, ordering,
/// and page count, while the translation request is best-effort and merged
/// in by verse key.
#[derive(Clone)]
pub struct ContentService {
    api: Arc<dyn QuranApi>,
    page_size: u16,
    translation_resource: u32,
}

impl ContentService {
    #[must_use]
    pub fn new(api: Arc<dyn QuranApi>) -> Self {
        Self {
            api,
            page_size: DEFAULT_PAGE_SIZE,
            translation_resource: DEFAULT_TRANSLATION_RESOURCE,
        }
    }

    /// Override the page size and translation resource.
    #[must_use]
    pub fn with_options(api: Arc<dyn QuranApi>, page_size: u16, translation_resource: u32) -> Self {
        Self {
            api,
            page_size,
            translation_resource,
        }
    }

    /// Fetch the ordered chapter list.
    ///
    /// An empty list is only ever a real empty result: any failure surfaces
    /// as an error instead of a partial list.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` when the request fails or a chapter record
    /// cannot be normalized.
    pub async fn fetch_chapter_list(&self) -> Result<Vec<Chapter>, RetrievalError> {
        let body = self.api.chapter_list().await?;
        body.chapters
            .into_iter()
            .map(wire::WireChapter::into_chapter)
            .collect()
    }

    /// Fetch and normalize a single chapter record.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` when the request fails or the record cannot
    /// be normalized.
    pub async fn fetch_chapter(&self, id: ChapterId) -> Result<Chapter, RetrievalError> {
        self.api.chapter(id).await?.chapter.into_chapter()
    }

    /// Fetch one page of verses with translations merged in.
    ///
    /// The text request and the translation request run concurrently. The
    /// text response decides the page's existence, verse order, and total
    /// page count; if it fails the whole call fails. A failed or empty
    /// translation response degrades to verses without translations.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` only when the authoritative text request
    /// fails.
    pub async fn fetch_verses_page(
        &self,
        chapter_id: ChapterId,
        page: u32,
    ) -> Result<VersesPage, RetrievalError> {
        let (text, translated) = tokio::join!(
            self.api.verses_page(chapter_id, page, self.page_size, None),
            self.api.verses_page(
                chapter_id,
                page,
                self.page_size,
                Some(self.translation_resource)
            ),
        );

        let text = text?;
        let translation_map: HashMap<String, String> = match translated {
            Ok(body) => body
                .verses
                .into_iter()
                .filter_map(|v| {
                    v.translations
                        .into_iter()
                        .next()
                        .map(|t| (v.verse_key, t.text))
                })
                .collect(),
            Err(err) => {
                tracing::warn!(
                    chapter = %chapter_id,
                    page,
                    error = %err,
                    "translation fetch failed, returning verses without translations"
                );
                HashMap::new()
            }
        };

        let total_pages = text.total_pages();
        let verses = text
            .verses
            .into_iter()
            .map(|v| {
                let translations = translation_map
                    .get(&v.verse_key)
                    .map(|t| {
                        vec![Translation {
                            resource_id: self.translation_resource,
                            text: t.clone(),
                        }]
                    })
                    .unwrap_or_default();
                Verse {
                    id: v.id,
                    chapter_id,
                    verse_number: v.verse_number,
                    key: VerseKey::new(chapter_id, v.verse_number),
                    text_uthmani: v.text_uthmani,
                    translations,
                }
            })
            .collect();

        Ok(VersesPage {
            verses,
            total_pages,
        })
    }
}
