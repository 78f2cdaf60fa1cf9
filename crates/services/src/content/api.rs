use async_trait::async_trait;
use reqwest::Client;

use quran_core::model::ChapterId;

use crate::error::RetrievalError;

use super::wire::{ChapterBody, ChapterListBody, VersesBody};

/// Remote content endpoints behind a seam, so retrieval logic can be
/// exercised against fakes.
///
/// Implementations return wire-shaped bodies; normalization into domain
/// types stays in the retrieval layer above.
#[async_trait]
pub trait QuranApi: Send + Sync {
    /// Fetch the full chapter list.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` on a non-success response or undecodable body.
    async fn chapter_list(&self) -> Result<ChapterListBody, RetrievalError>;

    /// Fetch one chapter record.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` on a non-success response or undecodable body.
    async fn chapter(&self, id: ChapterId) -> Result<ChapterBody, RetrievalError>;

    /// Fetch one page of verses for a chapter, optionally carrying the
    /// given translation resource.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` on a non-success response or undecodable body.
    async fn verses_page(
        &self,
        chapter_id: ChapterId,
        page: u32,
        per_page: u16,
        translation: Option<u32>,
    ) -> Result<VersesBody, RetrievalError>;
}

/// Configuration for the HTTP-backed client.
#[derive(Clone, Debug)]
pub struct ContentConfig {
    pub base_url: String,
    pub language: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.qurancdn.com/api/qdc".into(),
            language: "en".into(),
        }
    }
}

/// `QuranApi` over the real remote service via `reqwest`.
#[derive(Clone)]
pub struct HttpQuranApi {
    client: Client,
    config: ContentConfig,
}

impl HttpQuranApi {
    #[must_use]
    pub fn new(config: ContentConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, RetrievalError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(RetrievalError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

impl Default for HttpQuranApi {
    fn default() -> Self {
        Self::new(ContentConfig::default())
    }
}

#[async_trait]
impl QuranApi for HttpQuranApi {
    async fn chapter_list(&self) -> Result<ChapterListBody, RetrievalError> {
        let url = format!(
            "{}/chapters?language={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.language
        );
        self.get_json(url).await
    }

    async fn chapter(&self, id: ChapterId) -> Result<ChapterBody, RetrievalError> {
        let url = format!(
            "{}/chapters/{}?language={}",
            self.config.base_url.trim_end_matches('/'),
            id,
            self.config.language
        );
        self.get_json(url).await
    }

    async fn verses_page(
        &self,
        chapter_id: ChapterId,
        page: u32,
        per_page: u16,
        translation: Option<u32>,
    ) -> Result<VersesBody, RetrievalError> {
        let mut url = format!(
            "{}/verses/by_chapter/{}?language={}&words=false&fields=text_uthmani&per_page={}&page={}",
            self.config.base_url.trim_end_matches('/'),
            chapter_id,
            self.config.language,
            per_page,
            page
        );
        if let Some(resource) = translation {
            url.push_str(&format!("&translations={resource}"));
        }
        self.get_json(url).await
    }
}
