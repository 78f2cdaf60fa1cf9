//! Strictly-typed intermediates for the remote content schema.
//!
//! The remote service speaks snake_case JSON; this module is the only place
//! that vocabulary is allowed to appear. Malformed payloads fail here, at
//! the normalization boundary, instead of leaking defaults into the domain
//! model.

use serde::Deserialize;

use quran_core::model::{Chapter, ChapterId, RevelationPlace, TranslatedName};

use crate::error::RetrievalError;

#[derive(Debug, Deserialize)]
pub struct ChapterListBody {
    pub chapters: Vec<WireChapter>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterBody {
    pub chapter: WireChapter,
}

#[derive(Debug, Deserialize)]
pub struct WireChapter {
    pub id: u16,
    pub name_simple: String,
    pub name_arabic: String,
    pub name_complex: String,
    pub verses_count: u16,
    pub revelation_place: String,
    #[serde(default)]
    pub translated_name: Option<WireTranslatedName>,
}

#[derive(Debug, Deserialize)]
pub struct WireTranslatedName {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language_name: Option<String>,
}

impl WireChapter {
    /// Normalize into the domain `Chapter` shape.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError::MalformedResponse` when the revelation
    /// place is not one of the two known categories.
    pub fn into_chapter(self) -> Result<Chapter, RetrievalError> {
        let revelation_place: RevelationPlace =
            self.revelation_place.parse().map_err(|_| {
                RetrievalError::MalformedResponse(format!(
                    "unknown revelation place {:?} for chapter {}",
                    self.revelation_place, self.id
                ))
            })?;
        let translated_name = self.translated_name.unwrap_or(WireTranslatedName {
            name: None,
            language_name: None,
        });
        Ok(Chapter {
            id: ChapterId::new(self.id),
            name_simple: self.name_simple,
            name_arabic: self.name_arabic,
            name_complex: self.name_complex,
            verses_count: self.verses_count,
            revelation_place,
            translated_name: TranslatedName {
                name: translated_name.name.unwrap_or_default(),
                language_name: translated_name.language_name.unwrap_or_default(),
            },
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct VersesBody {
    #[serde(default)]
    pub verses: Vec<WireVerse>,
    #[serde(default)]
    pub pagination: Option<WirePagination>,
}

impl VersesBody {
    /// Reported total page count, defaulting to 1 when absent.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.pagination
            .as_ref()
            .and_then(|p| p.total_pages)
            .unwrap_or(1)
    }
}

#[derive(Debug, Deserialize)]
pub struct WirePagination {
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct WireVerse {
    pub id: u32,
    pub verse_number: u16,
    pub verse_key: String,
    #[serde(default)]
    pub text_uthmani: String,
    #[serde(default)]
    pub translations: Vec<WireTranslation>,
}

#[derive(Debug, Deserialize)]
pub struct WireTranslation {
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_chapter_fields() {
        let wire: WireChapter = serde_json::from_str(
            r#"{
                "id": 1,
                "name_simple": "Al-Fatihah",
                "name_arabic": "الفاتحة",
                "name_complex": "Al-Fātiĥah",
                "verses_count": 7,
                "revelation_place": "makkah",
                "translated_name": {"name": "The Opener", "language_name": "english"}
            }"#,
        )
        .unwrap();
        let chapter = wire.into_chapter().unwrap();
        assert_eq!(chapter.id, ChapterId::new(1));
        assert_eq!(chapter.verses_count, 7);
        assert_eq!(chapter.revelation_place, RevelationPlace::Makkah);
        assert_eq!(chapter.translated_name.name, "The Opener");
    }

    #[test]
    fn missing_translated_name_defaults_to_empty() {
        let wire: WireChapter = serde_json::from_str(
            r#"{
                "id": 2,
                "name_simple": "Al-Baqarah",
                "name_arabic": "البقرة",
                "name_complex": "Al-Baqarah",
                "verses_count": 286,
                "revelation_place": "madinah"
            }"#,
        )
        .unwrap();
        let chapter = wire.into_chapter().unwrap();
        assert_eq!(chapter.translated_name.name, "");
        assert_eq!(chapter.translated_name.language_name, "");
    }

    #[test]
    fn unknown_revelation_place_is_rejected() {
        let wire = WireChapter {
            id: 3,
            name_simple: "X".into(),
            name_arabic: "X".into(),
            name_complex: "X".into(),
            verses_count: 1,
            revelation_place: "atlantis".into(),
            translated_name: None,
        };
        assert!(matches!(
            wire.into_chapter(),
            Err(RetrievalError::MalformedResponse(_))
        ));
    }

    #[test]
    fn total_pages_defaults_to_one() {
        let body: VersesBody = serde_json::from_str(r#"{"verses": []}"#).unwrap();
        assert_eq!(body.total_pages(), 1);

        let body: VersesBody =
            serde_json::from_str(r#"{"verses": [], "pagination": {"total_pages": 15}}"#).unwrap();
        assert_eq!(body.total_pages(), 15);
    }

    #[test]
    fn verse_defaults_optional_wire_fields() {
        let verse: WireVerse =
            serde_json::from_str(r#"{"id": 9, "verse_number": 2, "verse_key": "2:2"}"#).unwrap();
        assert_eq!(verse.text_uthmani, "");
        assert!(verse.translations.is_empty());
    }
}
