use serde::{Deserialize, Serialize};

use crate::model::ids::{ChapterId, VerseKey};

/// One alternate-language rendering of a verse, identified by the remote
/// translation resource id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub resource_id: u32,
    pub text: String,
}

/// One numbered unit of text within a chapter.
///
/// Immutable once fetched. `translations` carries zero or one entry in
/// practice: the requested resource when the translation fetch succeeded,
/// empty when it was unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: u32,
    pub chapter_id: ChapterId,
    pub verse_number: u16,
    pub key: VerseKey,
    pub text_uthmani: String,
    pub translations: Vec<Translation>,
}

impl Verse {
    /// True when at least one translation is attached.
    #[must_use]
    pub fn has_translation(&self) -> bool {
        !self.translations.is_empty()
    }
}
