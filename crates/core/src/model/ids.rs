use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseKeyError;

/// Number of chapters in the corpus.
pub const CHAPTER_COUNT: u16 = 114;

/// Identifier of a chapter (1..=114, externally assigned).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(u16);

impl ChapterId {
    /// Creates a new `ChapterId`
    #[must_use]
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the underlying u16 value
    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Debug for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChapterId({})", self.0)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChapterId {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .map(ChapterId::new)
            .map_err(|_| ParseKeyError::new("ChapterId", s))
    }
}

/// Canonical identity of a verse: chapter plus 1-based verse number.
///
/// Renders as `"{chapterId}:{verseNumber}"` (e.g. `"2:7"`), the string form
/// used as the set element for read-tracking and bookmark lookup. Serializes
/// as that string so persisted progress keeps a stable, human-readable shape.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseKey {
    chapter: ChapterId,
    verse: u16,
}

impl VerseKey {
    /// Creates a key from a chapter id and 1-based verse number.
    #[must_use]
    pub fn new(chapter: ChapterId, verse: u16) -> Self {
        Self { chapter, verse }
    }

    /// Chapter component of the key.
    #[must_use]
    pub fn chapter(&self) -> ChapterId {
        self.chapter
    }

    /// 1-based verse number within the chapter.
    #[must_use]
    pub fn verse(&self) -> u16 {
        self.verse
    }
}

impl fmt::Debug for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerseKey({}:{})", self.chapter, self.verse)
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chapter, verse) = s
            .split_once(':')
            .ok_or_else(|| ParseKeyError::new("VerseKey", s))?;
        let chapter = chapter
            .parse::<ChapterId>()
            .map_err(|_| ParseKeyError::new("VerseKey", s))?;
        let verse = verse
            .parse::<u16>()
            .map_err(|_| ParseKeyError::new("VerseKey", s))?;
        Ok(Self { chapter, verse })
    }
}

impl Serialize for VerseKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VerseKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_id_display() {
        let id = ChapterId::new(114);
        assert_eq!(id.to_string(), "114");
    }

    #[test]
    fn test_chapter_id_from_str() {
        let id: ChapterId = "2".parse().unwrap();
        assert_eq!(id, ChapterId::new(2));
    }

    #[test]
    fn test_chapter_id_from_str_invalid() {
        let result = "not-a-number".parse::<ChapterId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_verse_key_display() {
        let key = VerseKey::new(ChapterId::new(2), 255);
        assert_eq!(key.to_string(), "2:255");
    }

    #[test]
    fn test_verse_key_from_str() {
        let key: VerseKey = "1:7".parse().unwrap();
        assert_eq!(key, VerseKey::new(ChapterId::new(1), 7));
    }

    #[test]
    fn test_verse_key_from_str_missing_separator() {
        assert!("17".parse::<VerseKey>().is_err());
    }

    #[test]
    fn test_verse_key_from_str_bad_components() {
        assert!("a:7".parse::<VerseKey>().is_err());
        assert!("1:".parse::<VerseKey>().is_err());
        assert!("1:2:3".parse::<VerseKey>().is_err());
    }

    #[test]
    fn test_verse_key_serde_as_string() {
        let key = VerseKey::new(ChapterId::new(2), 7);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2:7\"");
        let back: VerseKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_verse_key_roundtrip() {
        let original = VerseKey::new(ChapterId::new(114), 6);
        let deserialized: VerseKey = original.to_string().parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
