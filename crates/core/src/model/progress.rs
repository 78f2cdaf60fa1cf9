use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{ChapterId, VerseKey};

/// Current version of the persisted progress shape.
pub const SCHEMA_VERSION: u32 = 1;

/// Most recently viewed location. Tracks *last viewed*, not *last completed*:
/// the verse it points at need not be in the read set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastRead {
    pub chapter_id: ChapterId,
    pub verse_number: u16,
}

/// A saved verse location with a denormalized chapter name.
///
/// `chapter_name` is a snapshot taken at bookmark time and is not kept in
/// sync with later chapter-name changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub chapter_id: ChapterId,
    pub verse_number: u16,
    pub verse_key: VerseKey,
    pub chapter_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A bookmark as supplied by the caller, before the creation timestamp is
/// stamped on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub chapter_id: ChapterId,
    pub verse_number: u16,
    pub verse_key: VerseKey,
    pub chapter_name: String,
    pub note: Option<String>,
}

impl BookmarkDraft {
    /// Convenience constructor deriving the composite key from chapter and
    /// verse number.
    #[must_use]
    pub fn new(chapter_id: ChapterId, verse_number: u16, chapter_name: impl Into<String>) -> Self {
        Self {
            chapter_id,
            verse_number,
            verse_key: VerseKey::new(chapter_id, verse_number),
            chapter_name: chapter_name.into(),
            note: None,
        }
    }

    fn into_bookmark(self, created_at: DateTime<Utc>) -> Bookmark {
        Bookmark {
            chapter_id: self.chapter_id,
            verse_number: self.verse_number,
            verse_key: self.verse_key,
            chapter_name: self.chapter_name,
            note: self.note,
            created_at,
        }
    }
}

/// The singleton per-device reading state.
///
/// `read_verses` is the single source of truth; `completed_chapters` is a
/// monotonic cache derived from it (entries are appended when a chapter
/// becomes fully read and never removed). Collections are logically sets:
/// duplicates are rejected on insertion, insertion order is preserved in the
/// underlying sequence.
///
/// Every field defaults independently so a blob persisted by an older schema
/// merges against the default aggregate instead of failing to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadingProgress {
    pub schema_version: u32,
    pub last_read: Option<LastRead>,
    pub read_verses: Vec<VerseKey>,
    pub completed_chapters: Vec<ChapterId>,
    pub bookmarks: Vec<Bookmark>,
}

impl Default for ReadingProgress {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            last_read: None,
            read_verses: Vec::new(),
            completed_chapters: Vec::new(),
            bookmarks: Vec::new(),
        }
    }
}

impl ReadingProgress {
    /// True when the verse has been marked read.
    #[must_use]
    pub fn is_read(&self, key: VerseKey) -> bool {
        self.read_verses.contains(&key)
    }

    /// True when a bookmark exists for the verse.
    #[must_use]
    pub fn is_bookmarked(&self, key: VerseKey) -> bool {
        self.bookmarks.iter().any(|b| b.verse_key == key)
    }

    /// Looks up the bookmark for a verse, if any.
    #[must_use]
    pub fn bookmark(&self, key: VerseKey) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.verse_key == key)
    }

    /// Adds a verse to the read set. Idempotent: re-inserting an already
    /// read verse leaves the set unchanged. Returns true when the verse was
    /// newly added.
    pub fn insert_read(&mut self, key: VerseKey) -> bool {
        if self.is_read(key) {
            return false;
        }
        self.read_verses.push(key);
        true
    }

    /// Unconditionally moves the "resume here" pointer.
    pub fn set_last_read(&mut self, chapter_id: ChapterId, verse_number: u16) {
        self.last_read = Some(LastRead {
            chapter_id,
            verse_number,
        });
    }

    /// Strict bookmark toggle keyed by `verse_key`: removes the existing
    /// bookmark if one exists, otherwise inserts the draft stamped with
    /// `now`. Returns true when a bookmark was added, false when removed.
    pub fn toggle_bookmark(&mut self, draft: BookmarkDraft, now: DateTime<Utc>) -> bool {
        if let Some(pos) = self.bookmarks.iter().position(|b| b.verse_key == draft.verse_key) {
            self.bookmarks.remove(pos);
            false
        } else {
            self.bookmarks.push(draft.into_bookmark(now));
            true
        }
    }

    /// Appends the chapter to `completed_chapters` when every verse
    /// `1..=total_verses` is in the read set and the chapter is not already
    /// recorded. Completion is never revoked. Returns true when the chapter
    /// newly completed.
    pub fn complete_chapter_if_read(&mut self, chapter_id: ChapterId, total_verses: u16) -> bool {
        if self.completed_chapters.contains(&chapter_id) {
            return false;
        }
        let all_read =
            (1..=total_verses).all(|v| self.is_read(VerseKey::new(chapter_id, v)));
        if !all_read || total_verses == 0 {
            return false;
        }
        self.completed_chapters.push(chapter_id);
        true
    }

    /// True when the chapter has been recorded as fully read.
    #[must_use]
    pub fn is_chapter_completed(&self, chapter_id: ChapterId) -> bool {
        self.completed_chapters.contains(&chapter_id)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
