//! Pure derived-metrics functions over a `ReadingProgress` snapshot.
//!
//! Nothing here caches or mutates: every value is recomputed from the
//! snapshot it is given, so consistency follows from the snapshot alone.

use crate::model::{ChapterId, ReadingProgress, VerseKey};

/// Fixed total verse count of the whole corpus.
///
/// A domain constant rather than a value derived from fetched data, so the
/// overall percentage stays consistent even when retrieval is partial or
/// offline.
pub const TOTAL_VERSE_COUNT: u32 = 6236;

/// True when the verse has been marked read.
#[must_use]
pub fn is_verse_read(progress: &ReadingProgress, key: VerseKey) -> bool {
    progress.is_read(key)
}

/// True when a bookmark exists for the verse.
#[must_use]
pub fn is_bookmarked(progress: &ReadingProgress, key: VerseKey) -> bool {
    progress.is_bookmarked(key)
}

/// Rounded percentage of the chapter's verses `1..=verses_count` present in
/// the read set.
///
/// `verses_count == 0` is undefined input; the guard returns 0 instead of
/// dividing by zero.
#[must_use]
pub fn chapter_percent(progress: &ReadingProgress, chapter_id: ChapterId, verses_count: u16) -> u8 {
    if verses_count == 0 {
        return 0;
    }
    let read = (1..=verses_count)
        .filter(|v| progress.is_read(VerseKey::new(chapter_id, *v)))
        .count();
    percent(read as u32, u32::from(verses_count))
}

/// Rounded percentage of the whole corpus that has been marked read,
/// clamped to 100.
#[must_use]
pub fn overall_percent(progress: &ReadingProgress) -> u8 {
    percent(progress.read_verses.len() as u32, TOTAL_VERSE_COUNT)
}

fn percent(part: u32, whole: u32) -> u8 {
    debug_assert!(whole > 0);
    // Integer rounding: (2 * part * 100 + whole) / (2 * whole).
    let rounded = (u64::from(part) * 100 * 2 + u64::from(whole)) / (u64::from(whole) * 2);
    rounded.min(100) as u8
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CHAPTER_COUNT;

    fn key(c: u16, v: u16) -> VerseKey {
        VerseKey::new(ChapterId::new(c), v)
    }

    #[test]
    fn empty_progress_is_zero_percent() {
        let progress = ReadingProgress::default();
        assert_eq!(overall_percent(&progress), 0);
        assert_eq!(chapter_percent(&progress, ChapterId::new(1), 7), 0);
    }

    #[test]
    fn full_chapter_is_hundred_percent() {
        let mut progress = ReadingProgress::default();
        for v in 1..=7 {
            progress.insert_read(key(2, v));
        }
        assert_eq!(chapter_percent(&progress, ChapterId::new(2), 7), 100);
    }

    #[test]
    fn chapter_percent_rounds_to_nearest() {
        let mut progress = ReadingProgress::default();
        progress.insert_read(key(1, 1));
        // 1/7 = 14.28… -> 14; 2/7 = 28.57… -> 29.
        assert_eq!(chapter_percent(&progress, ChapterId::new(1), 7), 14);
        progress.insert_read(key(1, 2));
        assert_eq!(chapter_percent(&progress, ChapterId::new(1), 7), 29);
    }

    #[test]
    fn chapter_percent_ignores_other_chapters() {
        let mut progress = ReadingProgress::default();
        progress.insert_read(key(3, 1));
        assert_eq!(chapter_percent(&progress, ChapterId::new(1), 7), 0);
    }

    #[test]
    fn chapter_percent_guards_zero_verse_count() {
        let progress = ReadingProgress::default();
        assert_eq!(chapter_percent(&progress, ChapterId::new(1), 0), 0);
    }

    #[test]
    fn overall_percent_stays_within_bounds() {
        let mut progress = ReadingProgress::default();
        progress.insert_read(key(1, 1));
        let p = overall_percent(&progress);
        assert!(p <= 100);
        // 1/6236 rounds down to zero.
        assert_eq!(p, 0);
    }

    #[test]
    fn overall_percent_clamps_above_corpus_size() {
        // More read keys than the corpus holds (possible only via a
        // hand-edited blob); the percentage must still cap at 100.
        let mut progress = ReadingProgress::default();
        for c in 1..=CHAPTER_COUNT {
            for v in 1..=60u16 {
                progress.insert_read(key(c, v));
            }
        }
        assert!(progress.read_verses.len() > TOTAL_VERSE_COUNT as usize);
        assert_eq!(overall_percent(&progress), 100);
    }

    #[test]
    fn membership_helpers_reflect_snapshot() {
        let mut progress = ReadingProgress::default();
        progress.insert_read(key(2, 1));
        assert!(is_verse_read(&progress, key(2, 1)));
        assert!(!is_verse_read(&progress, key(2, 2)));
        assert!(!is_bookmarked(&progress, key(2, 1)));
    }
}
