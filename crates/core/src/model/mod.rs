mod chapter;
mod ids;
mod progress;
mod verse;

pub use chapter::{Chapter, RevelationPlace, TranslatedName};
pub use ids::{CHAPTER_COUNT, ChapterId, VerseKey};
pub use progress::{Bookmark, BookmarkDraft, LastRead, ReadingProgress, SCHEMA_VERSION};
pub use verse::{Translation, Verse};
