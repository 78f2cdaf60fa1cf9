use quran_core::model::{BookmarkDraft, ChapterId, ReadingProgress, VerseKey};
use quran_core::time::fixed_now;
use storage::repository::ProgressRepository;
use storage::sqlite::SqliteRepository;

fn key(c: u16, v: u16) -> VerseKey {
    VerseKey::new(ChapterId::new(c), v)
}

#[tokio::test]
async fn sqlite_roundtrips_progress_blob() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut progress = ReadingProgress::default();
    for v in 1..=7 {
        progress.insert_read(key(2, v));
    }
    progress.set_last_read(ChapterId::new(2), 7);
    progress.toggle_bookmark(BookmarkDraft::new(ChapterId::new(1), 1, "Al-Fatihah"), fixed_now());
    repo.save(&progress).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded, progress);
}

#[tokio::test]
async fn sqlite_load_defaults_on_empty_database() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_empty?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let progress = repo.load().await.unwrap();
    assert_eq!(progress, ReadingProgress::default());
}

#[tokio::test]
async fn sqlite_save_replaces_whole_record() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_replace?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut first = ReadingProgress::default();
    first.insert_read(key(1, 1));
    first.insert_read(key(1, 2));
    repo.save(&first).await.unwrap();

    let mut second = ReadingProgress::default();
    second.insert_read(key(114, 1));
    repo.save(&second).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded, second);
}

#[tokio::test]
async fn sqlite_recovers_from_corrupt_blob() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query("INSERT INTO reading_progress (id, data, updated_at) VALUES (1, 'garbage', '')")
        .execute(repo.pool())
        .await
        .unwrap();

    let progress = repo.load().await.unwrap();
    assert_eq!(progress, ReadingProgress::default());
}
