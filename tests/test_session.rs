use rpawogen::passgen::{GenError, PasswordOptions, SeededIndexSource};
use rpawogen::session::GenerationSession;
use rpawogen::stats::{JsonFileStore, MemoryStore, StatsError, StatsStore, UsageStats};
use std::io;
use tempfile::tempdir;

// 保存总是失败的存储
struct BrokenStore;

impl StatsStore for BrokenStore {
    fn load(&self) -> UsageStats {
        UsageStats { total_generated: 7, sessions_generated: 2, last_generated_at: None }
    }

    fn save(&self, _stats: &UsageStats) -> Result<(), StatsError> {
        Err(StatsError::IoError(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")))
    }
}

fn no_classes() -> PasswordOptions {
    PasswordOptions {
        include_uppercase: false,
        include_lowercase: false,
        include_numbers: false,
        include_symbols: false,
        ..PasswordOptions::default()
    }
}

#[test]
fn test_generation_counts_and_persists() {
    let store = MemoryStore::new();
    let mut session = GenerationSession::new(&store, SeededIndexSource::seeded(1));

    let password = session.generate(&PasswordOptions::default()).unwrap();
    assert_eq!(password.chars().count(), 12);
    session.generate(&PasswordOptions::default()).unwrap();

    assert_eq!(session.stats().total_generated, 2);
    assert_eq!(session.stats().sessions_generated, 2);
    assert_eq!(store.save_count(), 2);
    assert_eq!(store.snapshot().map(|s| s.total_generated), Some(2));
}

#[test]
fn test_stats_are_loaded_once_at_start() {
    let store = MemoryStore::with_stats(UsageStats { total_generated: 40, sessions_generated: 3, last_generated_at: None });
    let mut session = GenerationSession::new(&store, SeededIndexSource::seeded(1));
    assert_eq!(session.stats().total_generated, 40);

    session.generate(&PasswordOptions::default()).unwrap();
    assert_eq!(session.stats().total_generated, 41);
    assert_eq!(session.stats().sessions_generated, 4);
}

#[test]
fn test_no_class_selected_leaves_counters_alone() {
    let store = MemoryStore::with_stats(UsageStats { total_generated: 5, sessions_generated: 5, last_generated_at: None });
    let mut session = GenerationSession::new(&store, SeededIndexSource::seeded(1));

    assert_eq!(session.generate(&no_classes()), Err(GenError::NoClassSelected));
    assert_eq!(session.stats().total_generated, 5);
    assert_eq!(session.stats().sessions_generated, 5);
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_reset_session_persists_and_keeps_total() {
    let store = MemoryStore::new();
    let mut session = GenerationSession::new(&store, SeededIndexSource::seeded(9));
    for _ in 0..3 {
        session.generate(&PasswordOptions::default()).unwrap();
    }

    session.reset_session().unwrap();
    let saved = store.snapshot().unwrap();
    assert_eq!(saved.sessions_generated, 0);
    assert_eq!(saved.total_generated, 3);

    session.generate(&PasswordOptions::default()).unwrap();
    assert_eq!(session.stats().sessions_generated, 1);
    assert_eq!(session.stats().total_generated, 4);
}

#[test]
fn test_failed_save_still_returns_password() {
    let mut session = GenerationSession::new(BrokenStore, SeededIndexSource::seeded(3));
    let password = session.generate(&PasswordOptions::default());
    assert!(password.is_ok());
    assert_eq!(session.stats().total_generated, 8);
    assert!(session.reset_session().is_err());
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let first = GenerationSession::new(MemoryStore::new(), SeededIndexSource::seeded(77))
        .generate(&PasswordOptions::default())
        .unwrap();
    let second = GenerationSession::new(MemoryStore::new(), SeededIndexSource::seeded(77))
        .generate(&PasswordOptions::default())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_counters_survive_a_new_session_on_disk() {
    let dir = tempdir().expect("Failed to create temp directory");
    {
        let mut session = GenerationSession::new(JsonFileStore::new(dir.path()), SeededIndexSource::seeded(5));
        session.generate(&PasswordOptions::default()).unwrap();
        session.generate(&PasswordOptions::default()).unwrap();
    }
    let session = GenerationSession::new(JsonFileStore::new(dir.path()), SeededIndexSource::seeded(5));
    assert_eq!(session.stats().total_generated, 2);
    assert_eq!(session.stats().sessions_generated, 2);
    assert!(session.store().path().exists());
}
