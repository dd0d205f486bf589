use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use quickbar_core::index::IndexService;
use quickbar_core::sources::IndexSource;

fn unique_root(tag: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("quickbar-{tag}-{unique}"))
}

#[test]
fn queries_before_build_completion_return_empty() {
    let root = unique_root("index-not-ready");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("Notepad.exe"), b"x").unwrap();

    let service = IndexService::new(vec![IndexSource::new("test", root.clone(), 1)]);

    assert!(!service.is_ready());
    assert!(service.search("notepad", 10).is_empty());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn background_rebuild_is_joinable_and_publishes_a_ready_catalog() {
    let root = unique_root("index-join");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("Notepad.exe"), b"x").unwrap();
    std::fs::write(root.join("Steam.lnk"), b"x").unwrap();

    let service = Arc::new(IndexService::new(vec![IndexSource::new(
        "test",
        root.clone(),
        1,
    )]));
    let build = service.spawn_rebuild();
    build.join().unwrap();

    assert!(service.is_ready());
    assert_eq!(service.entry_count(), 2);

    let results = service.search("notepad", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Notepad");

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn earlier_source_wins_duplicate_names() {
    let first = unique_root("index-dup-first");
    let second = unique_root("index-dup-second");
    std::fs::create_dir_all(&first).unwrap();
    std::fs::create_dir_all(&second).unwrap();
    std::fs::write(first.join("Chrome.exe"), b"x").unwrap();
    std::fs::write(second.join("Chrome.lnk"), b"x").unwrap();

    let service = IndexService::new(vec![
        IndexSource::new("first", first.clone(), 1),
        IndexSource::new("second", second.clone(), 1),
    ]);
    service.rebuild();

    let results = service.search("chrome", 10);
    assert_eq!(results.len(), 1);
    assert!(results[0].path.starts_with(first.to_string_lossy().as_ref()));

    std::fs::remove_dir_all(&first).unwrap();
    std::fs::remove_dir_all(&second).unwrap();
}

#[test]
fn unreadable_sources_degrade_to_a_partial_catalog() {
    let present = unique_root("index-present");
    let absent = unique_root("index-absent");
    std::fs::create_dir_all(&present).unwrap();
    std::fs::write(present.join("Real.exe"), b"x").unwrap();

    let service = IndexService::new(vec![
        IndexSource::new("absent", absent, 3),
        IndexSource::new("present", present.clone(), 1),
    ]);
    service.rebuild();

    assert!(service.is_ready());
    assert_eq!(service.entry_count(), 1);

    std::fs::remove_dir_all(&present).unwrap();
}

#[test]
fn result_count_is_capped_at_ten() {
    let root = unique_root("index-cap");
    std::fs::create_dir_all(&root).unwrap();
    for i in 0..15 {
        std::fs::write(root.join(format!("App{i:02}.exe")), b"x").unwrap();
    }

    let service = IndexService::new(vec![IndexSource::new("test", root.clone(), 1)]);
    service.rebuild();
    assert_eq!(service.entry_count(), 15);

    let results = service.search("app", 50);
    assert_eq!(results.len(), 10);

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn snapshot_is_immutable_across_rebuilds() {
    let root = unique_root("index-snapshot");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("One.exe"), b"x").unwrap();

    let service = IndexService::new(vec![IndexSource::new("test", root.clone(), 1)]);
    service.rebuild();
    let before = service.snapshot();

    std::fs::write(root.join("Two.exe"), b"x").unwrap();
    service.rebuild();

    assert_eq!(before.len(), 1);
    assert_eq!(service.entry_count(), 2);

    std::fs::remove_dir_all(&root).unwrap();
}
