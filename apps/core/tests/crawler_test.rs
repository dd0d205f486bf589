use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use quickbar_core::crawler::crawl_into;
use quickbar_core::model::Entry;

fn unique_root(tag: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("quickbar-{tag}-{unique}"))
}

#[test]
fn collects_recognized_files_and_strips_suffixes() {
    let root = unique_root("crawl-basic");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("Notepad.exe"), b"x").unwrap();
    std::fs::write(root.join("Steam.LNK"), b"x").unwrap();
    std::fs::write(root.join("Docs.url"), b"x").unwrap();
    std::fs::write(root.join("readme.txt"), b"x").unwrap();

    let mut out: Vec<Entry> = Vec::new();
    crawl_into(&root, 1, &mut out);

    let mut names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Docs", "Notepad", "Steam"]);
    for entry in &out {
        assert_eq!(entry.search_key(), entry.name.to_lowercase());
        assert!(entry.path.starts_with(root.to_string_lossy().as_ref()));
    }

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn depth_limit_zero_yields_nothing() {
    let root = unique_root("crawl-depth-zero");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("Direct.exe"), b"x").unwrap();

    let mut out: Vec<Entry> = Vec::new();
    crawl_into(&root, 0, &mut out);
    assert!(out.is_empty());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn depth_limit_bounds_recursion() {
    let root = unique_root("crawl-depth");
    let nested = root.join("level1").join("level2");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(root.join("Top.exe"), b"x").unwrap();
    std::fs::write(nested.join("Deep.exe"), b"x").unwrap();

    let mut shallow: Vec<Entry> = Vec::new();
    crawl_into(&root, 1, &mut shallow);
    let shallow_names: Vec<&str> = shallow.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(shallow_names, vec!["Top"]);

    let mut deep: Vec<Entry> = Vec::new();
    crawl_into(&root, 3, &mut deep);
    let mut deep_names: Vec<&str> = deep.iter().map(|e| e.name.as_str()).collect();
    deep_names.sort();
    assert_eq!(deep_names, vec!["Deep", "Top"]);

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn bare_suffix_file_is_excluded() {
    let root = unique_root("crawl-bare-suffix");
    std::fs::create_dir_all(&root).unwrap();
    // A file literally named ".exe": stripping the suffix would leave an
    // empty display name, so the crawler skips it.
    std::fs::write(root.join(".exe"), b"x").unwrap();
    std::fs::write(root.join("a.ex"), b"x").unwrap();

    let mut out: Vec<Entry> = Vec::new();
    crawl_into(&root, 1, &mut out);
    assert!(out.is_empty());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn missing_root_is_a_silent_no_op() {
    let root = unique_root("crawl-missing");

    let mut out: Vec<Entry> = vec![Entry::new("Kept", "C:\\Kept.exe")];
    crawl_into(&root, 3, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Kept");
}
