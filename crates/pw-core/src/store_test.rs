use super::*;
use std::fs;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "[]").unwrap();
}

#[test]
fn test_list_scripts_sorted_ascending() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "20240301000000-third.json");
    touch(tmp.path(), "20230101000000-first.json");
    touch(tmp.path(), "20240101000000-second.json");

    let scripts = list_scripts(tmp.path()).unwrap();
    let ids: Vec<&str> = scripts.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "20230101000000-first",
            "20240101000000-second",
            "20240301000000-third",
        ]
    );
}

#[test]
fn test_list_scripts_ignores_non_matching_files() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "20240101000000-real.json");
    touch(tmp.path(), "README.md");
    touch(tmp.path(), "notes.txt");
    touch(tmp.path(), "2024-short.json");
    fs::create_dir(tmp.path().join("20240101000000-a_directory.json")).unwrap();

    let scripts = list_scripts(tmp.path()).unwrap();
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].id.as_str(), "20240101000000-real");
}

#[test]
fn test_list_scripts_empty_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let scripts = list_scripts(tmp.path()).unwrap();
    assert!(scripts.is_empty());
}

#[test]
fn test_list_scripts_missing_directory_is_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("does_not_exist");
    let err = list_scripts(&missing).unwrap_err();
    assert!(matches!(err, CoreError::DirectoryUnavailable { .. }));
    assert!(err.to_string().contains("does_not_exist"));
}

#[test]
fn test_same_id_different_extensions_both_listed() {
    // The store reports both; the runner treats the duplicate id as fatal.
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "20240101000000-dup.json");
    touch(tmp.path(), "20240101000000-dup.yaml");

    let scripts = list_scripts(tmp.path()).unwrap();
    assert_eq!(scripts.len(), 2);
    assert_eq!(scripts[0].id, scripts[1].id);
}
