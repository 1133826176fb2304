use super::*;
use chrono::TimeZone;
use std::fs;

fn creation_time() -> DateTime<Utc> {
    // 2016-06-09T08:07:00.077Z; sub-second precision is dropped by the id
    Utc.with_ymd_and_hms(2016, 6, 9, 8, 7, 0).unwrap() + chrono::Duration::milliseconds(77)
}

#[test]
fn test_create_script_yields_filename() {
    let tmp = tempfile::tempdir().unwrap();
    let file_name =
        create_script(tmp.path(), Phase::Before, "my_description", creation_time()).unwrap();

    assert_eq!(file_name, "20160609080700-my_description.json");
    assert!(tmp.path().join(&file_name).is_file());
}

#[test]
fn test_create_script_replaces_spaces_with_underscores() {
    let tmp = tempfile::tempdir().unwrap();
    let file_name = create_script(
        tmp.path(),
        Phase::Before,
        "this description contains spaces",
        creation_time(),
    )
    .unwrap();

    assert_eq!(
        file_name,
        "20160609080700-this_description_contains_spaces.json"
    );
}

#[test]
fn test_create_script_requires_description() {
    let tmp = tempfile::tempdir().unwrap();
    for description in ["", "   "] {
        let err =
            create_script(tmp.path(), Phase::After, description, creation_time()).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameter { .. }));
        assert_eq!(err.to_string(), "[M001] Missing parameter: description");
    }
    // Nothing was written
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_create_script_requires_existing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("before");
    let err = create_script(&missing, Phase::Before, "desc", creation_time()).unwrap_err();
    assert!(matches!(err, EngineError::DirectoryUnavailable { .. }));
    assert!(err.to_string().contains("before directory does not exist"));
}

#[test]
fn test_generated_script_is_loadable() {
    let tmp = tempfile::tempdir().unwrap();
    let file_name = create_script(tmp.path(), Phase::Before, "fresh", creation_time()).unwrap();

    let scripts = pw_core::list_scripts(tmp.path()).unwrap();
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].id.as_str(), "20160609080700-fresh");
    assert_eq!(scripts[0].path, tmp.path().join(file_name));

    let loaded = crate::migration::CommandScript::load(&scripts[0]).unwrap();
    assert_eq!(loaded.len(), 1);
}
