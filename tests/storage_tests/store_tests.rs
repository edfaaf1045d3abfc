//! Tests for JsonStore
//!
//! These tests verify:
//! - Missing file loads as an empty collection
//! - Save/load round-trips records and order
//! - Strict decoding of malformed files
//! - Whole-file atomic replacement

use std::fs;
use std::path::PathBuf;

use chrono::{Duration, TimeZone, Utc};
use mamo::storage::JsonStore;
use mamo::{Announcement, Config, MamoError, Priority};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, PathBuf, JsonStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("announcements.json");
    let store = JsonStore::new(&path);
    (temp_dir, path, store)
}

fn record(id: u64, title: &str, priority: Priority) -> Announcement {
    let created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    Announcement {
        id,
        title: title.to_string(),
        content: format!("content of {}", title),
        priority,
        created_at: created,
        updated_at: created + Duration::minutes(id as i64),
    }
}

fn assert_corrupt(store: &JsonStore) {
    match store.load() {
        Err(MamoError::CorruptStorage(msg)) => {
            assert!(msg.contains("announcements.json"), "message was: {}", msg)
        }
        other => panic!("expected CorruptStorage, got {:?}", other),
    }
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_empty() {
    let (_temp, path, store) = setup_temp_store();

    assert!(!store.exists());
    assert!(store.load().unwrap().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_load_empty_array() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "[]").unwrap();

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_load_hand_written_file() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(
        &path,
        r#"[{"id": 5, "title": "Hello", "content": "", "priority": "high",
             "created_at": "2026-03-01T10:00:00Z", "updated_at": "2026-03-01T11:00:00Z"}]"#,
    )
    .unwrap();

    let records = store.load().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 5);
    assert_eq!(records[0].priority, Priority::High);
    assert_eq!(records[0].content, "");
}

#[test]
fn test_load_offsetless_iso_timestamps() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(
        &path,
        r#"[
  {
    "id": 1,
    "title": "Welcome",
    "content": "Hi there",
    "priority": "normal",
    "created_at": "2024-05-01T12:00:00.123456",
    "updated_at": "2024-05-01T12:00:00.123789"
  },
  {
    "id": 2,
    "title": "Second",
    "content": "",
    "priority": "low",
    "created_at": "2024-05-02T08:30:00",
    "updated_at": "2024-05-03T09:00:00.5"
  }
]"#,
    )
    .unwrap();

    let records = store.load().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Welcome");
    assert_eq!(
        (records[0].updated_at - records[0].created_at).num_microseconds(),
        Some(333)
    );
    assert!(records[1].updated_at > records[1].created_at);
}

#[test]
fn test_offsetless_timestamps_are_rewritten_as_rfc3339() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(
        &path,
        r#"[{"id": 1, "title": "t", "content": "", "priority": "high",
             "created_at": "2024-05-01T12:00:00", "updated_at": "2024-05-01T12:00:00"}]"#,
    )
    .unwrap();

    let records = store.load().unwrap();
    store.save(&records).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Z\""));
    assert_eq!(store.load().unwrap(), records);
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_save_then_load_round_trip_preserves_order() {
    let (_temp, _path, store) = setup_temp_store();
    let records = vec![
        record(3, "third", Priority::Low),
        record(1, "first", Priority::High),
        record(2, "second", Priority::Normal),
    ];

    store.save(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn test_save_writes_lowercase_priority_and_rfc3339_timestamps() {
    let (_temp, path, store) = setup_temp_store();

    store.save(&[record(1, "a", Priority::High)]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"priority\": \"high\""));
    assert!(text.contains("\"created_at\": \"2026-01-02T03:04:05Z\""));
}

#[test]
fn test_save_compact_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("compact.json");
    let config = Config::builder().data_file(&path).pretty(false).sync_on_save(false).build();
    let store = JsonStore::from_config(&config);

    store.save(&[record(1, "a", Priority::Low)]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.trim_end().lines().count(), 1);
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_save_overwrites_previous_contents() {
    let (_temp, _path, store) = setup_temp_store();

    store
        .save(&[record(1, "a", Priority::Low), record(2, "b", Priority::Low)])
        .unwrap();
    store.save(&[record(2, "b", Priority::Low)]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 2);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("deeper").join("a.json");
    let store = JsonStore::new(&path);

    store.save(&[record(1, "a", Priority::Normal)]).unwrap();

    assert!(path.is_file());
}

#[test]
fn test_save_leaves_no_temporary_files() {
    let (temp, _path, store) = setup_temp_store();

    store.save(&[record(1, "a", Priority::Normal)]).unwrap();
    store.save(&[record(1, "a", Priority::High)]).unwrap();

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["announcements.json".to_string()]);
}

#[test]
fn test_failed_save_removes_temporary_file() {
    let (temp, path, store) = setup_temp_store();

    // A non-empty directory in place of the target makes the rename fail
    fs::create_dir(&path).unwrap();
    fs::write(path.join("blocker"), b"x").unwrap();

    let result = store.save(&[record(1, "a", Priority::Low)]);

    assert!(matches!(result, Err(MamoError::Io(_))));
    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["announcements.json".to_string()]);
    assert!(path.join("blocker").is_file());
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_invalid_json_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "{not json").unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_syntax_and_shape_errors_are_labelled_differently() {
    let (_temp, path, store) = setup_temp_store();

    fs::write(&path, "[{").unwrap();
    let syntax = store.load().unwrap_err().to_string();
    assert!(syntax.contains("invalid JSON"), "message was: {}", syntax);

    fs::write(&path, r#"[{"id": "one"}]"#).unwrap();
    let shape = store.load().unwrap_err().to_string();
    assert!(shape.contains("unexpected record shape"), "message was: {}", shape);
}

#[test]
fn test_unparseable_timestamp_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(
        &path,
        r#"[{"id": 1, "title": "t", "content": "", "priority": "low",
             "created_at": "last tuesday", "updated_at": "2026-03-01T10:00:00Z"}]"#,
    )
    .unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_empty_file_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "").unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_top_level_object_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, r#"{"announcements": []}"#).unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_missing_field_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(
        &path,
        r#"[{"id": 1, "title": "t", "priority": "low",
             "created_at": "2026-03-01T10:00:00Z", "updated_at": "2026-03-01T10:00:00Z"}]"#,
    )
    .unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_extra_field_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(
        &path,
        r#"[{"id": 1, "title": "t", "content": "", "priority": "low", "pinned": true,
             "created_at": "2026-03-01T10:00:00Z", "updated_at": "2026-03-01T10:00:00Z"}]"#,
    )
    .unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_unknown_priority_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(
        &path,
        r#"[{"id": 1, "title": "t", "content": "", "priority": "urgent",
             "created_at": "2026-03-01T10:00:00Z", "updated_at": "2026-03-01T10:00:00Z"}]"#,
    )
    .unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_duplicate_ids_are_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    let records = vec![record(1, "a", Priority::Low), record(1, "b", Priority::Low)];
    fs::write(&path, serde_json::to_vec(&records).unwrap()).unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_zero_id_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    let mut r = record(1, "a", Priority::Low);
    r.id = 0;
    fs::write(&path, serde_json::to_vec(&[r]).unwrap()).unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_blank_title_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    let r = record(1, "   ", Priority::Low);
    fs::write(&path, serde_json::to_vec(&[r]).unwrap()).unwrap();

    assert_corrupt(&store);
}

#[test]
fn test_updated_before_created_is_corrupt() {
    let (_temp, path, store) = setup_temp_store();
    let mut r = record(1, "a", Priority::Low);
    r.updated_at = r.created_at - Duration::seconds(1);
    fs::write(&path, serde_json::to_vec(&[r]).unwrap()).unwrap();

    assert_corrupt(&store);
}
