use std::fs;

use chrono::{NaiveDate, Utc};
use taskdeck::storage::{Storage, STATE_FILE};
use taskdeck::task::{AppState, Preferences, Priority, Status, Tag, Task, Theme};
use uuid::Uuid;

fn sample_state() -> AppState {
    let now = Utc::now();
    AppState {
        tasks: vec![Task {
            id: Uuid::new_v4(),
            title: "Round trip".to_string(),
            description: "keeps everything".to_string(),
            due_date: NaiveDate::from_ymd_opt(2027, 4, 2),
            priority: Priority::High,
            status: Status::InProgress,
            tags: vec![Tag::new("home", "#20c997")],
            created_at: now,
            updated_at: now,
            order: 0,
        }],
        tags: vec![Tag::new("home", "#20c997")],
        preferences: Preferences {
            theme: Theme::Dark,
            focus_mode: true,
            timer_seconds: 90,
        },
    }
}

#[test]
fn save_then_load_is_deep_equal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(temp.path().to_path_buf());

    let state = sample_state();
    storage.save(&state).expect("save");

    let loaded = storage.load().expect("load");
    assert_eq!(loaded, state);
}

#[test]
fn load_tolerates_partial_preferences() {
    let temp = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(temp.path().to_path_buf());

    fs::write(
        temp.path().join(STATE_FILE),
        r#"{ "preferences": { "theme": "dark" } }"#,
    )
    .expect("write");

    let loaded = storage.load().expect("load");
    assert_eq!(loaded.preferences.theme, Theme::Dark);
    // Untouched keys keep their defaults.
    assert!(!loaded.preferences.focus_mode);
    assert_eq!(loaded.preferences.timer_seconds, 25 * 60);
    assert!(loaded.tasks.is_empty());
    assert!(loaded.tags.is_empty());
}

#[test]
fn load_ignores_unknown_top_level_keys() {
    let temp = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(temp.path().to_path_buf());

    let mut state = sample_state();
    state.preferences = Preferences::default();
    storage.save(&state).expect("save");

    // Simulate a newer version having written extra keys.
    let mut value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.state_file()).expect("read"))
            .expect("parse");
    value["futureFeature"] = serde_json::json!({ "enabled": true });
    fs::write(storage.state_file(), value.to_string()).expect("write");

    let loaded = storage.load().expect("load");
    assert_eq!(loaded, state);
}

#[test]
fn corrupt_slot_falls_back_to_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(temp.path().to_path_buf());

    fs::write(temp.path().join(STATE_FILE), "][ nope").expect("write");
    assert!(storage.load().is_none());

    // A later save overwrites the corrupt slot cleanly.
    let state = sample_state();
    storage.save(&state).expect("save");
    assert_eq!(storage.load().expect("load"), state);
}

#[test]
fn wrong_shaped_arrays_are_ignored_not_applied() {
    let temp = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(temp.path().to_path_buf());

    fs::write(
        temp.path().join(STATE_FILE),
        r#"{ "tasks": {"not": "an array"}, "tags": 42 }"#,
    )
    .expect("write");

    let loaded = storage.load().expect("load");
    assert!(loaded.tasks.is_empty());
    assert!(loaded.tags.is_empty());
}
