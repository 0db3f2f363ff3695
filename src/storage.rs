//! Snapshot persistence for taskdeck
//!
//! The whole application state lives in one JSON slot:
//!
//! ```text
//! <data dir>/
//!   state.json        # { tasks: [...], tags: [...], preferences: {...} }
//! ```
//!
//! Loads are tolerant: a missing or corrupt slot falls back to defaults, and
//! each top-level field is applied independently so one ill-typed field never
//! discards the rest. Writes are atomic (temp file + rename) so a reader
//! never sees a partially written slot.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::task::{AppState, Preferences, Tag, Task};

/// File name of the single snapshot slot
pub const STATE_FILE: &str = "state.json";

/// Storage manager for the taskdeck data directory
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a storage manager rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path to the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the snapshot slot
    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    /// Load the persisted state, if any.
    ///
    /// Returns `None` when the slot is absent or unreadable; parse failures
    /// are logged, never surfaced. Present fields are merged over defaults:
    /// `tasks` and `tags` replace wholesale only when well-typed arrays, and
    /// `preferences` is merged key-by-key so a partial blob keeps untouched
    /// defaults.
    pub fn load(&self) -> Option<AppState> {
        let path = self.state_file();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read snapshot");
                return None;
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to parse snapshot");
                return None;
            }
        };

        Some(merge_snapshot(value))
    }

    /// Write the full state to the slot, atomically.
    pub fn save(&self, state: &AppState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        self.write_atomic(&self.state_file(), json.as_bytes())
    }

    /// Write data atomically using temp file + rename
    ///
    /// The slot is either fully written or untouched; readers never see a
    /// partial write.
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

/// Build an `AppState` from a parsed snapshot, field by field over defaults.
fn merge_snapshot(value: Value) -> AppState {
    let mut state = AppState::default();

    let Value::Object(mut map) = value else {
        warn!("snapshot root is not an object; using defaults");
        return state;
    };

    if let Some(tasks) = map.remove("tasks") {
        if tasks.is_array() {
            match serde_json::from_value::<Vec<Task>>(tasks) {
                Ok(tasks) => state.tasks = tasks,
                Err(err) => warn!(%err, "ignoring ill-formed tasks array"),
            }
        } else {
            warn!("ignoring non-array tasks field");
        }
    }

    if let Some(tags) = map.remove("tags") {
        if tags.is_array() {
            match serde_json::from_value::<Vec<Tag>>(tags) {
                Ok(tags) => state.tags = tags,
                Err(err) => warn!(%err, "ignoring ill-formed tags array"),
            }
        } else {
            warn!("ignoring non-array tags field");
        }
    }

    if let Some(Value::Object(prefs)) = map.remove("preferences") {
        merge_preferences(&mut state.preferences, prefs);
    }

    state
}

/// Apply preference keys one at a time; a key that fails to deserialize is
/// skipped and the default kept.
fn merge_preferences(
    preferences: &mut Preferences,
    map: serde_json::Map<String, Value>,
) {
    for (key, value) in map {
        let applied = match key.as_str() {
            "theme" => set_if_valid(&mut preferences.theme, value),
            "focusMode" => set_if_valid(&mut preferences.focus_mode, value),
            "timerSeconds" => set_if_valid(&mut preferences.timer_seconds, value),
            _ => true,
        };
        if !applied {
            warn!(key, "ignoring ill-typed preference");
        }
    }
}

fn set_if_valid<T: serde::de::DeserializeOwned>(slot: &mut T, value: Value) -> bool {
    match serde_json::from_value(value) {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Theme;
    use tempfile::TempDir;

    fn storage(temp: &TempDir) -> Storage {
        Storage::new(temp.path().to_path_buf())
    }

    #[test]
    fn load_missing_slot_returns_none() {
        let temp = TempDir::new().unwrap();
        assert!(storage(&temp).load().is_none());
    }

    #[test]
    fn load_corrupt_slot_returns_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STATE_FILE), "{not json").unwrap();
        assert!(storage(&temp).load().is_none());
    }

    #[test]
    fn ill_typed_fields_are_ignored_independently() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(STATE_FILE),
            r##"{
                "tasks": "nope",
                "tags": [{"label": "home", "color": "#fff"}],
                "preferences": {"theme": "dark", "timerSeconds": "soon"},
                "someFutureKey": 1
            }"##,
        )
        .unwrap();

        let state = storage(&temp).load().expect("state");
        assert!(state.tasks.is_empty());
        assert_eq!(state.tags.len(), 1);
        assert_eq!(state.preferences.theme, Theme::Dark);
        // Ill-typed timerSeconds keeps the default.
        assert_eq!(state.preferences.timer_seconds, 25 * 60);
    }

    #[test]
    fn save_replaces_slot_atomically() {
        let temp = TempDir::new().unwrap();
        let storage = storage(&temp);

        let mut state = AppState::default();
        state.preferences.focus_mode = true;
        storage.save(&state).unwrap();

        assert!(storage.state_file().exists());
        assert!(!storage.state_file().with_extension("tmp").exists());

        let loaded = storage.load().expect("state");
        assert!(loaded.preferences.focus_mode);
    }
}
