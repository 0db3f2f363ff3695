use std::path::PathBuf;

use chrono::NaiveDate;
use taskdeck::storage::Storage;
use taskdeck::store::TaskStore;
use taskdeck::task::{Priority, Status, Tag, TaskDraft};
use tempfile::TempDir;

/// A task store backed by a throwaway data directory.
pub struct TestDeck {
    dir: TempDir,
    pub store: TaskStore,
}

impl TestDeck {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = TaskStore::open(Storage::new(dir.path().to_path_buf()));
        Self { dir, store }
    }

    #[allow(dead_code)]
    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Reopen the store from disk, as a fresh process would.
    #[allow(dead_code)]
    pub fn reopen(&mut self) {
        self.store = TaskStore::open(Storage::new(self.dir.path().to_path_buf()));
    }
}

#[allow(dead_code)]
pub fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(title)
}

#[allow(dead_code)]
pub fn full_draft(
    title: &str,
    status: Status,
    priority: Priority,
    due: Option<NaiveDate>,
    tags: &[(&str, &str)],
) -> TaskDraft {
    let mut draft = TaskDraft::new(title);
    draft.status = Some(status);
    draft.priority = Some(priority);
    draft.due_date = due;
    draft.tags = tags
        .iter()
        .map(|(label, color)| Tag::new(*label, *color))
        .collect();
    draft
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
