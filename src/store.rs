//! The authoritative task store.
//!
//! `TaskStore` owns the application state and is the only place that mutates
//! it. Every mutating operation either fully applies or fully rejects, and
//! successful mutations save the snapshot before returning; saving is
//! best-effort (failures are logged, the in-memory state stays usable).

use chrono::{NaiveDateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::export::{self, ExportFile, ExportFormat};
use crate::notify::{self, Alert};
use crate::query::{self, Criteria};
use crate::stats::TaskStats;
use crate::storage::Storage;
use crate::task::{AppState, Preferences, Priority, Status, Tag, Task, TaskDraft, Theme};

pub struct TaskStore {
    state: AppState,
    storage: Storage,
}

impl TaskStore {
    /// Open the store, restoring persisted state or starting from defaults.
    pub fn open(storage: Storage) -> Self {
        let state = storage.load().unwrap_or_default();
        Self { state, storage }
    }

    // =========================================================================
    // Read side
    // =========================================================================

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// The global tag vocabulary, in first-seen order
    pub fn tags(&self) -> &[Tag] {
        &self.state.tags
    }

    pub fn preferences(&self) -> &Preferences {
        &self.state.preferences
    }

    pub fn find(&self, id: Uuid) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }

    /// Derive the filtered, searched, sorted view (pure, no mutation).
    pub fn filtered_view(&self, criteria: &Criteria) -> Vec<Task> {
        query::filtered(&self.state.tasks, criteria)
    }

    /// Derive the upcoming/overdue alert list for the given local time.
    pub fn upcoming_alerts(&self, now: NaiveDateTime) -> Vec<Alert> {
        notify::upcoming_alerts(&self.state.tasks, now)
    }

    /// Serialize the task collection for download.
    pub fn export(&self, format: ExportFormat) -> Result<ExportFile> {
        export::export_tasks(&self.state.tasks, format)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::collect(&self.state.tasks)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a task from a form draft, or replace the task identified by
    /// `editing`.
    ///
    /// Edits preserve the task's id, `created_at`, `order`, and collection
    /// position. New tasks append with `order` equal to the current count.
    /// A title that is empty after trimming rejects without mutating.
    pub fn submit(&mut self, mut draft: TaskDraft, editing: Option<Uuid>) -> Result<Task> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        draft.dedup_tags();

        let now = Utc::now();
        let task = match editing {
            Some(id) => {
                let index = self
                    .state
                    .tasks
                    .iter()
                    .position(|task| task.id == id)
                    .ok_or(Error::TaskNotFound(id))?;
                let existing = &self.state.tasks[index];
                let task = Task {
                    id,
                    title,
                    description: draft.description.trim().to_string(),
                    due_date: draft.due_date,
                    priority: draft.priority.unwrap_or(existing.priority),
                    status: draft.status.unwrap_or(existing.status),
                    tags: draft.tags,
                    created_at: existing.created_at,
                    updated_at: now,
                    order: existing.order,
                };
                self.state.tasks[index] = task.clone();
                task
            }
            None => {
                let task = Task {
                    id: Uuid::new_v4(),
                    title,
                    description: draft.description.trim().to_string(),
                    due_date: draft.due_date,
                    priority: draft.priority.unwrap_or(Priority::Medium),
                    status: draft.status.unwrap_or(Status::Todo),
                    tags: draft.tags,
                    created_at: now,
                    updated_at: now,
                    order: self.state.tasks.len() as i64,
                };
                self.state.tasks.push(task.clone());
                task
            }
        };

        self.sync_tag_vocabulary(&task.tags);
        self.persist();
        Ok(task)
    }

    /// Remove a task by id. Idempotent; returns whether anything was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|task| task.id != id);
        let removed = self.state.tasks.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Apply a drag-drop reorder: each pair assigns a new manual position to
    /// the matching task. Unknown ids are ignored.
    pub fn reorder(&mut self, pairs: &[(Uuid, i64)]) {
        let now = Utc::now();
        let mut changed = false;
        for &(id, order) in pairs {
            if let Some(task) = self.state.tasks.iter_mut().find(|task| task.id == id) {
                if task.order != order {
                    task.order = order;
                    task.updated_at = now;
                    changed = true;
                }
            }
        }
        if changed {
            self.persist();
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.preferences.theme = theme;
        self.persist();
    }

    pub fn set_focus_mode(&mut self, enabled: bool) {
        self.state.preferences.focus_mode = enabled;
        self.persist();
    }

    pub fn set_timer_seconds(&mut self, seconds: u32) {
        self.state.preferences.timer_seconds = seconds;
        self.persist();
    }

    /// Add unseen labels to the global vocabulary. The first color seen for
    /// a label wins; later uses never restyle the stored entry.
    fn sync_tag_vocabulary(&mut self, tags: &[Tag]) {
        for tag in tags {
            let known = self
                .state
                .tags
                .iter()
                .any(|stored| stored.label == tag.label);
            if !known {
                self.state.tags.push(tag.clone());
            }
        }
    }

    /// Best-effort save of the current snapshot. Storage failures must never
    /// fail the mutation that triggered them.
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.state) {
            warn!(%err, "failed to save snapshot; continuing in memory");
        }
    }
}
