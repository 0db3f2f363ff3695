//! Derived-view computation: filter, search, and sort without mutation.

use chrono::NaiveDate;

use crate::task::{Priority, Status, Task};

/// Active filter criteria for the task list view.
///
/// `None` means "all" for the scalar filters; an empty tag list and an
/// absent search string leave those stages inactive. All stages compose
/// conjunctively.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub search: Option<String>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.priority.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
            && self.tags.is_empty()
            && normalized_query(self.search.as_deref()).is_none()
    }
}

/// Derive the visible task list: filter conjunctively, then sort ascending
/// by manual `order` with the task id as a deterministic tiebreak (duplicate
/// orders can exist and must not destabilize the view).
pub fn filtered(tasks: &[Task], criteria: &Criteria) -> Vec<Task> {
    let query = normalized_query(criteria.search.as_deref());

    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| matches(task, criteria, query.as_deref()))
        .cloned()
        .collect();

    visible.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
    visible
}

fn matches(task: &Task, criteria: &Criteria, query: Option<&str>) -> bool {
    if let Some(priority) = criteria.priority {
        if task.priority != priority {
            return false;
        }
    }
    if let Some(status) = criteria.status {
        if task.status != status {
            return false;
        }
    }
    if let Some(due) = criteria.due_date {
        if task.due_date != Some(due) {
            return false;
        }
    }
    if !criteria.tags.is_empty() {
        let labels = task.tag_labels();
        let contains_all = criteria
            .tags
            .iter()
            .all(|wanted| labels.contains(&wanted.as_str()));
        if !contains_all {
            return false;
        }
    }

    let Some(query) = query else {
        return true;
    };
    let haystack = std::iter::once(task.title.as_str())
        .chain(std::iter::once(task.description.as_str()))
        .chain(task.tags.iter().map(|tag| tag.label.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    haystack.contains(query)
}

fn normalized_query(search: Option<&str>) -> Option<String> {
    let trimmed = search?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
