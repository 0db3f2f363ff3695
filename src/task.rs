//! Task, tag, and preference data model.
//!
//! Tasks carry embedded copies of their tags (label + color) rather than
//! references into the global vocabulary; editing a vocabulary color later
//! does not rewrite tags already embedded in tasks.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Default color assigned to tags entered without one
pub const DEFAULT_TAG_COLOR: &str = "#4c6ef5";

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(Error::InvalidArgument(format!(
                "unknown priority '{other}' (expected low, medium, or high)"
            ))),
        }
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Todo => write!(f, "todo"),
            Status::InProgress => write!(f, "in-progress"),
            Status::Done => write!(f, "done"),
        }
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(Error::InvalidArgument(format!(
                "unknown status '{other}' (expected todo, in-progress, or done)"
            ))),
        }
    }
}

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::InvalidArgument(format!(
                "unknown theme '{other}' (expected light or dark)"
            ))),
        }
    }
}

/// A tag is a value object: label plus display color. Uniqueness (within a
/// task and within the global vocabulary) is by label, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub color: String,
}

impl Tag {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parse `label` or `label:color` as entered on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, color) = match s.split_once(':') {
            Some((label, color)) => (label, color),
            None => (s, DEFAULT_TAG_COLOR),
        };
        let label = label.trim();
        if label.is_empty() {
            return Err(Error::InvalidArgument(
                "tag label must not be empty".to_string(),
            ));
        }
        Ok(Tag::new(label, color.trim()))
    }
}

/// A single task record.
///
/// JSON shape (camelCase field names) matches the persisted snapshot and the
/// JSON export format field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: Status,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub order: i64,
}

impl Task {
    /// Labels of this task's embedded tags, in tag order
    pub fn tag_labels(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.label.as_str()).collect()
    }
}

/// Validated form input for creating or editing a task.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub tags: Vec<Tag>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Drop duplicate tag labels, keeping the first occurrence.
    pub fn dedup_tags(&mut self) {
        let mut seen = Vec::new();
        self.tags.retain(|tag| {
            if seen.iter().any(|label| label == &tag.label) {
                false
            } else {
                seen.push(tag.label.clone());
                true
            }
        });
    }
}

/// User preferences persisted alongside the tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_theme")]
    pub theme: Theme,

    #[serde(default)]
    pub focus_mode: bool,

    #[serde(default = "default_timer_seconds")]
    pub timer_seconds: u32,
}

fn default_theme() -> Theme {
    Theme::Light
}

fn default_timer_seconds() -> u32 {
    crate::timer::DEFAULT_TIMER_MINUTES * 60
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            focus_mode: false,
            timer_seconds: default_timer_seconds(),
        }
    }
}

/// The full persisted application state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_json_uses_wire_field_names() {
        let task = Task {
            id: Uuid::nil(),
            title: "Water plants".to_string(),
            description: String::new(),
            due_date: Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            priority: Priority::Medium,
            status: Status::InProgress,
            tags: vec![Tag::new("home", "#2ecc71")],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            order: 3,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["dueDate"], "2024-05-01");
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["status"], "in-progress");
        assert_eq!(value["tags"][0]["label"], "home");
        assert!(value["createdAt"].is_string());
        assert_eq!(value["order"], 3);
    }

    #[test]
    fn tag_parses_with_and_without_color() {
        let plain: Tag = "urgent".parse().unwrap();
        assert_eq!(plain.label, "urgent");
        assert_eq!(plain.color, DEFAULT_TAG_COLOR);

        let colored: Tag = "home:#20c997".parse().unwrap();
        assert_eq!(colored.label, "home");
        assert_eq!(colored.color, "#20c997");

        assert!(":red".parse::<Tag>().is_err());
    }

    #[test]
    fn draft_dedup_keeps_first_occurrence() {
        let mut draft = TaskDraft::new("t");
        draft.tags = vec![
            Tag::new("home", "#111111"),
            Tag::new("urgent", "#222222"),
            Tag::new("home", "#333333"),
        ];
        draft.dedup_tags();
        assert_eq!(draft.tags.len(), 2);
        assert_eq!(draft.tags[0].color, "#111111");
    }
}
