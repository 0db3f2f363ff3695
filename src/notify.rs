//! Upcoming/overdue alert derivation.
//!
//! A task qualifies for an alert when it has a due date, is not done, and is
//! due within the next 24 hours. Overdue tasks stay in the list (there is no
//! lower bound) and sort first.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::task::{Status, Task};

/// Maximum number of alerts returned
pub const MAX_ALERTS: usize = 5;

/// An alert for one task, with time remaining until its due instant
/// (negative when overdue).
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub task: Task,
    /// Milliseconds until local midnight of the due date
    pub remaining_ms: i64,
}

impl Alert {
    pub fn remaining(&self) -> Duration {
        Duration::milliseconds(self.remaining_ms)
    }

    pub fn is_overdue(&self) -> bool {
        self.remaining_ms <= 0
    }
}

/// Derive the alert list for the given wall-clock time (local, naive).
///
/// The due date counts as the instant at local midnight of that calendar
/// day. Results are sorted most urgent first (ties broken by task id) and
/// capped at [`MAX_ALERTS`]. An empty result means nothing is due soon and
/// callers should render that as a distinct state, not a bare blank list.
pub fn upcoming_alerts(tasks: &[Task], now: NaiveDateTime) -> Vec<Alert> {
    let window = Duration::hours(24);

    let mut alerts: Vec<Alert> = tasks
        .iter()
        .filter(|task| task.status != Status::Done)
        .filter_map(|task| {
            let due = task.due_date?.and_time(NaiveTime::MIN);
            let remaining = due - now;
            if remaining <= window {
                Some(Alert {
                    task: task.clone(),
                    remaining_ms: remaining.num_milliseconds(),
                })
            } else {
                None
            }
        })
        .collect();

    alerts.sort_by(|a, b| {
        a.remaining_ms
            .cmp(&b.remaining_ms)
            .then_with(|| a.task.id.cmp(&b.task.id))
    });
    alerts.truncate(MAX_ALERTS);
    alerts
}

/// Human description of remaining time: "overdue", minutes under an hour,
/// otherwise hours with a minute remainder.
pub fn format_remaining(remaining: Duration) -> String {
    if remaining <= Duration::zero() {
        return "overdue".to_string();
    }
    let total_minutes = remaining.num_minutes();
    if total_minutes < 60 {
        return format!("{total_minutes}m");
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if minutes > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{hours}h")
    }
}
