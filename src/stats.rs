//! Status and priority tallies behind the analytics view.

use serde::Serialize;

use crate::task::{Priority, Status, Task};

/// Task counts grouped by status and by priority
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub by_status: StatusCounts,
    pub by_priority: PriorityCounts,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl TaskStats {
    pub fn collect(tasks: &[Task]) -> Self {
        let mut stats = TaskStats {
            total: tasks.len(),
            ..TaskStats::default()
        };

        for task in tasks {
            match task.status {
                Status::Todo => stats.by_status.todo += 1,
                Status::InProgress => stats.by_status.in_progress += 1,
                Status::Done => stats.by_status.done += 1,
            }
            match task.priority {
                Priority::Low => stats.by_priority.low += 1,
                Priority::Medium => stats.by_priority.medium += 1,
                Priority::High => stats.by_priority.high += 1,
            }
        }

        stats
    }
}
