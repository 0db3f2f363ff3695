//! taskdeck alerts command implementation.

use std::path::PathBuf;

use chrono::Local;

use crate::cli::load_context;
use crate::error::Result;
use crate::notify::{format_remaining, Alert};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct Options {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AlertsOutput {
    total: usize,
    alerts: Vec<Alert>,
}

pub fn run(options: Options) -> Result<()> {
    let ctx = load_context(options.data_dir)?;

    let alerts = ctx.store.upcoming_alerts(Local::now().naive_local());

    let output = AlertsOutput {
        total: alerts.len(),
        alerts: alerts.clone(),
    };

    // An empty list is a distinct "nothing due soon" state, not a blank.
    let header = if alerts.is_empty() {
        "Nothing due soon"
    } else {
        "Due soon"
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("Total", alerts.len().to_string());
    for alert in &alerts {
        let due = alert
            .task
            .due_date
            .map(|due| due.to_string())
            .unwrap_or_default();
        human.push_detail(format!(
            "{} - {} (due {})",
            alert.task.title,
            format_remaining(alert.remaining()),
            due
        ));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "alerts",
        &output,
        Some(&human),
    )
}
