//! taskdeck stats command implementation.

use std::path::PathBuf;

use crate::cli::load_context;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct Options {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(options: Options) -> Result<()> {
    let ctx = load_context(options.data_dir)?;

    let stats = ctx.store.stats();

    let mut human = HumanOutput::new("Task stats");
    human.push_summary("Total", stats.total.to_string());
    human.push_detail(format!(
        "status: todo {} / in-progress {} / done {}",
        stats.by_status.todo, stats.by_status.in_progress, stats.by_status.done
    ));
    human.push_detail(format!(
        "priority: high {} / medium {} / low {}",
        stats.by_priority.high, stats.by_priority.medium, stats.by_priority.low
    ));

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "stats",
        &stats,
        Some(&human),
    )
}
