//! taskdeck export command implementation.

use std::fs;
use std::path::PathBuf;

use crate::cli::load_context;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct Options {
    pub format: String,
    pub out: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ExportReport {
    format: String,
    path: PathBuf,
    bytes: usize,
    tasks: usize,
}

pub fn run(options: Options) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let format: ExportFormat = options.format.parse()?;

    let file = ctx.store.export(format)?;

    let out_dir = match options.out {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    fs::create_dir_all(&out_dir)?;
    let path = out_dir.join(file.filename);
    fs::write(&path, &file.bytes)?;

    let report = ExportReport {
        format: format.to_string(),
        path: path.clone(),
        bytes: file.bytes.len(),
        tasks: ctx.store.tasks().len(),
    };

    let mut human = HumanOutput::new("Export written");
    human.push_summary("File", path.display().to_string());
    human.push_summary("Tasks", report.tasks.to_string());
    human.push_summary("Size", format!("{} bytes", report.bytes));

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "export",
        &report,
        Some(&human),
    )
}
