//! taskdeck timer command implementations.
//!
//! `timer run` drives the countdown in the foreground, one tick per second,
//! persisting the remaining time on every tick so an interrupted session
//! resumes where it left off.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::load_context;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::timer::{FocusTimer, Tick};

pub struct ShowOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct RunOptions {
    pub minutes: Option<u32>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ResetOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct TimerReport {
    remaining_seconds: u32,
    display: String,
    finished: bool,
}

pub fn run_show(options: ShowOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;

    let timer = FocusTimer::new(
        ctx.store.preferences().timer_seconds,
        ctx.config.session_seconds(),
    );
    let report = TimerReport {
        remaining_seconds: timer.seconds(),
        display: timer.display(),
        finished: false,
    };

    let mut human = HumanOutput::new("Focus timer");
    human.push_summary("Remaining", timer.display());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "timer show",
        &report,
        Some(&human),
    )
}

pub fn run_run(options: RunOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;

    let session_seconds = options
        .minutes
        .map(|minutes| minutes * 60)
        .unwrap_or_else(|| ctx.config.session_seconds());
    let start_seconds = if options.minutes.is_some() {
        session_seconds
    } else {
        ctx.store.preferences().timer_seconds
    };

    let mut timer = FocusTimer::new(start_seconds, session_seconds);
    timer.start();
    ctx.store.set_timer_seconds(timer.seconds());

    let streaming = !options.json && !options.quiet;
    let mut finished = false;
    while timer.is_running() {
        std::thread::sleep(Duration::from_secs(1));
        match timer.tick() {
            Tick::Counting(_) => {
                ctx.store.set_timer_seconds(timer.seconds());
                if streaming {
                    println!("{}", timer.display());
                }
            }
            Tick::Finished => {
                ctx.store.set_timer_seconds(timer.seconds());
                finished = true;
            }
            Tick::Inactive => break,
        }
    }

    let report = TimerReport {
        remaining_seconds: timer.seconds(),
        display: timer.display(),
        finished,
    };

    let mut human = HumanOutput::new("Focus session complete");
    human.push_summary("Next session", timer.display());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "timer run",
        &report,
        Some(&human),
    )
}

pub fn run_reset(options: ResetOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;

    let mut timer = FocusTimer::new(
        ctx.store.preferences().timer_seconds,
        ctx.config.session_seconds(),
    );
    timer.reset();
    ctx.store.set_timer_seconds(timer.seconds());

    let report = TimerReport {
        remaining_seconds: timer.seconds(),
        display: timer.display(),
        finished: false,
    };

    let mut human = HumanOutput::new("Focus timer reset");
    human.push_summary("Remaining", timer.display());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "timer reset",
        &report,
        Some(&human),
    )
}
