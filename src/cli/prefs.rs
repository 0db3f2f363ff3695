//! taskdeck prefs command implementations.

use std::path::PathBuf;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Preferences, Theme};

pub struct ShowOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ThemeOptions {
    pub theme: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct FocusOptions {
    pub state: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_show(options: ShowOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let preferences = ctx.store.preferences().clone();

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "prefs show",
        &preferences,
        Some(&summarize(&preferences, "Preferences")),
    )
}

pub fn run_theme(options: ThemeOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;
    let theme: Theme = options.theme.parse()?;

    ctx.store.set_theme(theme);
    let preferences = ctx.store.preferences().clone();

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "prefs theme",
        &preferences,
        Some(&summarize(&preferences, "Theme updated")),
    )
}

pub fn run_focus(options: FocusOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;
    let enabled = match options.state.as_str() {
        "on" => true,
        "off" => false,
        other => {
            return Err(Error::InvalidArgument(format!(
                "unknown focus state '{other}' (expected on or off)"
            )))
        }
    };

    ctx.store.set_focus_mode(enabled);
    let preferences = ctx.store.preferences().clone();

    let header = if enabled {
        "Focus mode enabled"
    } else {
        "Focus mode disabled"
    };
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "prefs focus",
        &preferences,
        Some(&summarize(&preferences, header)),
    )
}

fn summarize(preferences: &Preferences, header: &str) -> HumanOutput {
    let mut human = HumanOutput::new(header);
    human.push_summary("Theme", preferences.theme.to_string());
    human.push_summary(
        "Focus mode",
        if preferences.focus_mode { "on" } else { "off" },
    );
    human.push_summary("Timer", format!("{}s remaining", preferences.timer_seconds));
    human
}
