//! Command-line interface for taskdeck
//!
//! This module defines the CLI structure using clap derive macros.
//! Each command family is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{self, Config};
use crate::error::Result;
use crate::storage::Storage;
use crate::store::TaskStore;

mod alerts;
mod export;
mod prefs;
mod stats;
mod task;
mod timer;

/// taskdeck - Local-first personal task manager
///
/// Create, edit, tag, filter, search, reorder, and export tasks, with
/// due-date alerts and a focus timer. State lives in one local snapshot.
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding the snapshot (defaults to the platform data dir)
    #[arg(long, global = true, env = "TASKDECK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Priority: low, medium, high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Status: todo, in-progress, done
        #[arg(long, default_value = "todo")]
        status: String,

        /// Tag as label or label:color (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Edit an existing task (unspecified flags keep current values)
    Edit {
        /// Task id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        clear_due: bool,

        /// New priority
        #[arg(long)]
        priority: Option<String>,

        /// New status
        #[arg(long)]
        status: Option<String>,

        /// Replace the tag list (repeatable; omit to keep current tags)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: String,
    },

    /// List tasks with optional filters
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,

        /// Filter by exact due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Filter by tag label; repeat for AND semantics
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Free-text search over title, description, and tag labels
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one task in full
    Show {
        /// Task id
        id: String,
    },

    /// Move a task to a new position in the manual order
    Move {
        /// Task id
        id: String,

        /// Target position (0-based)
        position: usize,
    },

    /// List the global tag vocabulary
    Tags,

    /// Show tasks due within 24 hours or overdue
    Alerts,

    /// Show status and priority tallies
    Stats,

    /// Export tasks to a file
    Export {
        /// Export format: json or csv
        format: String,

        /// Directory to write the export file into
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Preferences
    #[command(subcommand)]
    Prefs(PrefsCommands),

    /// Focus timer
    #[command(subcommand)]
    Timer(TimerCommands),
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Show current preferences
    Show,

    /// Set the theme: light or dark
    Theme { theme: String },

    /// Toggle focus mode: on or off
    Focus { state: String },
}

#[derive(Subcommand, Debug)]
pub enum TimerCommands {
    /// Show the remaining focus time
    Show,

    /// Run the countdown in the foreground
    Run {
        /// Restart with this session length before running
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Reset the countdown to the configured session length
    Reset,
}

/// Everything a command needs to talk to the store
pub(crate) struct Context {
    pub store: TaskStore,
    pub config: Config,
}

pub(crate) fn load_context(data_dir: Option<PathBuf>) -> Result<Context> {
    let config = Config::load_default()?;
    let dir = config::resolve_data_dir(data_dir, &config)?;
    let store = TaskStore::open(Storage::new(dir));
    Ok(Context { store, config })
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add {
                title,
                description,
                due,
                priority,
                status,
                tags,
            } => task::run_add(task::AddOptions {
                title,
                description,
                due,
                priority,
                status,
                tags,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Edit {
                id,
                title,
                description,
                due,
                clear_due,
                priority,
                status,
                tags,
                clear_tags,
            } => task::run_edit(task::EditOptions {
                id,
                title,
                description,
                due,
                clear_due,
                priority,
                status,
                tags,
                clear_tags,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { id } => task::run_rm(task::RmOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List {
                status,
                priority,
                due,
                tags,
                search,
            } => task::run_list(task::ListOptions {
                status,
                priority,
                due,
                tags,
                search,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Show { id } => task::run_show(task::ShowOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Move { id, position } => task::run_move(task::MoveOptions {
                id,
                position,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Tags => task::run_tags(task::TagsOptions {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Alerts => alerts::run(alerts::Options {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Stats => stats::run(stats::Options {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Export { format, out } => export::run(export::Options {
                format,
                out,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Prefs(cmd) => match cmd {
                PrefsCommands::Show => prefs::run_show(prefs::ShowOptions {
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                PrefsCommands::Theme { theme } => prefs::run_theme(prefs::ThemeOptions {
                    theme,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                PrefsCommands::Focus { state } => prefs::run_focus(prefs::FocusOptions {
                    state,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
            },
            Commands::Timer(cmd) => match cmd {
                TimerCommands::Show => timer::run_show(timer::ShowOptions {
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                TimerCommands::Run { minutes } => timer::run_run(timer::RunOptions {
                    minutes,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                TimerCommands::Reset => timer::run_reset(timer::ResetOptions {
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
            },
        }
    }
}
