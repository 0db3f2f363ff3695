//! taskdeck - Local-first personal task manager
//!
//! This library provides the state engine behind the taskdeck CLI: an
//! in-memory task/tag model persisted to a single JSON snapshot, with a
//! pure filtering pipeline, due-date alerts, exports, and a focus timer.
//!
//! # Core Concepts
//!
//! - **Task Store**: the authoritative collection of tasks plus the global
//!   tag vocabulary and user preferences
//! - **Query Engine**: pure derivation of a filtered, searched, sorted view
//! - **Alerts**: tasks due within 24 hours (or overdue), most urgent first
//! - **Exports**: JSON and spreadsheet-friendly CSV snapshots of the tasks
//! - **Focus Timer**: a countdown state machine persisted between sessions
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `config.toml`
//! - `error`: Error types and result aliases
//! - `storage`: Snapshot persistence with atomic writes
//! - `store`: Mutating operations over the application state
//! - `task`: Task, tag, and preference data model
//! - `query`: Filter/search/sort view derivation
//! - `notify`: Upcoming/overdue alert derivation
//! - `export`: JSON/CSV export serialization
//! - `stats`: Status and priority tallies
//! - `timer`: Focus timer state machine
//! - `output`: Shared human/JSON CLI output

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod notify;
pub mod output;
pub mod query;
pub mod stats;
pub mod storage;
pub mod store;
pub mod task;
pub mod timer;

pub use error::{Error, Result};
