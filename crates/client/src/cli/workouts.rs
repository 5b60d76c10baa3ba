//! Workout CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Workout commands.
#[derive(Debug, Parser)]
pub struct WorkoutsCommand {
    #[command(subcommand)]
    pub action: WorkoutsAction,
}

#[derive(Debug, Subcommand)]
pub enum WorkoutsAction {
    /// List your workouts.
    List,
    /// Import past sessions from a JSON array of workout logs.
    Import {
        /// JSON file, or `-` for stdin.
        file: PathBuf,
    },
}
