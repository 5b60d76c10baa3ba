//! CLI command definitions.

pub mod auth;
pub mod health;
pub mod volumes;
pub mod workouts;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the lifequest API.
#[derive(Debug, Parser)]
#[command(name = "lifequest-client")]
#[command(about = "CLI client for the lifequest API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "LIFEQUEST_URL", default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Bearer token for authenticated routes.
    #[arg(long, env = "LIFEQUEST_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Obtain a bearer token.
    Login(auth::LoginCommand),
    /// Greentext volumes, local and remote.
    Volumes(volumes::VolumesCommand),
    /// Workout logs.
    Workouts(workouts::WorkoutsCommand),
    /// Server health check.
    Health(health::HealthCommand),
}
