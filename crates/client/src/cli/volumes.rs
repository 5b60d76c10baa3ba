//! Volume CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lifequest_core::volume::VolumeStatus;

/// Volume commands.
#[derive(Debug, Parser)]
pub struct VolumesCommand {
    #[command(subcommand)]
    pub action: VolumesAction,
}

/// Available volume actions.
#[derive(Debug, Subcommand)]
pub enum VolumesAction {
    /// Parse a greentext file locally and print the structured result.
    Parse {
        /// Greentext file, or `-` for stdin.
        file: PathBuf,
    },
    /// Export volumes as plain text.
    ///
    /// With `--input`, renders a local JSON array of volumes without
    /// contacting the server; otherwise downloads the admin export.
    Export {
        /// JSON file holding an array of volumes.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// List every volume (admin).
    List,
    /// Create a volume from a greentext file (admin).
    Create {
        /// Greentext file, or `-` for stdin.
        file: PathBuf,
        /// Initial status.
        #[arg(long, default_value = "draft", value_parser = parse_status)]
        status: VolumeStatus,
    },
    /// Search volumes (admin).
    Search {
        /// Case-insensitive search text.
        query: String,
    },
    /// Number and title of every published volume.
    Catalogue,
}

fn parse_status(value: &str) -> Result<VolumeStatus, String> {
    value.parse().map_err(|e: lifequest_core::volume::VolumeError| e.to_string())
}
