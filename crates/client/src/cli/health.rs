//! Health CLI command.

use clap::Parser;

/// Report server liveness and storage backend.
#[derive(Debug, Parser)]
pub struct HealthCommand {}
