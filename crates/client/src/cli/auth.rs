//! Login command.

use clap::Parser;

/// Exchange credentials for a bearer token.
#[derive(Debug, Parser)]
pub struct LoginCommand {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long, env = "LIFEQUEST_PASSWORD", hide_env_values = true)]
    pub password: String,
}
