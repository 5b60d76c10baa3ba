//! lifequest_client - CLI client for the lifequest API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::LifequestClient;
pub use error::{ClientError, Result};
