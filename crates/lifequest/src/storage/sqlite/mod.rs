//! SQLite storage backend.
//!
//! Every repository trait is backed by one `tokio_rusqlite` connection.
//! Nested values (progression, blessings, evolution paths, tags) are stored
//! as JSON text columns.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
