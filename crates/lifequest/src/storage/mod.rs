//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `lifequest_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMaps behind `tokio::sync::RwLock`, nothing persisted
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p lifequest --no-default-features --features sqlite
//! ```

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
