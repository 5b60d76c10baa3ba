//! In-memory storage backend.
//!
//! Stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. Used by the
//! default build and by the router tests; nothing survives a restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use lifequest::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
