//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and picks the backend via feature flags.

use std::sync::Arc;

use lifequest_core::storage::{
    BookNoteRepository, BookRepository, CategoryRepository, CollectionRepository,
    HabitRepository, ItemRepository, MediaRepository, NoteRepository, PokemonBaseRepository,
    TaskRepository, TransactionRepository, UserItemRepository, UserRepository, VolumeRepository,
    WorkoutRepository,
};

use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

/// A storage backend implementing every repository trait.
pub trait Repositories:
    UserRepository
    + VolumeRepository
    + HabitRepository
    + BookRepository
    + BookNoteRepository
    + CategoryRepository
    + TransactionRepository
    + PokemonBaseRepository
    + CollectionRepository
    + ItemRepository
    + UserItemRepository
    + NoteRepository
    + WorkoutRepository
    + MediaRepository
    + TaskRepository
    + 'static
{
}

impl<T> Repositories for T where
    T: UserRepository
        + VolumeRepository
        + HabitRepository
        + BookRepository
        + BookNoteRepository
        + CategoryRepository
        + TransactionRepository
        + PokemonBaseRepository
        + CollectionRepository
        + ItemRepository
        + UserItemRepository
        + NoteRepository
        + WorkoutRepository
        + MediaRepository
        + TaskRepository
        + 'static
{
}

/// Shared application state.
///
/// Cloned for each request handler; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub volumes: Arc<dyn VolumeRepository>,
    pub habits: Arc<dyn HabitRepository>,
    pub books: Arc<dyn BookRepository>,
    pub book_notes: Arc<dyn BookNoteRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub pokemon_bases: Arc<dyn PokemonBaseRepository>,
    pub collections: Arc<dyn CollectionRepository>,
    pub items: Arc<dyn ItemRepository>,
    pub user_items: Arc<dyn UserItemRepository>,
    pub notes: Arc<dyn NoteRepository>,
    pub workouts: Arc<dyn WorkoutRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub config: Arc<Config>,
    /// Name of the active storage backend, reported by `/healthz`.
    pub backend: &'static str,
}

impl AppState {
    /// Wires every repository handle to the same backend.
    pub fn from_repository<R: Repositories>(repo: Arc<R>, config: Config, backend: &'static str) -> Self {
        Self {
            users: repo.clone(),
            volumes: repo.clone(),
            habits: repo.clone(),
            books: repo.clone(),
            book_notes: repo.clone(),
            categories: repo.clone(),
            transactions: repo.clone(),
            pokemon_bases: repo.clone(),
            collections: repo.clone(),
            items: repo.clone(),
            user_items: repo.clone(),
            notes: repo.clone(),
            workouts: repo.clone(),
            media: repo.clone(),
            tasks: repo,
            config: Arc::new(config),
            backend,
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Data lives as long as the process.
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            Ok(Self::from_repository(repo, config, "inmemory"))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState backed by the SQLite file at `config.sqlite_path`.
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "Opened SQLite database");
            Ok(Self::from_repository(repo, config, "sqlite"))
        }
    }
}

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::inmemory::InMemoryRepository;

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        fn default() -> Self {
            Self::from_repository(
                Arc::new(InMemoryRepository::new()),
                Config::default(),
                "inmemory",
            )
        }
    }
}
