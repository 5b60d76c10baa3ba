//! Repository traits implemented by the server's storage backends.

mod error;
mod traits;
mod types;

pub use error::{DateRangeError, RepositoryError, Result};
pub use traits::{
    BookNoteRepository, BookRepository, CategoryRepository, CollectionRepository,
    HabitRepository, ItemRepository, MediaRepository, NoteRepository, PokemonBaseRepository,
    TaskRepository, TransactionRepository, UserItemRepository, UserRepository, VolumeRepository,
    WorkoutRepository,
};
pub use types::DateRange;
