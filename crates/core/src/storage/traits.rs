use async_trait::async_trait;
use uuid::Uuid;

use crate::account::User;
use crate::book::Book;
use crate::book_note::BookNote;
use crate::collectible::{CollectibleItem, GachaCategory, PokemonBase, UserItem, UserPokemon};
use crate::finance::{FinancialCategory, FinancialTransaction};
use crate::habit::Habit;
use crate::media::MediaItem;
use crate::note::Note;
use crate::task::Task;
use crate::volume::Volume;
use crate::workout::WorkoutLog;

use super::Result;

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Looks a user up by (already normalized) email.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Creates a user. Fails with `AlreadyExists` on a taken email or username.
    async fn create_user(&self, user: &User) -> Result<()>;

    async fn update_user(&self, user: &User) -> Result<()>;
}

/// Repository for greentext volumes.
#[async_trait]
pub trait VolumeRepository: Send + Sync {
    async fn get_volume(&self, id: Uuid) -> Result<Option<Volume>>;

    async fn get_volume_by_number(&self, volume_number: u32) -> Result<Option<Volume>>;

    /// All volumes, ordered by number ascending.
    async fn list_volumes(&self) -> Result<Vec<Volume>>;

    /// Published volumes, ordered by number ascending.
    async fn list_published_volumes(&self) -> Result<Vec<Volume>>;

    /// Creates a volume. Fails with `AlreadyExists` on a taken volume number.
    async fn create_volume(&self, volume: &Volume) -> Result<()>;

    /// Updates a volume. Fails with `AlreadyExists` when the new number is taken.
    async fn update_volume(&self, volume: &Volume) -> Result<()>;

    async fn delete_volume(&self, id: Uuid) -> Result<()>;
}

/// Repository for habits.
#[async_trait]
pub trait HabitRepository: Send + Sync {
    async fn get_habit(&self, id: Uuid) -> Result<Option<Habit>>;

    /// A user's habits, newest first.
    async fn list_habits(&self, user_id: Uuid) -> Result<Vec<Habit>>;

    async fn create_habit(&self, habit: &Habit) -> Result<()>;

    async fn update_habit(&self, habit: &Habit) -> Result<()>;

    async fn delete_habit(&self, id: Uuid) -> Result<()>;
}

/// Repository for the reading log.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn get_book(&self, id: Uuid) -> Result<Option<Book>>;

    /// A user's books, newest first.
    async fn list_books(&self, user_id: Uuid) -> Result<Vec<Book>>;

    async fn create_book(&self, book: &Book) -> Result<()>;

    async fn update_book(&self, book: &Book) -> Result<()>;

    /// Deletes a book together with its notes.
    async fn delete_book(&self, id: Uuid) -> Result<()>;
}

/// Repository for notes and quotes attached to books.
#[async_trait]
pub trait BookNoteRepository: Send + Sync {
    async fn get_book_note(&self, id: Uuid) -> Result<Option<BookNote>>;

    /// A book's notes, newest first.
    async fn list_book_notes(&self, book_id: Uuid) -> Result<Vec<BookNote>>;

    async fn create_book_note(&self, note: &BookNote) -> Result<()>;

    async fn update_book_note(&self, note: &BookNote) -> Result<()>;

    async fn delete_book_note(&self, id: Uuid) -> Result<()>;
}

/// Repository for finance categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_category(&self, id: Uuid) -> Result<Option<FinancialCategory>>;

    /// A user's categories, ordered by name.
    async fn list_categories(&self, user_id: Uuid) -> Result<Vec<FinancialCategory>>;

    /// Fails with `AlreadyExists` when the user already has a category with
    /// the same name under the same parent.
    async fn create_category(&self, category: &FinancialCategory) -> Result<()>;

    async fn update_category(&self, category: &FinancialCategory) -> Result<()>;

    async fn delete_category(&self, id: Uuid) -> Result<()>;
}

/// Repository for finance transactions.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn get_transaction(&self, id: Uuid) -> Result<Option<FinancialTransaction>>;

    /// A user's transactions, most recent date first.
    async fn list_transactions(&self, user_id: Uuid) -> Result<Vec<FinancialTransaction>>;

    async fn create_transaction(&self, transaction: &FinancialTransaction) -> Result<()>;

    async fn update_transaction(&self, transaction: &FinancialTransaction) -> Result<()>;

    async fn delete_transaction(&self, id: Uuid) -> Result<()>;
}

/// Repository for the shared Pokémon catalogue.
#[async_trait]
pub trait PokemonBaseRepository: Send + Sync {
    async fn get_base(&self, id: Uuid) -> Result<Option<PokemonBase>>;

    async fn get_base_by_species(&self, species_id: u32) -> Result<Option<PokemonBase>>;

    /// The whole catalogue, ordered by species id.
    async fn list_bases(&self) -> Result<Vec<PokemonBase>>;

    /// Fails with `AlreadyExists` on a taken species id or name.
    async fn create_base(&self, base: &PokemonBase) -> Result<()>;

    async fn update_base(&self, base: &PokemonBase) -> Result<()>;
}

/// Repository for per-user Pokémon.
///
/// A user owns at most one Pokémon per base species; creating or evolving
/// into a second copy fails with `AlreadyExists`.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn get_user_pokemon(&self, id: Uuid) -> Result<Option<UserPokemon>>;

    /// A user's Pokémon, in the order they were obtained.
    async fn list_user_pokemon(&self, user_id: Uuid) -> Result<Vec<UserPokemon>>;

    async fn create_user_pokemon(&self, pokemon: &UserPokemon) -> Result<()>;

    async fn update_user_pokemon(&self, pokemon: &UserPokemon) -> Result<()>;
}

/// Repository for notes.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn get_note(&self, id: Uuid) -> Result<Option<Note>>;

    /// A user's notes, newest first.
    async fn list_notes(&self, user_id: Uuid) -> Result<Vec<Note>>;

    async fn create_note(&self, note: &Note) -> Result<()>;

    async fn update_note(&self, note: &Note) -> Result<()>;

    async fn delete_note(&self, id: Uuid) -> Result<()>;
}

/// Repository for workout logs.
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    async fn get_workout(&self, id: Uuid) -> Result<Option<WorkoutLog>>;

    /// A user's workouts, most recent date first.
    async fn list_workouts(&self, user_id: Uuid) -> Result<Vec<WorkoutLog>>;

    async fn create_workout(&self, log: &WorkoutLog) -> Result<()>;

    /// Stores every log or none of them.
    async fn create_workouts(&self, logs: &[WorkoutLog]) -> Result<()>;

    async fn update_workout(&self, log: &WorkoutLog) -> Result<()>;

    async fn delete_workout(&self, id: Uuid) -> Result<()>;
}

/// Repository for shows, movies and games.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn get_media(&self, id: Uuid) -> Result<Option<MediaItem>>;

    /// A user's media items, newest first.
    async fn list_media(&self, user_id: Uuid) -> Result<Vec<MediaItem>>;

    async fn create_media(&self, item: &MediaItem) -> Result<()>;

    async fn update_media(&self, item: &MediaItem) -> Result<()>;

    async fn delete_media(&self, id: Uuid) -> Result<()>;
}

/// Repository for tasks. Subtasks are stored with their task.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn get_task(&self, id: Uuid) -> Result<Option<Task>>;

    /// A user's tasks, in no particular order.
    async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>>;

    async fn create_task(&self, task: &Task) -> Result<()>;

    async fn update_task(&self, task: &Task) -> Result<()>;

    async fn delete_task(&self, id: Uuid) -> Result<()>;
}

/// Repository for the non-Pokémon item catalogues.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_item(&self, id: Uuid) -> Result<Option<CollectibleItem>>;

    /// One category's catalogue, ordered by key.
    async fn list_items(&self, category: GachaCategory) -> Result<Vec<CollectibleItem>>;

    /// Fails with `AlreadyExists` when the category already has the key.
    async fn create_item(&self, item: &CollectibleItem) -> Result<()>;
}

/// Repository for pulled items.
#[async_trait]
pub trait UserItemRepository: Send + Sync {
    /// A user's items, in the order they were obtained.
    async fn list_user_items(&self, user_id: Uuid) -> Result<Vec<UserItem>>;

    /// Stores every item of one pull or none of them.
    async fn create_user_items(&self, items: &[UserItem]) -> Result<()>;
}
