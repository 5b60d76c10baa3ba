//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use lifequest_core::account::User;
use lifequest_core::book::Book;
use lifequest_core::book_note::BookNote;
use lifequest_core::collectible::{
    CollectibleItem, GachaCategory, PokemonBase, UserItem, UserPokemon,
};
use lifequest_core::finance::{FinancialCategory, FinancialTransaction};
use lifequest_core::habit::Habit;
use lifequest_core::media::MediaItem;
use lifequest_core::note::Note;
use lifequest_core::storage::{
    BookNoteRepository, BookRepository, CategoryRepository, CollectionRepository,
    HabitRepository, ItemRepository, MediaRepository, NoteRepository, PokemonBaseRepository,
    RepositoryError, Result, TaskRepository, TransactionRepository, UserItemRepository,
    UserRepository, VolumeRepository, WorkoutRepository,
};
use lifequest_core::task::Task;
use lifequest_core::volume::{Volume, VolumeStatus};
use lifequest_core::workout::WorkoutLog;

type Table<T> = Arc<RwLock<HashMap<Uuid, T>>>;

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Uniqueness rules match the SQLite schema.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Table<User>,
    volumes: Table<Volume>,
    habits: Table<Habit>,
    books: Table<Book>,
    book_notes: Table<BookNote>,
    categories: Table<FinancialCategory>,
    transactions: Table<FinancialTransaction>,
    pokemon_bases: Table<PokemonBase>,
    user_pokemon: Table<UserPokemon>,
    notes: Table<Note>,
    workouts: Table<WorkoutLog>,
    media: Table<MediaItem>,
    tasks: Table<Task>,
    items: Table<CollectibleItem>,
    user_items: Table<UserItem>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn insert_new<T: Clone>(
    table: &mut HashMap<Uuid, T>,
    id: Uuid,
    value: &T,
    entity_type: &'static str,
) -> Result<()> {
    if table.contains_key(&id) {
        return Err(RepositoryError::already_exists(entity_type, id));
    }
    table.insert(id, value.clone());
    Ok(())
}

fn replace_existing<T: Clone>(
    table: &mut HashMap<Uuid, T>,
    id: Uuid,
    value: &T,
    entity_type: &'static str,
) -> Result<()> {
    match table.get_mut(&id) {
        Some(slot) => {
            *slot = value.clone();
            Ok(())
        }
        None => Err(RepositoryError::not_found(entity_type, id)),
    }
}

fn remove_existing<T>(table: &mut HashMap<Uuid, T>, id: Uuid, entity_type: &'static str) -> Result<()> {
    table
        .remove(&id)
        .map(|_| ())
        .ok_or_else(|| RepositoryError::not_found(entity_type, id))
}

// ============================================================================
// Users
// ============================================================================

fn check_user_unique(users: &HashMap<Uuid, User>, user: &User) -> Result<()> {
    for other in users.values().filter(|u| u.id != user.id) {
        if other.email == user.email {
            return Err(RepositoryError::already_exists("User", &user.email));
        }
        if other.username.eq_ignore_ascii_case(&user.username) {
            return Err(RepositoryError::already_exists("User", &user.username));
        }
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        check_user_unique(&users, user)?;
        insert_new(&mut users, user.id, user, "User")
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        check_user_unique(&users, user)?;
        replace_existing(&mut users, user.id, user, "User")
    }
}

// ============================================================================
// Volumes
// ============================================================================

fn check_volume_number(volumes: &HashMap<Uuid, Volume>, volume: &Volume) -> Result<()> {
    let taken = volumes
        .values()
        .any(|v| v.id != volume.id && v.volume_number == volume.volume_number);
    if taken {
        return Err(RepositoryError::already_exists("Volume", volume.volume_number));
    }
    Ok(())
}

fn sorted_by_number(mut volumes: Vec<Volume>) -> Vec<Volume> {
    volumes.sort_by_key(|v| v.volume_number);
    volumes
}

#[async_trait]
impl VolumeRepository for InMemoryRepository {
    async fn get_volume(&self, id: Uuid) -> Result<Option<Volume>> {
        let volumes = self.volumes.read().await;
        Ok(volumes.get(&id).cloned())
    }

    async fn get_volume_by_number(&self, volume_number: u32) -> Result<Option<Volume>> {
        let volumes = self.volumes.read().await;
        Ok(volumes
            .values()
            .find(|v| v.volume_number == volume_number)
            .cloned())
    }

    async fn list_volumes(&self) -> Result<Vec<Volume>> {
        let volumes = self.volumes.read().await;
        Ok(sorted_by_number(volumes.values().cloned().collect()))
    }

    async fn list_published_volumes(&self) -> Result<Vec<Volume>> {
        let volumes = self.volumes.read().await;
        Ok(sorted_by_number(
            volumes
                .values()
                .filter(|v| v.status == VolumeStatus::Published)
                .cloned()
                .collect(),
        ))
    }

    async fn create_volume(&self, volume: &Volume) -> Result<()> {
        let mut volumes = self.volumes.write().await;
        check_volume_number(&volumes, volume)?;
        insert_new(&mut volumes, volume.id, volume, "Volume")
    }

    async fn update_volume(&self, volume: &Volume) -> Result<()> {
        let mut volumes = self.volumes.write().await;
        check_volume_number(&volumes, volume)?;
        replace_existing(&mut volumes, volume.id, volume, "Volume")
    }

    async fn delete_volume(&self, id: Uuid) -> Result<()> {
        let mut volumes = self.volumes.write().await;
        remove_existing(&mut volumes, id, "Volume")
    }
}

// ============================================================================
// Habits, books and notes
// ============================================================================

#[async_trait]
impl HabitRepository for InMemoryRepository {
    async fn get_habit(&self, id: Uuid) -> Result<Option<Habit>> {
        let habits = self.habits.read().await;
        Ok(habits.get(&id).cloned())
    }

    async fn list_habits(&self, user_id: Uuid) -> Result<Vec<Habit>> {
        let habits = self.habits.read().await;
        let mut result: Vec<Habit> = habits
            .values()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn create_habit(&self, habit: &Habit) -> Result<()> {
        let mut habits = self.habits.write().await;
        insert_new(&mut habits, habit.id, habit, "Habit")
    }

    async fn update_habit(&self, habit: &Habit) -> Result<()> {
        let mut habits = self.habits.write().await;
        replace_existing(&mut habits, habit.id, habit, "Habit")
    }

    async fn delete_habit(&self, id: Uuid) -> Result<()> {
        let mut habits = self.habits.write().await;
        remove_existing(&mut habits, id, "Habit")
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn get_book(&self, id: Uuid) -> Result<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.get(&id).cloned())
    }

    async fn list_books(&self, user_id: Uuid) -> Result<Vec<Book>> {
        let books = self.books.read().await;
        let mut result: Vec<Book> = books
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn create_book(&self, book: &Book) -> Result<()> {
        let mut books = self.books.write().await;
        insert_new(&mut books, book.id, book, "Book")
    }

    async fn update_book(&self, book: &Book) -> Result<()> {
        let mut books = self.books.write().await;
        replace_existing(&mut books, book.id, book, "Book")
    }

    async fn delete_book(&self, id: Uuid) -> Result<()> {
        let mut books = self.books.write().await;
        remove_existing(&mut books, id, "Book")?;
        let mut notes = self.book_notes.write().await;
        notes.retain(|_, note| note.book_id != id);
        Ok(())
    }
}

#[async_trait]
impl BookNoteRepository for InMemoryRepository {
    async fn get_book_note(&self, id: Uuid) -> Result<Option<BookNote>> {
        let notes = self.book_notes.read().await;
        Ok(notes.get(&id).cloned())
    }

    async fn list_book_notes(&self, book_id: Uuid) -> Result<Vec<BookNote>> {
        let notes = self.book_notes.read().await;
        let mut result: Vec<BookNote> = notes
            .values()
            .filter(|n| n.book_id == book_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn create_book_note(&self, note: &BookNote) -> Result<()> {
        let mut notes = self.book_notes.write().await;
        insert_new(&mut notes, note.id, note, "BookNote")
    }

    async fn update_book_note(&self, note: &BookNote) -> Result<()> {
        let mut notes = self.book_notes.write().await;
        replace_existing(&mut notes, note.id, note, "BookNote")
    }

    async fn delete_book_note(&self, id: Uuid) -> Result<()> {
        let mut notes = self.book_notes.write().await;
        remove_existing(&mut notes, id, "BookNote")
    }
}

#[async_trait]
impl NoteRepository for InMemoryRepository {
    async fn get_note(&self, id: Uuid) -> Result<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.get(&id).cloned())
    }

    async fn list_notes(&self, user_id: Uuid) -> Result<Vec<Note>> {
        let notes = self.notes.read().await;
        let mut result: Vec<Note> = notes
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn create_note(&self, note: &Note) -> Result<()> {
        let mut notes = self.notes.write().await;
        insert_new(&mut notes, note.id, note, "Note")
    }

    async fn update_note(&self, note: &Note) -> Result<()> {
        let mut notes = self.notes.write().await;
        replace_existing(&mut notes, note.id, note, "Note")
    }

    async fn delete_note(&self, id: Uuid) -> Result<()> {
        let mut notes = self.notes.write().await;
        remove_existing(&mut notes, id, "Note")
    }
}

// ============================================================================
// Finance
// ============================================================================

fn check_category_unique(
    categories: &HashMap<Uuid, FinancialCategory>,
    category: &FinancialCategory,
) -> Result<()> {
    let taken = categories.values().any(|c| {
        c.id != category.id
            && c.user_id == category.user_id
            && c.parent_category == category.parent_category
            && c.name.eq_ignore_ascii_case(&category.name)
    });
    if taken {
        return Err(RepositoryError::already_exists("FinancialCategory", &category.name));
    }
    Ok(())
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn get_category(&self, id: Uuid) -> Result<Option<FinancialCategory>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn list_categories(&self, user_id: Uuid) -> Result<Vec<FinancialCategory>> {
        let categories = self.categories.read().await;
        let mut result: Vec<FinancialCategory> = categories
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn create_category(&self, category: &FinancialCategory) -> Result<()> {
        let mut categories = self.categories.write().await;
        check_category_unique(&categories, category)?;
        insert_new(&mut categories, category.id, category, "FinancialCategory")
    }

    async fn update_category(&self, category: &FinancialCategory) -> Result<()> {
        let mut categories = self.categories.write().await;
        check_category_unique(&categories, category)?;
        replace_existing(&mut categories, category.id, category, "FinancialCategory")
    }

    async fn delete_category(&self, id: Uuid) -> Result<()> {
        let mut categories = self.categories.write().await;
        remove_existing(&mut categories, id, "FinancialCategory")
    }
}

#[async_trait]
impl TransactionRepository for InMemoryRepository {
    async fn get_transaction(&self, id: Uuid) -> Result<Option<FinancialTransaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions.get(&id).cloned())
    }

    async fn list_transactions(&self, user_id: Uuid) -> Result<Vec<FinancialTransaction>> {
        let transactions = self.transactions.read().await;
        let mut result: Vec<FinancialTransaction> = transactions
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(result)
    }

    async fn create_transaction(&self, transaction: &FinancialTransaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        insert_new(&mut transactions, transaction.id, transaction, "FinancialTransaction")
    }

    async fn update_transaction(&self, transaction: &FinancialTransaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        replace_existing(&mut transactions, transaction.id, transaction, "FinancialTransaction")
    }

    async fn delete_transaction(&self, id: Uuid) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        remove_existing(&mut transactions, id, "FinancialTransaction")
    }
}

// ============================================================================
// Pokémon
// ============================================================================

fn check_base_unique(bases: &HashMap<Uuid, PokemonBase>, base: &PokemonBase) -> Result<()> {
    for other in bases.values().filter(|b| b.id != base.id) {
        if other.species_id == base.species_id {
            return Err(RepositoryError::already_exists("PokemonBase", base.species_id));
        }
        if other.name.eq_ignore_ascii_case(&base.name) {
            return Err(RepositoryError::already_exists("PokemonBase", &base.name));
        }
    }
    Ok(())
}

fn check_ownership_unique(owned: &HashMap<Uuid, UserPokemon>, pokemon: &UserPokemon) -> Result<()> {
    let taken = owned.values().any(|p| {
        p.id != pokemon.id && p.user_id == pokemon.user_id && p.base_id == pokemon.base_id
    });
    if taken {
        return Err(RepositoryError::already_exists("UserPokemon", pokemon.base_id));
    }
    Ok(())
}

#[async_trait]
impl PokemonBaseRepository for InMemoryRepository {
    async fn get_base(&self, id: Uuid) -> Result<Option<PokemonBase>> {
        let bases = self.pokemon_bases.read().await;
        Ok(bases.get(&id).cloned())
    }

    async fn get_base_by_species(&self, species_id: u32) -> Result<Option<PokemonBase>> {
        let bases = self.pokemon_bases.read().await;
        Ok(bases.values().find(|b| b.species_id == species_id).cloned())
    }

    async fn list_bases(&self) -> Result<Vec<PokemonBase>> {
        let bases = self.pokemon_bases.read().await;
        let mut result: Vec<PokemonBase> = bases.values().cloned().collect();
        result.sort_by_key(|b| b.species_id);
        Ok(result)
    }

    async fn create_base(&self, base: &PokemonBase) -> Result<()> {
        let mut bases = self.pokemon_bases.write().await;
        check_base_unique(&bases, base)?;
        insert_new(&mut bases, base.id, base, "PokemonBase")
    }

    async fn update_base(&self, base: &PokemonBase) -> Result<()> {
        let mut bases = self.pokemon_bases.write().await;
        check_base_unique(&bases, base)?;
        replace_existing(&mut bases, base.id, base, "PokemonBase")
    }
}

#[async_trait]
impl CollectionRepository for InMemoryRepository {
    async fn get_user_pokemon(&self, id: Uuid) -> Result<Option<UserPokemon>> {
        let owned = self.user_pokemon.read().await;
        Ok(owned.get(&id).cloned())
    }

    async fn list_user_pokemon(&self, user_id: Uuid) -> Result<Vec<UserPokemon>> {
        let owned = self.user_pokemon.read().await;
        let mut result: Vec<UserPokemon> = owned
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.obtained_at.cmp(&b.obtained_at));
        Ok(result)
    }

    async fn create_user_pokemon(&self, pokemon: &UserPokemon) -> Result<()> {
        let mut owned = self.user_pokemon.write().await;
        check_ownership_unique(&owned, pokemon)?;
        insert_new(&mut owned, pokemon.id, pokemon, "UserPokemon")
    }

    async fn update_user_pokemon(&self, pokemon: &UserPokemon) -> Result<()> {
        let mut owned = self.user_pokemon.write().await;
        check_ownership_unique(&owned, pokemon)?;
        replace_existing(&mut owned, pokemon.id, pokemon, "UserPokemon")
    }
}

// ============================================================================
// Workouts, media and tasks
// ============================================================================

#[async_trait]
impl WorkoutRepository for InMemoryRepository {
    async fn get_workout(&self, id: Uuid) -> Result<Option<WorkoutLog>> {
        let workouts = self.workouts.read().await;
        Ok(workouts.get(&id).cloned())
    }

    async fn list_workouts(&self, user_id: Uuid) -> Result<Vec<WorkoutLog>> {
        let workouts = self.workouts.read().await;
        let mut result: Vec<WorkoutLog> = workouts
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(result)
    }

    async fn create_workout(&self, log: &WorkoutLog) -> Result<()> {
        let mut workouts = self.workouts.write().await;
        insert_new(&mut workouts, log.id, log, "WorkoutLog")
    }

    async fn create_workouts(&self, logs: &[WorkoutLog]) -> Result<()> {
        let mut workouts = self.workouts.write().await;
        if let Some(taken) = logs.iter().find(|log| workouts.contains_key(&log.id)) {
            return Err(RepositoryError::already_exists("WorkoutLog", taken.id));
        }
        for log in logs {
            workouts.insert(log.id, log.clone());
        }
        Ok(())
    }

    async fn update_workout(&self, log: &WorkoutLog) -> Result<()> {
        let mut workouts = self.workouts.write().await;
        replace_existing(&mut workouts, log.id, log, "WorkoutLog")
    }

    async fn delete_workout(&self, id: Uuid) -> Result<()> {
        let mut workouts = self.workouts.write().await;
        remove_existing(&mut workouts, id, "WorkoutLog")
    }
}

#[async_trait]
impl MediaRepository for InMemoryRepository {
    async fn get_media(&self, id: Uuid) -> Result<Option<MediaItem>> {
        let media = self.media.read().await;
        Ok(media.get(&id).cloned())
    }

    async fn list_media(&self, user_id: Uuid) -> Result<Vec<MediaItem>> {
        let media = self.media.read().await;
        let mut result: Vec<MediaItem> = media
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn create_media(&self, item: &MediaItem) -> Result<()> {
        let mut media = self.media.write().await;
        insert_new(&mut media, item.id, item, "MediaItem")
    }

    async fn update_media(&self, item: &MediaItem) -> Result<()> {
        let mut media = self.media.write().await;
        replace_existing(&mut media, item.id, item, "MediaItem")
    }

    async fn delete_media(&self, id: Uuid) -> Result<()> {
        let mut media = self.media.write().await;
        remove_existing(&mut media, id, "MediaItem")
    }
}

#[async_trait]
impl TaskRepository for InMemoryRepository {
    async fn get_task(&self, id: Uuid) -> Result<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_task(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        insert_new(&mut tasks, task.id, task, "Task")
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        replace_existing(&mut tasks, task.id, task, "Task")
    }

    async fn delete_task(&self, id: Uuid) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        remove_existing(&mut tasks, id, "Task")
    }
}

// ============================================================================
// Item catalogues
// ============================================================================

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: Uuid) -> Result<Option<CollectibleItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_items(&self, category: GachaCategory) -> Result<Vec<CollectibleItem>> {
        let items = self.items.read().await;
        let mut result: Vec<CollectibleItem> = items
            .values()
            .filter(|i| i.category == category)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(result)
    }

    async fn create_item(&self, item: &CollectibleItem) -> Result<()> {
        let mut items = self.items.write().await;
        let taken = items
            .values()
            .any(|i| i.category == item.category && i.key == item.key);
        if taken {
            return Err(RepositoryError::already_exists("CollectibleItem", &item.key));
        }
        insert_new(&mut items, item.id, item, "CollectibleItem")
    }
}

#[async_trait]
impl UserItemRepository for InMemoryRepository {
    async fn list_user_items(&self, user_id: Uuid) -> Result<Vec<UserItem>> {
        let user_items = self.user_items.read().await;
        let mut result: Vec<UserItem> = user_items
            .values()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by_key(|i| i.obtained_at);
        Ok(result)
    }

    async fn create_user_items(&self, items: &[UserItem]) -> Result<()> {
        let mut user_items = self.user_items.write().await;
        if let Some(taken) = items.iter().find(|i| user_items.contains_key(&i.id)) {
            return Err(RepositoryError::already_exists("UserItem", taken.id));
        }
        for item in items {
            user_items.insert(item.id, item.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};
    use lifequest_core::finance::TransactionKind;
    use lifequest_core::volume::{parse_greentext, Volume, VolumeStatus};

    fn sample_volume(number: u32, status: VolumeStatus) -> Volume {
        let raw = format!("Volume {number} – Test\n>be me\nThe dream of testing.");
        Volume::from_parsed(parse_greentext(&raw), raw.clone(), status, Uuid::new_v4()).unwrap()
    }

    #[tokio::test]
    async fn test_user_uniqueness() {
        let repo = InMemoryRepository::new();
        let user = User::new("ash@example.com", "ash", "hash");
        repo.create_user(&user).await.unwrap();

        let same_email = User::new("ash@example.com", "red", "hash");
        assert!(matches!(
            repo.create_user(&same_email).await,
            Err(RepositoryError::AlreadyExists { .. })
        ));

        let same_username = User::new("red@example.com", "ASH", "hash");
        assert!(matches!(
            repo.create_user(&same_username).await,
            Err(RepositoryError::AlreadyExists { .. })
        ));

        let found = repo.get_user_by_email("ash@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_volume_number_is_unique_and_lists_sort_ascending() {
        let repo = InMemoryRepository::new();
        repo.create_volume(&sample_volume(3, VolumeStatus::Published))
            .await
            .unwrap();
        repo.create_volume(&sample_volume(1, VolumeStatus::Draft))
            .await
            .unwrap();

        let duplicate = sample_volume(3, VolumeStatus::Draft);
        assert!(matches!(
            repo.create_volume(&duplicate).await,
            Err(RepositoryError::AlreadyExists { .. })
        ));

        let numbers: Vec<u32> = repo
            .list_volumes()
            .await
            .unwrap()
            .iter()
            .map(|v| v.volume_number)
            .collect();
        assert_eq!(numbers, vec![1, 3]);

        let published = repo.list_published_volumes().await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].volume_number, 3);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_records() {
        let repo = InMemoryRepository::new();
        let habit = Habit::new(Uuid::new_v4(), "Stretch");

        assert!(repo.update_habit(&habit).await.unwrap_err().is_not_found());
        assert!(repo.delete_habit(habit.id).await.unwrap_err().is_not_found());

        repo.create_habit(&habit).await.unwrap();
        repo.delete_habit(habit.id).await.unwrap();
        assert_eq!(repo.get_habit(habit.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lists_are_scoped_and_newest_first() {
        let repo = InMemoryRepository::new();
        let user_id = Uuid::new_v4();

        let mut older = Note::new(user_id, "first");
        older.created_at = Utc::now() - Duration::hours(1);
        let newer = Note::new(user_id, "second");
        let foreign = Note::new(Uuid::new_v4(), "not mine");

        for note in [&older, &newer, &foreign] {
            repo.create_note(note).await.unwrap();
        }

        let notes = repo.list_notes(user_id).await.unwrap();
        let contents: Vec<&str> = notes.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_transactions_sorted_by_date_descending() {
        let repo = InMemoryRepository::new();
        let user_id = Uuid::new_v4();
        let date = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();

        for day in [5, 20, 1] {
            let tx = FinancialTransaction::new(
                user_id,
                TransactionKind::Expense,
                10.0,
                "Coffee",
                Uuid::new_v4(),
                date(day),
            );
            repo.create_transaction(&tx).await.unwrap();
        }

        let dates: Vec<NaiveDate> = repo
            .list_transactions(user_id)
            .await
            .unwrap()
            .iter()
            .map(|t| t.date)
            .collect();
        assert_eq!(dates, vec![date(20), date(5), date(1)]);
    }

    #[tokio::test]
    async fn test_category_name_unique_per_parent() {
        let repo = InMemoryRepository::new();
        let user_id = Uuid::new_v4();
        let food = FinancialCategory::new(user_id, "Food");
        repo.create_category(&food).await.unwrap();

        let dup = FinancialCategory::new(user_id, "food");
        assert!(repo.create_category(&dup).await.is_err());

        let child = FinancialCategory::new(user_id, "Food").with_parent(food.id);
        repo.create_category(&child).await.unwrap();

        let other_user = FinancialCategory::new(Uuid::new_v4(), "Food");
        repo.create_category(&other_user).await.unwrap();
    }

    #[tokio::test]
    async fn test_one_pokemon_per_user_per_base() {
        let repo = InMemoryRepository::new();
        let base = PokemonBase::new(1, "Bulbasaur", 1, &["grass"]);
        repo.create_base(&base).await.unwrap();
        assert!(repo
            .create_base(&PokemonBase::new(1, "Bulba", 1, &["grass"]))
            .await
            .is_err());

        let user_id = Uuid::new_v4();
        repo.create_user_pokemon(&UserPokemon::new(user_id, base.id))
            .await
            .unwrap();
        assert!(matches!(
            repo.create_user_pokemon(&UserPokemon::new(user_id, base.id))
                .await,
            Err(RepositoryError::AlreadyExists { .. })
        ));

        repo.create_user_pokemon(&UserPokemon::new(Uuid::new_v4(), base.id))
            .await
            .unwrap();
        assert_eq!(repo.list_user_pokemon(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deleting_book_removes_its_notes() {
        let repo = InMemoryRepository::new();
        let user_id = Uuid::new_v4();
        let book = Book::new(user_id, "Dune", "Frank Herbert", 412);
        let other = Book::new(user_id, "Emma", "Jane Austen", 300);
        repo.create_book(&book).await.unwrap();
        repo.create_book(&other).await.unwrap();

        repo.create_book_note(&BookNote::new(user_id, book.id, "spice"))
            .await
            .unwrap();
        let kept = BookNote::new(user_id, other.id, "matchmaking");
        repo.create_book_note(&kept).await.unwrap();

        repo.delete_book(book.id).await.unwrap();

        assert!(repo.list_book_notes(book.id).await.unwrap().is_empty());
        assert_eq!(repo.list_book_notes(other.id).await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn test_bulk_workouts_are_all_or_nothing() {
        use lifequest_core::workout::ExercisePerformance;

        let repo = InMemoryRepository::new();
        let user_id = Uuid::new_v4();
        let day = |d| NaiveDate::from_ymd_opt(2025, 5, d).unwrap();
        let existing = WorkoutLog::new(user_id, day(1), vec![ExercisePerformance::named("Row")]);
        repo.create_workout(&existing).await.unwrap();

        let fresh = WorkoutLog::new(user_id, day(3), vec![ExercisePerformance::named("Run")]);
        let result = repo.create_workouts(&[fresh.clone(), existing.clone()]).await;
        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
        assert_eq!(repo.list_workouts(user_id).await.unwrap().len(), 1);

        repo.create_workouts(std::slice::from_ref(&fresh)).await.unwrap();
        let dates: Vec<NaiveDate> = repo
            .list_workouts(user_id)
            .await
            .unwrap()
            .iter()
            .map(|w| w.date)
            .collect();
        assert_eq!(dates, vec![day(3), day(1)]);
    }

    #[tokio::test]
    async fn test_item_key_unique_per_category() {
        use lifequest_core::collectible::Rarity;

        let repo = InMemoryRepository::new();
        let card = CollectibleItem::new(GachaCategory::Yugioh, "001", "Kuriboh", Rarity::Common);
        repo.create_item(&card).await.unwrap();

        let dup = CollectibleItem::new(GachaCategory::Yugioh, "001", "Other", Rarity::Rare);
        assert!(matches!(
            repo.create_item(&dup).await,
            Err(RepositoryError::AlreadyExists { .. })
        ));

        let snoopy = CollectibleItem::new(GachaCategory::Snoopy, "001", "Joe Cool", Rarity::Epic);
        repo.create_item(&snoopy).await.unwrap();
        assert_eq!(repo.list_items(GachaCategory::Yugioh).await.unwrap(), vec![card]);
    }
}
