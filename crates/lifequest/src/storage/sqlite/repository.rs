//! SQLite repository implementation.
//!
//! Implements the repository traits from `lifequest_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::{params_from_iter, types::Value, Row};
use tokio_rusqlite::Connection;
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

use super::conversions::{
    enum_to_text, format_date, format_datetime, format_optional_date, row_to_base, row_to_book,
    row_to_book_note, row_to_category, row_to_habit, row_to_item, row_to_media, row_to_note,
    row_to_task, row_to_transaction, row_to_user, row_to_user_item, row_to_user_pokemon,
    row_to_volume, row_to_workout, to_json,
};
use super::error::map_error;
use super::schema;

type RowMapper<T> = fn(&Row) -> rusqlite::Result<T>;

fn uuid_value(id: Uuid) -> Value {
    Value::Text(id.to_string())
}

fn count_value(n: u64) -> Value {
    Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

/// SQLite-based repository implementation.
///
/// One `tokio_rusqlite::Connection` runs every statement on its background
/// thread, so calls are serialized.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) the database file and applies the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[allow(dead_code)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn fetch_one<T: Send + 'static>(
        &self,
        sql: String,
        params: Vec<Value>,
        map: RowMapper<T>,
        entity_type: &'static str,
        key: String,
    ) -> Result<Option<T>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                match stmt.query_row(params_from_iter(params), map) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(|e| map_error(e, entity_type, key))
    }

    async fn fetch_all<T: Send + 'static>(
        &self,
        sql: String,
        params: Vec<Value>,
        map: RowMapper<T>,
        entity_type: &'static str,
    ) -> Result<Vec<T>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map(params_from_iter(params), map)?;
                let mut items = Vec::new();
                for row in rows {
                    items.push(row?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| map_error(e, entity_type, "list"))
    }

    /// Runs a write; `key` names the conflicting value on constraint errors.
    async fn execute(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        entity_type: &'static str,
        key: String,
    ) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(sql, params_from_iter(params))?;
                Ok(())
            })
            .await
            .map_err(|e| map_error(e, entity_type, key))
    }

    /// Runs one insert per parameter row inside a single transaction.
    async fn execute_all(
        &self,
        sql: &'static str,
        rows: Vec<Vec<Value>>,
        entity_type: &'static str,
        key: String,
    ) -> Result<()> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                {
                    let mut stmt = tx.prepare(sql)?;
                    for params in rows {
                        stmt.execute(params_from_iter(params))?;
                    }
                }
                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(|e| map_error(e, entity_type, key))
    }

    /// Runs an update or delete that must touch exactly one existing row.
    async fn execute_existing(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        entity_type: &'static str,
        key: String,
    ) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(sql, params_from_iter(params))?;
                if rows == 0 {
                    Err(rusqlite::Error::QueryReturnedNoRows.into())
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_error(e, entity_type, key))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

fn user_values(user: &User) -> Result<Vec<Value>> {
    Ok(vec![
        uuid_value(user.id),
        Value::Text(user.email.clone()),
        Value::Text(user.username.clone()),
        Value::Text(user.password_hash.clone()),
        Value::Text(enum_to_text(&user.role)?),
        Value::Text(to_json(&user.progression)?),
        Value::Text(to_json(&user.displayed_pokemon)?),
    ])
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        self.fetch_one(
            schema::select_user_by_id(),
            vec![uuid_value(id)],
            row_to_user,
            "User",
            id.to_string(),
        )
        .await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.fetch_one(
            schema::select_user_by_email(),
            vec![Value::Text(email.to_string())],
            row_to_user,
            "User",
            email.to_string(),
        )
        .await
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut params = user_values(user)?;
        params.push(Value::Text(format_datetime(&user.created_at)));
        params.push(Value::Text(format_datetime(&user.updated_at)));
        self.execute(schema::INSERT_USER, params, "User", user.email.clone())
            .await
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut params = user_values(user)?;
        params.push(Value::Text(format_datetime(&user.updated_at)));
        self.execute_existing(schema::UPDATE_USER, params, "User", user.id.to_string())
            .await
    }
}

// ============================================================================
// VolumeRepository implementation
// ============================================================================

fn volume_values(volume: &Volume) -> Result<Vec<Value>> {
    Ok(vec![
        uuid_value(volume.id),
        Value::Integer(volume.volume_number.into()),
        Value::Text(volume.title.clone()),
        Value::Text(to_json(&volume.body_lines)?),
        Value::Text(volume.blessing_intro.clone()),
        Value::Text(to_json(&volume.blessings)?),
        Value::Text(volume.dream.clone()),
        Value::Text(volume.edition.clone()),
        Value::Text(volume.raw_pasted_text.clone()),
        Value::Text(enum_to_text(&volume.status)?),
    ])
}

#[async_trait]
impl VolumeRepository for SqliteRepository {
    async fn get_volume(&self, id: Uuid) -> Result<Option<Volume>> {
        self.fetch_one(
            schema::select_volume_by_id(),
            vec![uuid_value(id)],
            row_to_volume,
            "Volume",
            id.to_string(),
        )
        .await
    }

    async fn get_volume_by_number(&self, volume_number: u32) -> Result<Option<Volume>> {
        self.fetch_one(
            schema::select_volume_by_number(),
            vec![Value::Integer(volume_number.into())],
            row_to_volume,
            "Volume",
            volume_number.to_string(),
        )
        .await
    }

    async fn list_volumes(&self) -> Result<Vec<Volume>> {
        self.fetch_all(schema::select_volumes(), Vec::new(), row_to_volume, "Volume")
            .await
    }

    async fn list_published_volumes(&self) -> Result<Vec<Volume>> {
        self.fetch_all(
            schema::select_volumes_by_status(),
            vec![Value::Text(enum_to_text(&VolumeStatus::Published)?)],
            row_to_volume,
            "Volume",
        )
        .await
    }

    async fn create_volume(&self, volume: &Volume) -> Result<()> {
        let mut params = volume_values(volume)?;
        params.extend([
            uuid_value(volume.created_by),
            count_value(volume.favorite_count),
            Value::Text(to_json(&volume.ratings)?),
            Value::Real(volume.average_rating),
            count_value(volume.rating_count),
            Value::Text(format_datetime(&volume.created_at)),
            Value::Text(format_datetime(&volume.updated_at)),
        ]);
        self.execute(
            schema::INSERT_VOLUME,
            params,
            "Volume",
            volume.volume_number.to_string(),
        )
        .await
    }

    async fn update_volume(&self, volume: &Volume) -> Result<()> {
        let mut params = volume_values(volume)?;
        params.extend([
            count_value(volume.favorite_count),
            Value::Text(to_json(&volume.ratings)?),
            Value::Real(volume.average_rating),
            count_value(volume.rating_count),
            Value::Text(format_datetime(&volume.updated_at)),
        ]);
        let exists = self.get_volume(volume.id).await?.is_some();
        if !exists {
            return Err(RepositoryError::not_found("Volume", volume.id));
        }
        self.execute_existing(
            schema::UPDATE_VOLUME,
            params,
            "Volume",
            volume.volume_number.to_string(),
        )
        .await
    }

    async fn delete_volume(&self, id: Uuid) -> Result<()> {
        self.execute_existing(schema::DELETE_VOLUME, vec![uuid_value(id)], "Volume", id.to_string())
            .await
    }
}

// ============================================================================
// HabitRepository implementation
// ============================================================================

#[async_trait]
impl HabitRepository for SqliteRepository {
    async fn get_habit(&self, id: Uuid) -> Result<Option<Habit>> {
        self.fetch_one(
            schema::select_habit_by_id(),
            vec![uuid_value(id)],
            row_to_habit,
            "Habit",
            id.to_string(),
        )
        .await
    }

    async fn list_habits(&self, user_id: Uuid) -> Result<Vec<Habit>> {
        self.fetch_all(
            schema::select_habits_by_user(),
            vec![uuid_value(user_id)],
            row_to_habit,
            "Habit",
        )
        .await
    }

    async fn create_habit(&self, habit: &Habit) -> Result<()> {
        let params = vec![
            uuid_value(habit.id),
            uuid_value(habit.user_id),
            Value::Text(habit.name.clone()),
            Value::Text(habit.description.clone()),
            Value::Integer(habit.streak.into()),
            Value::Integer(habit.longest_streak.into()),
            format_optional_date(habit.last_completed_date).into(),
            Value::Text(format_datetime(&habit.created_at)),
            Value::Text(format_datetime(&habit.updated_at)),
        ];
        self.execute(schema::INSERT_HABIT, params, "Habit", habit.id.to_string())
            .await
    }

    async fn update_habit(&self, habit: &Habit) -> Result<()> {
        let params = vec![
            uuid_value(habit.id),
            Value::Text(habit.name.clone()),
            Value::Text(habit.description.clone()),
            Value::Integer(habit.streak.into()),
            Value::Integer(habit.longest_streak.into()),
            format_optional_date(habit.last_completed_date).into(),
            Value::Text(format_datetime(&habit.updated_at)),
        ];
        self.execute_existing(schema::UPDATE_HABIT, params, "Habit", habit.id.to_string())
            .await
    }

    async fn delete_habit(&self, id: Uuid) -> Result<()> {
        self.execute_existing(schema::DELETE_HABIT, vec![uuid_value(id)], "Habit", id.to_string())
            .await
    }
}

// ============================================================================
// BookRepository implementation
// ============================================================================

fn book_fields(book: &Book) -> Vec<Value> {
    vec![
        Value::Text(book.title.clone()),
        Value::Text(book.author.clone()),
        book.year.into(),
        Value::Integer(book.total_pages.into()),
        Value::Integer(book.pages_read.into()),
        book.is_finished.into(),
        book.is_owned.into(),
        Value::Text(book.cover_image_url.clone()),
        Value::Text(book.synopsis.clone()),
        book.user_rating.into(),
        Value::Text(book.notes.clone()),
        format_optional_date(book.started_date).into(),
        format_optional_date(book.finished_date).into(),
    ]
}

#[async_trait]
impl BookRepository for SqliteRepository {
    async fn get_book(&self, id: Uuid) -> Result<Option<Book>> {
        self.fetch_one(
            schema::select_book_by_id(),
            vec![uuid_value(id)],
            row_to_book,
            "Book",
            id.to_string(),
        )
        .await
    }

    async fn list_books(&self, user_id: Uuid) -> Result<Vec<Book>> {
        self.fetch_all(
            schema::select_books_by_user(),
            vec![uuid_value(user_id)],
            row_to_book,
            "Book",
        )
        .await
    }

    async fn create_book(&self, book: &Book) -> Result<()> {
        let mut params = vec![uuid_value(book.id), uuid_value(book.user_id)];
        params.extend(book_fields(book));
        params.push(Value::Text(format_datetime(&book.created_at)));
        params.push(Value::Text(format_datetime(&book.updated_at)));
        self.execute(schema::INSERT_BOOK, params, "Book", book.id.to_string())
            .await
    }

    async fn update_book(&self, book: &Book) -> Result<()> {
        let mut params = vec![uuid_value(book.id)];
        params.extend(book_fields(book));
        params.push(Value::Text(format_datetime(&book.updated_at)));
        self.execute_existing(schema::UPDATE_BOOK, params, "Book", book.id.to_string())
            .await
    }

    async fn delete_book(&self, id: Uuid) -> Result<()> {
        self.execute_existing(schema::DELETE_BOOK, vec![uuid_value(id)], "Book", id.to_string())
            .await
    }
}

// ============================================================================
// CategoryRepository / TransactionRepository implementations
// ============================================================================

#[async_trait]
impl CategoryRepository for SqliteRepository {
    async fn get_category(&self, id: Uuid) -> Result<Option<FinancialCategory>> {
        self.fetch_one(
            schema::select_category_by_id(),
            vec![uuid_value(id)],
            row_to_category,
            "FinancialCategory",
            id.to_string(),
        )
        .await
    }

    async fn list_categories(&self, user_id: Uuid) -> Result<Vec<FinancialCategory>> {
        self.fetch_all(
            schema::select_categories_by_user(),
            vec![uuid_value(user_id)],
            row_to_category,
            "FinancialCategory",
        )
        .await
    }

    async fn create_category(&self, category: &FinancialCategory) -> Result<()> {
        let params = vec![
            uuid_value(category.id),
            uuid_value(category.user_id),
            Value::Text(category.name.clone()),
            Value::Text(category.color.clone()),
            category.parent_category.map(|p| p.to_string()).into(),
            Value::Text(format_datetime(&category.created_at)),
            Value::Text(format_datetime(&category.updated_at)),
        ];
        self.execute(
            schema::INSERT_CATEGORY,
            params,
            "FinancialCategory",
            category.name.clone(),
        )
        .await
    }

    async fn update_category(&self, category: &FinancialCategory) -> Result<()> {
        if self.get_category(category.id).await?.is_none() {
            return Err(RepositoryError::not_found("FinancialCategory", category.id));
        }
        let params = vec![
            uuid_value(category.id),
            Value::Text(category.name.clone()),
            Value::Text(category.color.clone()),
            category.parent_category.map(|p| p.to_string()).into(),
            Value::Text(format_datetime(&category.updated_at)),
        ];
        self.execute_existing(
            schema::UPDATE_CATEGORY,
            params,
            "FinancialCategory",
            category.name.clone(),
        )
        .await
    }

    async fn delete_category(&self, id: Uuid) -> Result<()> {
        self.execute_existing(
            schema::DELETE_CATEGORY,
            vec![uuid_value(id)],
            "FinancialCategory",
            id.to_string(),
        )
        .await
    }
}

fn transaction_fields(tx: &FinancialTransaction) -> Result<Vec<Value>> {
    Ok(vec![
        Value::Text(enum_to_text(&tx.kind)?),
        Value::Real(tx.amount),
        Value::Text(tx.description.clone()),
        uuid_value(tx.category_id),
        Value::Text(format_date(&tx.date)),
        tx.account.clone().into(),
    ])
}

#[async_trait]
impl TransactionRepository for SqliteRepository {
    async fn get_transaction(&self, id: Uuid) -> Result<Option<FinancialTransaction>> {
        self.fetch_one(
            schema::select_transaction_by_id(),
            vec![uuid_value(id)],
            row_to_transaction,
            "FinancialTransaction",
            id.to_string(),
        )
        .await
    }

    async fn list_transactions(&self, user_id: Uuid) -> Result<Vec<FinancialTransaction>> {
        self.fetch_all(
            schema::select_transactions_by_user(),
            vec![uuid_value(user_id)],
            row_to_transaction,
            "FinancialTransaction",
        )
        .await
    }

    async fn create_transaction(&self, transaction: &FinancialTransaction) -> Result<()> {
        let mut params = vec![uuid_value(transaction.id), uuid_value(transaction.user_id)];
        params.extend(transaction_fields(transaction)?);
        params.push(Value::Text(format_datetime(&transaction.created_at)));
        params.push(Value::Text(format_datetime(&transaction.updated_at)));
        self.execute(
            schema::INSERT_TRANSACTION,
            params,
            "FinancialTransaction",
            transaction.id.to_string(),
        )
        .await
    }

    async fn update_transaction(&self, transaction: &FinancialTransaction) -> Result<()> {
        let mut params = vec![uuid_value(transaction.id)];
        params.extend(transaction_fields(transaction)?);
        params.push(Value::Text(format_datetime(&transaction.updated_at)));
        self.execute_existing(
            schema::UPDATE_TRANSACTION,
            params,
            "FinancialTransaction",
            transaction.id.to_string(),
        )
        .await
    }

    async fn delete_transaction(&self, id: Uuid) -> Result<()> {
        self.execute_existing(
            schema::DELETE_TRANSACTION,
            vec![uuid_value(id)],
            "FinancialTransaction",
            id.to_string(),
        )
        .await
    }
}

// ============================================================================
// PokemonBaseRepository / CollectionRepository implementations
// ============================================================================

fn base_values(base: &PokemonBase) -> Result<Vec<Value>> {
    Ok(vec![
        uuid_value(base.id),
        Value::Integer(base.species_id.into()),
        Value::Text(base.name.clone()),
        Value::Integer(base.generation.into()),
        Value::Text(to_json(&base.base_types)?),
        base.is_legendary.into(),
        base.is_mythical.into(),
        base.is_starter.into(),
        Value::Text(base.description.clone()),
        Value::Text(to_json(&base.forms)?),
        Value::Text(to_json(&base.evolution_paths)?),
    ])
}

#[async_trait]
impl PokemonBaseRepository for SqliteRepository {
    async fn get_base(&self, id: Uuid) -> Result<Option<PokemonBase>> {
        self.fetch_one(
            schema::select_base_by_id(),
            vec![uuid_value(id)],
            row_to_base,
            "PokemonBase",
            id.to_string(),
        )
        .await
    }

    async fn get_base_by_species(&self, species_id: u32) -> Result<Option<PokemonBase>> {
        self.fetch_one(
            schema::select_base_by_species(),
            vec![Value::Integer(species_id.into())],
            row_to_base,
            "PokemonBase",
            species_id.to_string(),
        )
        .await
    }

    async fn list_bases(&self) -> Result<Vec<PokemonBase>> {
        self.fetch_all(schema::select_bases(), Vec::new(), row_to_base, "PokemonBase")
            .await
    }

    async fn create_base(&self, base: &PokemonBase) -> Result<()> {
        let mut params = base_values(base)?;
        params.push(Value::Text(format_datetime(&base.created_at)));
        params.push(Value::Text(format_datetime(&base.updated_at)));
        self.execute(schema::INSERT_BASE, params, "PokemonBase", base.species_id.to_string())
            .await
    }

    async fn update_base(&self, base: &PokemonBase) -> Result<()> {
        if self.get_base(base.id).await?.is_none() {
            return Err(RepositoryError::not_found("PokemonBase", base.id));
        }
        let mut params = base_values(base)?;
        params.push(Value::Text(format_datetime(&base.updated_at)));
        self.execute_existing(
            schema::UPDATE_BASE,
            params,
            "PokemonBase",
            base.species_id.to_string(),
        )
        .await
    }
}

fn user_pokemon_fields(pokemon: &UserPokemon) -> Result<Vec<Value>> {
    Ok(vec![
        uuid_value(pokemon.base_id),
        pokemon.nickname.clone().into(),
        Value::Text(enum_to_text(&pokemon.variant)?),
        Value::Integer(pokemon.level.into()),
        count_value(pokemon.xp),
        count_value(pokemon.xp_to_next_level),
    ])
}

#[async_trait]
impl CollectionRepository for SqliteRepository {
    async fn get_user_pokemon(&self, id: Uuid) -> Result<Option<UserPokemon>> {
        self.fetch_one(
            schema::select_user_pokemon_by_id(),
            vec![uuid_value(id)],
            row_to_user_pokemon,
            "UserPokemon",
            id.to_string(),
        )
        .await
    }

    async fn list_user_pokemon(&self, user_id: Uuid) -> Result<Vec<UserPokemon>> {
        self.fetch_all(
            schema::select_user_pokemon_by_user(),
            vec![uuid_value(user_id)],
            row_to_user_pokemon,
            "UserPokemon",
        )
        .await
    }

    async fn create_user_pokemon(&self, pokemon: &UserPokemon) -> Result<()> {
        let mut params = vec![uuid_value(pokemon.id), uuid_value(pokemon.user_id)];
        params.extend(user_pokemon_fields(pokemon)?);
        params.push(Value::Text(format_datetime(&pokemon.obtained_at)));
        self.execute(
            schema::INSERT_USER_POKEMON,
            params,
            "UserPokemon",
            pokemon.base_id.to_string(),
        )
        .await
    }

    async fn update_user_pokemon(&self, pokemon: &UserPokemon) -> Result<()> {
        if self.get_user_pokemon(pokemon.id).await?.is_none() {
            return Err(RepositoryError::not_found("UserPokemon", pokemon.id));
        }
        let mut params = vec![uuid_value(pokemon.id)];
        params.extend(user_pokemon_fields(pokemon)?);
        self.execute_existing(
            schema::UPDATE_USER_POKEMON,
            params,
            "UserPokemon",
            pokemon.base_id.to_string(),
        )
        .await
    }
}

// ============================================================================
// NoteRepository implementation
// ============================================================================

#[async_trait]
impl NoteRepository for SqliteRepository {
    async fn get_note(&self, id: Uuid) -> Result<Option<Note>> {
        self.fetch_one(
            schema::select_note_by_id(),
            vec![uuid_value(id)],
            row_to_note,
            "Note",
            id.to_string(),
        )
        .await
    }

    async fn list_notes(&self, user_id: Uuid) -> Result<Vec<Note>> {
        self.fetch_all(
            schema::select_notes_by_user(),
            vec![uuid_value(user_id)],
            row_to_note,
            "Note",
        )
        .await
    }

    async fn create_note(&self, note: &Note) -> Result<()> {
        let params = vec![
            uuid_value(note.id),
            uuid_value(note.user_id),
            Value::Text(note.title.clone()),
            Value::Text(note.content.clone()),
            Value::Text(to_json(&note.tags)?),
            Value::Text(format_datetime(&note.created_at)),
            Value::Text(format_datetime(&note.updated_at)),
        ];
        self.execute(schema::INSERT_NOTE, params, "Note", note.id.to_string())
            .await
    }

    async fn update_note(&self, note: &Note) -> Result<()> {
        let params = vec![
            uuid_value(note.id),
            Value::Text(note.title.clone()),
            Value::Text(note.content.clone()),
            Value::Text(to_json(&note.tags)?),
            Value::Text(format_datetime(&note.updated_at)),
        ];
        self.execute_existing(schema::UPDATE_NOTE, params, "Note", note.id.to_string())
            .await
    }

    async fn delete_note(&self, id: Uuid) -> Result<()> {
        self.execute_existing(schema::DELETE_NOTE, vec![uuid_value(id)], "Note", id.to_string())
            .await
    }
}

// ============================================================================
// BookNoteRepository implementation
// ============================================================================

fn book_note_fields(note: &BookNote) -> Result<Vec<Value>> {
    Ok(vec![
        Value::Text(enum_to_text(&note.kind)?),
        note.page_start.into(),
        note.page_end.into(),
        Value::Text(note.chapter.clone()),
        Value::Text(note.content.clone()),
        Value::Text(to_json(&note.tags)?),
    ])
}

#[async_trait]
impl BookNoteRepository for SqliteRepository {
    async fn get_book_note(&self, id: Uuid) -> Result<Option<BookNote>> {
        self.fetch_one(
            schema::select_book_note_by_id(),
            vec![uuid_value(id)],
            row_to_book_note,
            "BookNote",
            id.to_string(),
        )
        .await
    }

    async fn list_book_notes(&self, book_id: Uuid) -> Result<Vec<BookNote>> {
        self.fetch_all(
            schema::select_book_notes_by_book(),
            vec![uuid_value(book_id)],
            row_to_book_note,
            "BookNote",
        )
        .await
    }

    async fn create_book_note(&self, note: &BookNote) -> Result<()> {
        let mut params = vec![
            uuid_value(note.id),
            uuid_value(note.user_id),
            uuid_value(note.book_id),
        ];
        params.extend(book_note_fields(note)?);
        params.push(Value::Text(format_datetime(&note.created_at)));
        params.push(Value::Text(format_datetime(&note.updated_at)));
        self.execute(schema::INSERT_BOOK_NOTE, params, "BookNote", note.id.to_string())
            .await
    }

    async fn update_book_note(&self, note: &BookNote) -> Result<()> {
        let mut params = vec![uuid_value(note.id)];
        params.extend(book_note_fields(note)?);
        params.push(Value::Text(format_datetime(&note.updated_at)));
        self.execute_existing(schema::UPDATE_BOOK_NOTE, params, "BookNote", note.id.to_string())
            .await
    }

    async fn delete_book_note(&self, id: Uuid) -> Result<()> {
        self.execute_existing(
            schema::DELETE_BOOK_NOTE,
            vec![uuid_value(id)],
            "BookNote",
            id.to_string(),
        )
        .await
    }
}

// ============================================================================
// WorkoutRepository implementation
// ============================================================================

fn workout_fields(log: &WorkoutLog) -> Result<Vec<Value>> {
    let feeling = log.overall_feeling.as_ref().map(enum_to_text).transpose()?;
    Ok(vec![
        Value::Text(format_date(&log.date)),
        Value::Text(log.workout_name.clone()),
        log.duration_session_minutes.into(),
        Value::Text(to_json(&log.exercises)?),
        feeling.into(),
        Value::Text(log.notes_session.clone()),
    ])
}

fn workout_insert_values(log: &WorkoutLog) -> Result<Vec<Value>> {
    let mut params = vec![uuid_value(log.id), uuid_value(log.user_id)];
    params.extend(workout_fields(log)?);
    params.push(Value::Text(format_datetime(&log.created_at)));
    params.push(Value::Text(format_datetime(&log.updated_at)));
    Ok(params)
}

#[async_trait]
impl WorkoutRepository for SqliteRepository {
    async fn get_workout(&self, id: Uuid) -> Result<Option<WorkoutLog>> {
        self.fetch_one(
            schema::select_workout_by_id(),
            vec![uuid_value(id)],
            row_to_workout,
            "WorkoutLog",
            id.to_string(),
        )
        .await
    }

    async fn list_workouts(&self, user_id: Uuid) -> Result<Vec<WorkoutLog>> {
        self.fetch_all(
            schema::select_workouts_by_user(),
            vec![uuid_value(user_id)],
            row_to_workout,
            "WorkoutLog",
        )
        .await
    }

    async fn create_workout(&self, log: &WorkoutLog) -> Result<()> {
        self.execute(
            schema::INSERT_WORKOUT,
            workout_insert_values(log)?,
            "WorkoutLog",
            log.id.to_string(),
        )
        .await
    }

    async fn create_workouts(&self, logs: &[WorkoutLog]) -> Result<()> {
        let rows = logs
            .iter()
            .map(workout_insert_values)
            .collect::<Result<Vec<_>>>()?;
        self.execute_all(schema::INSERT_WORKOUT, rows, "WorkoutLog", "bulk import".to_string())
            .await
    }

    async fn update_workout(&self, log: &WorkoutLog) -> Result<()> {
        let mut params = vec![uuid_value(log.id)];
        params.extend(workout_fields(log)?);
        params.push(Value::Text(format_datetime(&log.updated_at)));
        self.execute_existing(schema::UPDATE_WORKOUT, params, "WorkoutLog", log.id.to_string())
            .await
    }

    async fn delete_workout(&self, id: Uuid) -> Result<()> {
        self.execute_existing(
            schema::DELETE_WORKOUT,
            vec![uuid_value(id)],
            "WorkoutLog",
            id.to_string(),
        )
        .await
    }
}

// ============================================================================
// MediaRepository / TaskRepository implementations
// ============================================================================

fn media_fields(item: &MediaItem) -> Result<Vec<Value>> {
    Ok(vec![
        Value::Text(enum_to_text(&item.media_type)?),
        Value::Text(item.title.clone()),
        Value::Text(item.platform_or_network.clone()),
        Value::Text(item.creator_or_developer.clone()),
        Value::Text(enum_to_text(&item.status)?),
        item.user_rating.into(),
        Value::Text(item.notes.clone()),
        item.current_season.into(),
        item.current_episode.into(),
        Value::Text(item.progress_notes.clone()),
        Value::Text(item.cover_image_url.clone()),
        Value::Text(to_json(&item.genre)?),
        item.release_year.into(),
        format_optional_date(item.started_date).into(),
        format_optional_date(item.completed_date).into(),
    ])
}

#[async_trait]
impl MediaRepository for SqliteRepository {
    async fn get_media(&self, id: Uuid) -> Result<Option<MediaItem>> {
        self.fetch_one(
            schema::select_media_by_id(),
            vec![uuid_value(id)],
            row_to_media,
            "MediaItem",
            id.to_string(),
        )
        .await
    }

    async fn list_media(&self, user_id: Uuid) -> Result<Vec<MediaItem>> {
        self.fetch_all(
            schema::select_media_by_user(),
            vec![uuid_value(user_id)],
            row_to_media,
            "MediaItem",
        )
        .await
    }

    async fn create_media(&self, item: &MediaItem) -> Result<()> {
        let mut params = vec![uuid_value(item.id), uuid_value(item.user_id)];
        params.extend(media_fields(item)?);
        params.push(Value::Text(format_datetime(&item.created_at)));
        params.push(Value::Text(format_datetime(&item.updated_at)));
        self.execute(schema::INSERT_MEDIA, params, "MediaItem", item.id.to_string())
            .await
    }

    async fn update_media(&self, item: &MediaItem) -> Result<()> {
        let mut params = vec![uuid_value(item.id)];
        params.extend(media_fields(item)?);
        params.push(Value::Text(format_datetime(&item.updated_at)));
        self.execute_existing(schema::UPDATE_MEDIA, params, "MediaItem", item.id.to_string())
            .await
    }

    async fn delete_media(&self, id: Uuid) -> Result<()> {
        self.execute_existing(schema::DELETE_MEDIA, vec![uuid_value(id)], "MediaItem", id.to_string())
            .await
    }
}

fn task_fields(task: &Task) -> Result<Vec<Value>> {
    Ok(vec![
        Value::Text(task.title.clone()),
        Value::Text(task.description.clone()),
        Value::Text(enum_to_text(&task.status)?),
        Value::Text(enum_to_text(&task.priority)?),
        format_optional_date(task.due_date).into(),
        format_optional_date(task.completed_date).into(),
        Value::Text(to_json(&task.subtasks)?),
    ])
}

#[async_trait]
impl TaskRepository for SqliteRepository {
    async fn get_task(&self, id: Uuid) -> Result<Option<Task>> {
        self.fetch_one(
            schema::select_task_by_id(),
            vec![uuid_value(id)],
            row_to_task,
            "Task",
            id.to_string(),
        )
        .await
    }

    async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>> {
        self.fetch_all(
            schema::select_tasks_by_user(),
            vec![uuid_value(user_id)],
            row_to_task,
            "Task",
        )
        .await
    }

    async fn create_task(&self, task: &Task) -> Result<()> {
        let mut params = vec![uuid_value(task.id), uuid_value(task.user_id)];
        params.extend(task_fields(task)?);
        params.push(Value::Text(format_datetime(&task.created_at)));
        params.push(Value::Text(format_datetime(&task.updated_at)));
        self.execute(schema::INSERT_TASK, params, "Task", task.id.to_string())
            .await
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        let mut params = vec![uuid_value(task.id)];
        params.extend(task_fields(task)?);
        params.push(Value::Text(format_datetime(&task.updated_at)));
        self.execute_existing(schema::UPDATE_TASK, params, "Task", task.id.to_string())
            .await
    }

    async fn delete_task(&self, id: Uuid) -> Result<()> {
        self.execute_existing(schema::DELETE_TASK, vec![uuid_value(id)], "Task", id.to_string())
            .await
    }
}

// ============================================================================
// ItemRepository / UserItemRepository implementations
// ============================================================================

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn get_item(&self, id: Uuid) -> Result<Option<CollectibleItem>> {
        self.fetch_one(
            schema::select_item_by_id(),
            vec![uuid_value(id)],
            row_to_item,
            "CollectibleItem",
            id.to_string(),
        )
        .await
    }

    async fn list_items(&self, category: GachaCategory) -> Result<Vec<CollectibleItem>> {
        self.fetch_all(
            schema::select_items_by_category(),
            vec![Value::Text(enum_to_text(&category)?)],
            row_to_item,
            "CollectibleItem",
        )
        .await
    }

    async fn create_item(&self, item: &CollectibleItem) -> Result<()> {
        let params = vec![
            uuid_value(item.id),
            Value::Text(enum_to_text(&item.category)?),
            Value::Text(item.key.clone()),
            Value::Text(item.name.clone()),
            Value::Text(item.description.clone()),
            Value::Text(item.image_url.clone()),
            Value::Text(enum_to_text(&item.rarity)?),
            Value::Text(item.series.clone()),
            Value::Text(format_datetime(&item.created_at)),
            Value::Text(format_datetime(&item.updated_at)),
        ];
        self.execute(
            schema::INSERT_ITEM,
            params,
            "CollectibleItem",
            format!("{}/{}", item.category.as_str(), item.key),
        )
        .await
    }
}

#[async_trait]
impl UserItemRepository for SqliteRepository {
    async fn list_user_items(&self, user_id: Uuid) -> Result<Vec<UserItem>> {
        self.fetch_all(
            schema::select_user_items_by_user(),
            vec![uuid_value(user_id)],
            row_to_user_item,
            "UserItem",
        )
        .await
    }

    async fn create_user_items(&self, items: &[UserItem]) -> Result<()> {
        let rows = items
            .iter()
            .map(|owned| {
                Ok(vec![
                    uuid_value(owned.id),
                    uuid_value(owned.user_id),
                    uuid_value(owned.item_id),
                    Value::Text(enum_to_text(&owned.category)?),
                    Value::Text(format_datetime(&owned.obtained_at)),
                ])
            })
            .collect::<Result<Vec<_>>>()?;
        self.execute_all(schema::INSERT_USER_ITEM, rows, "UserItem", "pull".to_string())
            .await
    }
}
