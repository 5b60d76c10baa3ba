//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use lifequest_core::account::User;
use lifequest_core::book::Book;
use lifequest_core::book_note::BookNote;
use lifequest_core::collectible::{CollectibleItem, PokemonBase, UserItem, UserPokemon};
use lifequest_core::finance::{FinancialCategory, FinancialTransaction};
use lifequest_core::habit::Habit;
use lifequest_core::media::MediaItem;
use lifequest_core::note::Note;
use lifequest_core::storage::RepositoryError;
use lifequest_core::task::Task;
use lifequest_core::volume::Volume;
use lifequest_core::workout::WorkoutLog;

// ============================================================================
// Row conversions
// ============================================================================

/// Expected columns: id, email, username, password_hash, role, progression,
/// displayed_pokemon, created_at, updated_at
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        email: row.get(1)?,
        username: row.get(2)?,
        password_hash: row.get(3)?,
        role: parse_enum(&row.get::<_, String>(4)?)?,
        progression: parse_json(&row.get::<_, String>(5)?)?,
        displayed_pokemon: parse_json(&row.get::<_, String>(6)?)?,
        created_at: parse_datetime(&row.get::<_, String>(7)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(8)?)?,
    })
}

/// Expected columns: see `VOLUME_COLUMNS` in the schema module.
pub fn row_to_volume(row: &Row) -> rusqlite::Result<Volume> {
    Ok(Volume {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        volume_number: row.get(1)?,
        title: row.get(2)?,
        body_lines: parse_json(&row.get::<_, String>(3)?)?,
        blessing_intro: row.get(4)?,
        blessings: parse_json(&row.get::<_, String>(5)?)?,
        dream: row.get(6)?,
        edition: row.get(7)?,
        raw_pasted_text: row.get(8)?,
        status: parse_enum(&row.get::<_, String>(9)?)?,
        created_by: parse_uuid(&row.get::<_, String>(10)?)?,
        favorite_count: row.get::<_, i64>(11)? as u64,
        ratings: parse_json(&row.get::<_, String>(12)?)?,
        average_rating: row.get(13)?,
        rating_count: row.get::<_, i64>(14)? as u64,
        created_at: parse_datetime(&row.get::<_, String>(15)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(16)?)?,
    })
}

/// Expected columns: id, user_id, name, description, streak, longest_streak,
/// last_completed_date, created_at, updated_at
pub fn row_to_habit(row: &Row) -> rusqlite::Result<Habit> {
    Ok(Habit {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        name: row.get(2)?,
        description: row.get(3)?,
        streak: row.get(4)?,
        longest_streak: row.get(5)?,
        last_completed_date: parse_optional_date(row.get(6)?)?,
        created_at: parse_datetime(&row.get::<_, String>(7)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(8)?)?,
    })
}

/// Expected columns: see `BOOK_COLUMNS` in the schema module.
pub fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        title: row.get(2)?,
        author: row.get(3)?,
        year: row.get(4)?,
        total_pages: row.get(5)?,
        pages_read: row.get(6)?,
        is_finished: row.get(7)?,
        is_owned: row.get(8)?,
        cover_image_url: row.get(9)?,
        synopsis: row.get(10)?,
        user_rating: row.get(11)?,
        notes: row.get(12)?,
        started_date: parse_optional_date(row.get(13)?)?,
        finished_date: parse_optional_date(row.get(14)?)?,
        created_at: parse_datetime(&row.get::<_, String>(15)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(16)?)?,
    })
}

/// Expected columns: id, user_id, name, color, parent_category, created_at, updated_at
pub fn row_to_category(row: &Row) -> rusqlite::Result<FinancialCategory> {
    let parent: Option<String> = row.get(4)?;
    Ok(FinancialCategory {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        name: row.get(2)?,
        color: row.get(3)?,
        parent_category: parent.as_deref().map(parse_uuid).transpose()?,
        created_at: parse_datetime(&row.get::<_, String>(5)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(6)?)?,
    })
}

/// Expected columns: id, user_id, kind, amount, description, category_id,
/// date, account, created_at, updated_at
pub fn row_to_transaction(row: &Row) -> rusqlite::Result<FinancialTransaction> {
    Ok(FinancialTransaction {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        kind: parse_enum(&row.get::<_, String>(2)?)?,
        amount: row.get(3)?,
        description: row.get(4)?,
        category_id: parse_uuid(&row.get::<_, String>(5)?)?,
        date: parse_date(&row.get::<_, String>(6)?)?,
        account: row.get(7)?,
        created_at: parse_datetime(&row.get::<_, String>(8)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(9)?)?,
    })
}

/// Expected columns: see `BASE_COLUMNS` in the schema module.
pub fn row_to_base(row: &Row) -> rusqlite::Result<PokemonBase> {
    Ok(PokemonBase {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        species_id: row.get(1)?,
        name: row.get(2)?,
        generation: row.get(3)?,
        base_types: parse_json(&row.get::<_, String>(4)?)?,
        is_legendary: row.get(5)?,
        is_mythical: row.get(6)?,
        is_starter: row.get(7)?,
        description: row.get(8)?,
        forms: parse_json(&row.get::<_, String>(9)?)?,
        evolution_paths: parse_json(&row.get::<_, String>(10)?)?,
        created_at: parse_datetime(&row.get::<_, String>(11)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(12)?)?,
    })
}

/// Expected columns: id, user_id, base_id, nickname, variant, level, xp,
/// xp_to_next_level, obtained_at
pub fn row_to_user_pokemon(row: &Row) -> rusqlite::Result<UserPokemon> {
    Ok(UserPokemon {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        base_id: parse_uuid(&row.get::<_, String>(2)?)?,
        nickname: row.get(3)?,
        variant: parse_enum(&row.get::<_, String>(4)?)?,
        level: row.get(5)?,
        xp: row.get::<_, i64>(6)? as u64,
        xp_to_next_level: row.get::<_, i64>(7)? as u64,
        obtained_at: parse_datetime(&row.get::<_, String>(8)?)?,
    })
}

/// Expected columns: id, user_id, title, content, tags, created_at, updated_at
pub fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        title: row.get(2)?,
        content: row.get(3)?,
        tags: parse_json(&row.get::<_, String>(4)?)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(6)?)?,
    })
}

/// Expected columns: see `BOOK_NOTE_COLUMNS` in the schema module.
pub fn row_to_book_note(row: &Row) -> rusqlite::Result<BookNote> {
    Ok(BookNote {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        book_id: parse_uuid(&row.get::<_, String>(2)?)?,
        kind: parse_enum(&row.get::<_, String>(3)?)?,
        page_start: row.get(4)?,
        page_end: row.get(5)?,
        chapter: row.get(6)?,
        content: row.get(7)?,
        tags: parse_json(&row.get::<_, String>(8)?)?,
        created_at: parse_datetime(&row.get::<_, String>(9)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(10)?)?,
    })
}

/// Exercises are a JSON column; the feeling is nullable text.
pub fn row_to_workout(row: &Row) -> rusqlite::Result<WorkoutLog> {
    let feeling: Option<String> = row.get(6)?;
    Ok(WorkoutLog {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        date: parse_date(&row.get::<_, String>(2)?)?,
        workout_name: row.get(3)?,
        duration_session_minutes: row.get(4)?,
        exercises: parse_json(&row.get::<_, String>(5)?)?,
        overall_feeling: feeling.as_deref().map(parse_enum).transpose()?,
        notes_session: row.get(7)?,
        created_at: parse_datetime(&row.get::<_, String>(8)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(9)?)?,
    })
}

/// Expected columns: see `MEDIA_COLUMNS` in the schema module.
pub fn row_to_media(row: &Row) -> rusqlite::Result<MediaItem> {
    Ok(MediaItem {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        media_type: parse_enum(&row.get::<_, String>(2)?)?,
        title: row.get(3)?,
        platform_or_network: row.get(4)?,
        creator_or_developer: row.get(5)?,
        status: parse_enum(&row.get::<_, String>(6)?)?,
        user_rating: row.get(7)?,
        notes: row.get(8)?,
        current_season: row.get(9)?,
        current_episode: row.get(10)?,
        progress_notes: row.get(11)?,
        cover_image_url: row.get(12)?,
        genre: parse_json(&row.get::<_, String>(13)?)?,
        release_year: row.get(14)?,
        started_date: parse_optional_date(row.get(15)?)?,
        completed_date: parse_optional_date(row.get(16)?)?,
        created_at: parse_datetime(&row.get::<_, String>(17)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(18)?)?,
    })
}

pub fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        title: row.get(2)?,
        description: row.get(3)?,
        status: parse_enum(&row.get::<_, String>(4)?)?,
        priority: parse_enum(&row.get::<_, String>(5)?)?,
        due_date: parse_optional_date(row.get(6)?)?,
        completed_date: parse_optional_date(row.get(7)?)?,
        subtasks: parse_json(&row.get::<_, String>(8)?)?,
        created_at: parse_datetime(&row.get::<_, String>(9)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(10)?)?,
    })
}

/// Expected columns: id, category, key, name, description, image_url,
/// rarity, series, created_at, updated_at
pub fn row_to_item(row: &Row) -> rusqlite::Result<CollectibleItem> {
    Ok(CollectibleItem {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        category: parse_enum(&row.get::<_, String>(1)?)?,
        key: row.get(2)?,
        name: row.get(3)?,
        description: row.get(4)?,
        image_url: row.get(5)?,
        rarity: parse_enum(&row.get::<_, String>(6)?)?,
        series: row.get(7)?,
        created_at: parse_datetime(&row.get::<_, String>(8)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(9)?)?,
    })
}

/// Expected columns: id, user_id, item_id, category, obtained_at
pub fn row_to_user_item(row: &Row) -> rusqlite::Result<UserItem> {
    Ok(UserItem {
        id: parse_uuid(&row.get::<_, String>(0)?)?,
        user_id: parse_uuid(&row.get::<_, String>(1)?)?,
        item_id: parse_uuid(&row.get::<_, String>(2)?)?,
        category: parse_enum(&row.get::<_, String>(3)?)?,
        obtained_at: parse_datetime(&row.get::<_, String>(4)?)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn conversion_error(e: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(conversion_error)
}

/// Parse a date from ISO 8601 string (YYYY-MM-DD).
fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(conversion_error)
}

fn parse_optional_date(s: Option<String>) -> rusqlite::Result<Option<NaiveDate>> {
    s.as_deref().map(parse_date).transpose()
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(conversion_error)
}

fn parse_json<T: DeserializeOwned>(s: &str) -> rusqlite::Result<T> {
    serde_json::from_str(s).map_err(conversion_error)
}

/// Parse a unit enum from the text stored by [`enum_to_text`].
fn parse_enum<T: DeserializeOwned>(s: &str) -> rusqlite::Result<T> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(conversion_error)
}

/// Serialize a value to a JSON text column.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RepositoryError> {
    serde_json::to_string(value).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Serialize a unit enum to its bare serde name (`"published"`, `"Shiny"`).
pub fn enum_to_text<T: Serialize>(value: &T) -> Result<String, RepositoryError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => Ok(s),
        Ok(other) => Err(RepositoryError::Serialization(format!(
            "expected a string, got {other}"
        ))),
        Err(e) => Err(RepositoryError::Serialization(e.to_string())),
    }
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> Option<String> {
    date.as_ref().map(format_date)
}
