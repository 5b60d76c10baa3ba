//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Nested values (progression, blessings, forms, tags)
//! are stored as JSON text columns.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    username TEXT NOT NULL UNIQUE COLLATE NOCASE,
    password_hash TEXT NOT NULL,
    role TEXT NOT NULL,
    progression TEXT NOT NULL,
    displayed_pokemon TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS volumes (
    id TEXT PRIMARY KEY,
    volume_number INTEGER NOT NULL UNIQUE,
    title TEXT NOT NULL,
    body_lines TEXT NOT NULL,
    blessing_intro TEXT NOT NULL,
    blessings TEXT NOT NULL,
    dream TEXT NOT NULL,
    edition TEXT NOT NULL,
    raw_pasted_text TEXT NOT NULL,
    status TEXT NOT NULL,
    created_by TEXT NOT NULL,
    favorite_count INTEGER NOT NULL,
    ratings TEXT NOT NULL,
    average_rating REAL NOT NULL,
    rating_count INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS habits (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    streak INTEGER NOT NULL,
    longest_streak INTEGER NOT NULL,
    last_completed_date TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS books (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year INTEGER,
    total_pages INTEGER NOT NULL,
    pages_read INTEGER NOT NULL,
    is_finished INTEGER NOT NULL,
    is_owned INTEGER NOT NULL,
    cover_image_url TEXT NOT NULL,
    synopsis TEXT NOT NULL,
    user_rating INTEGER,
    notes TEXT NOT NULL,
    started_date TEXT,
    finished_date TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS categories (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL COLLATE NOCASE,
    color TEXT NOT NULL,
    parent_category TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS transactions (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    kind TEXT NOT NULL,
    amount REAL NOT NULL,
    description TEXT NOT NULL,
    category_id TEXT NOT NULL,
    date TEXT NOT NULL,
    account TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS pokemon_bases (
    id TEXT PRIMARY KEY,
    species_id INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL UNIQUE COLLATE NOCASE,
    generation INTEGER NOT NULL,
    base_types TEXT NOT NULL,
    is_legendary INTEGER NOT NULL,
    is_mythical INTEGER NOT NULL,
    is_starter INTEGER NOT NULL,
    description TEXT NOT NULL,
    forms TEXT NOT NULL,
    evolution_paths TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS user_pokemon (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    base_id TEXT NOT NULL,
    nickname TEXT,
    variant TEXT NOT NULL,
    level INTEGER NOT NULL,
    xp INTEGER NOT NULL,
    xp_to_next_level INTEGER NOT NULL,
    obtained_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (base_id) REFERENCES pokemon_bases(id),
    UNIQUE (user_id, base_id)
);

CREATE TABLE IF NOT EXISTS notes (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    tags TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS book_notes (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    book_id TEXT NOT NULL,
    kind TEXT NOT NULL,
    page_start INTEGER,
    page_end INTEGER,
    chapter TEXT NOT NULL,
    content TEXT NOT NULL,
    tags TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (book_id) REFERENCES books(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS workouts (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    date TEXT NOT NULL,
    workout_name TEXT NOT NULL,
    duration_session_minutes INTEGER,
    exercises TEXT NOT NULL,
    overall_feeling TEXT,
    notes_session TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS media (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    media_type TEXT NOT NULL,
    title TEXT NOT NULL,
    platform_or_network TEXT NOT NULL,
    creator_or_developer TEXT NOT NULL,
    status TEXT NOT NULL,
    user_rating INTEGER,
    notes TEXT NOT NULL,
    current_season INTEGER,
    current_episode INTEGER,
    progress_notes TEXT NOT NULL,
    cover_image_url TEXT NOT NULL,
    genre TEXT NOT NULL,
    release_year INTEGER,
    started_date TEXT,
    completed_date TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL,
    priority TEXT NOT NULL,
    due_date TEXT,
    completed_date TEXT,
    subtasks TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS collectible_items (
    id TEXT PRIMARY KEY,
    category TEXT NOT NULL,
    key TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT NOT NULL,
    rarity TEXT NOT NULL,
    series TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE (category, key)
);

CREATE TABLE IF NOT EXISTS user_items (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    item_id TEXT NOT NULL,
    category TEXT NOT NULL,
    obtained_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (item_id) REFERENCES collectible_items(id)
);

CREATE INDEX IF NOT EXISTS idx_habits_user_id ON habits(user_id);
CREATE INDEX IF NOT EXISTS idx_books_user_id ON books(user_id);
CREATE INDEX IF NOT EXISTS idx_categories_user_id ON categories(user_id);
CREATE UNIQUE INDEX IF NOT EXISTS idx_categories_name
    ON categories(user_id, name, IFNULL(parent_category, ''));
CREATE INDEX IF NOT EXISTS idx_transactions_user_date ON transactions(user_id, date);
CREATE INDEX IF NOT EXISTS idx_user_pokemon_user_id ON user_pokemon(user_id);
CREATE INDEX IF NOT EXISTS idx_notes_user_id ON notes(user_id);
CREATE INDEX IF NOT EXISTS idx_book_notes_book_id ON book_notes(book_id);
CREATE INDEX IF NOT EXISTS idx_workouts_user_date ON workouts(user_id, date);
CREATE INDEX IF NOT EXISTS idx_media_user_id ON media(user_id);
CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks(user_id);
CREATE INDEX IF NOT EXISTS idx_user_items_user_id ON user_items(user_id);
"#;

// User queries
const USER_COLUMNS: &str =
    "id, email, username, password_hash, role, progression, displayed_pokemon, created_at, updated_at";

pub fn select_user_by_id() -> String {
    format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1")
}

pub fn select_user_by_email() -> String {
    format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1")
}

pub const INSERT_USER: &str = r#"
INSERT INTO users (id, email, username, password_hash, role, progression, displayed_pokemon, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET email = ?2, username = ?3, password_hash = ?4, role = ?5, progression = ?6,
    displayed_pokemon = ?7, updated_at = ?8
WHERE id = ?1
"#;

// Volume queries
const VOLUME_COLUMNS: &str = "id, volume_number, title, body_lines, blessing_intro, blessings, dream, \
     edition, raw_pasted_text, status, created_by, favorite_count, ratings, average_rating, \
     rating_count, created_at, updated_at";

pub fn select_volume_by_id() -> String {
    format!("SELECT {VOLUME_COLUMNS} FROM volumes WHERE id = ?1")
}

pub fn select_volume_by_number() -> String {
    format!("SELECT {VOLUME_COLUMNS} FROM volumes WHERE volume_number = ?1")
}

pub fn select_volumes() -> String {
    format!("SELECT {VOLUME_COLUMNS} FROM volumes ORDER BY volume_number ASC")
}

pub fn select_volumes_by_status() -> String {
    format!("SELECT {VOLUME_COLUMNS} FROM volumes WHERE status = ?1 ORDER BY volume_number ASC")
}

pub const INSERT_VOLUME: &str = r#"
INSERT INTO volumes (id, volume_number, title, body_lines, blessing_intro, blessings, dream,
    edition, raw_pasted_text, status, created_by, favorite_count, ratings, average_rating,
    rating_count, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
"#;

pub const UPDATE_VOLUME: &str = r#"
UPDATE volumes
SET volume_number = ?2, title = ?3, body_lines = ?4, blessing_intro = ?5, blessings = ?6,
    dream = ?7, edition = ?8, raw_pasted_text = ?9, status = ?10, favorite_count = ?11,
    ratings = ?12, average_rating = ?13, rating_count = ?14, updated_at = ?15
WHERE id = ?1
"#;

pub const DELETE_VOLUME: &str = "DELETE FROM volumes WHERE id = ?1";

// Habit queries
const HABIT_COLUMNS: &str =
    "id, user_id, name, description, streak, longest_streak, last_completed_date, created_at, updated_at";

pub fn select_habit_by_id() -> String {
    format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1")
}

pub fn select_habits_by_user() -> String {
    format!("SELECT {HABIT_COLUMNS} FROM habits WHERE user_id = ?1 ORDER BY created_at DESC")
}

pub const INSERT_HABIT: &str = r#"
INSERT INTO habits (id, user_id, name, description, streak, longest_streak, last_completed_date, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub const UPDATE_HABIT: &str = r#"
UPDATE habits
SET name = ?2, description = ?3, streak = ?4, longest_streak = ?5, last_completed_date = ?6,
    updated_at = ?7
WHERE id = ?1
"#;

pub const DELETE_HABIT: &str = "DELETE FROM habits WHERE id = ?1";

// Book queries
const BOOK_COLUMNS: &str = "id, user_id, title, author, year, total_pages, pages_read, is_finished, \
     is_owned, cover_image_url, synopsis, user_rating, notes, started_date, finished_date, \
     created_at, updated_at";

pub fn select_book_by_id() -> String {
    format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1")
}

pub fn select_books_by_user() -> String {
    format!("SELECT {BOOK_COLUMNS} FROM books WHERE user_id = ?1 ORDER BY created_at DESC")
}

pub const INSERT_BOOK: &str = r#"
INSERT INTO books (id, user_id, title, author, year, total_pages, pages_read, is_finished,
    is_owned, cover_image_url, synopsis, user_rating, notes, started_date, finished_date,
    created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
"#;

pub const UPDATE_BOOK: &str = r#"
UPDATE books
SET title = ?2, author = ?3, year = ?4, total_pages = ?5, pages_read = ?6, is_finished = ?7,
    is_owned = ?8, cover_image_url = ?9, synopsis = ?10, user_rating = ?11, notes = ?12,
    started_date = ?13, finished_date = ?14, updated_at = ?15
WHERE id = ?1
"#;

pub const DELETE_BOOK: &str = "DELETE FROM books WHERE id = ?1";

// Category queries
const CATEGORY_COLUMNS: &str = "id, user_id, name, color, parent_category, created_at, updated_at";

pub fn select_category_by_id() -> String {
    format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1")
}

pub fn select_categories_by_user() -> String {
    format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE user_id = ?1 ORDER BY name ASC")
}

pub const INSERT_CATEGORY: &str = r#"
INSERT INTO categories (id, user_id, name, color, parent_category, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const UPDATE_CATEGORY: &str = r#"
UPDATE categories
SET name = ?2, color = ?3, parent_category = ?4, updated_at = ?5
WHERE id = ?1
"#;

pub const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";

// Transaction queries
const TRANSACTION_COLUMNS: &str =
    "id, user_id, kind, amount, description, category_id, date, account, created_at, updated_at";

pub fn select_transaction_by_id() -> String {
    format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = ?1")
}

pub fn select_transactions_by_user() -> String {
    format!(
        "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE user_id = ?1 \
         ORDER BY date DESC, created_at DESC"
    )
}

pub const INSERT_TRANSACTION: &str = r#"
INSERT INTO transactions (id, user_id, kind, amount, description, category_id, date, account, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
"#;

pub const UPDATE_TRANSACTION: &str = r#"
UPDATE transactions
SET kind = ?2, amount = ?3, description = ?4, category_id = ?5, date = ?6, account = ?7,
    updated_at = ?8
WHERE id = ?1
"#;

pub const DELETE_TRANSACTION: &str = "DELETE FROM transactions WHERE id = ?1";

// Pokémon base queries
const BASE_COLUMNS: &str = "id, species_id, name, generation, base_types, is_legendary, is_mythical, \
     is_starter, description, forms, evolution_paths, created_at, updated_at";

pub fn select_base_by_id() -> String {
    format!("SELECT {BASE_COLUMNS} FROM pokemon_bases WHERE id = ?1")
}

pub fn select_base_by_species() -> String {
    format!("SELECT {BASE_COLUMNS} FROM pokemon_bases WHERE species_id = ?1")
}

pub fn select_bases() -> String {
    format!("SELECT {BASE_COLUMNS} FROM pokemon_bases ORDER BY species_id ASC")
}

pub const INSERT_BASE: &str = r#"
INSERT INTO pokemon_bases (id, species_id, name, generation, base_types, is_legendary,
    is_mythical, is_starter, description, forms, evolution_paths, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
"#;

pub const UPDATE_BASE: &str = r#"
UPDATE pokemon_bases
SET species_id = ?2, name = ?3, generation = ?4, base_types = ?5, is_legendary = ?6,
    is_mythical = ?7, is_starter = ?8, description = ?9, forms = ?10, evolution_paths = ?11,
    updated_at = ?12
WHERE id = ?1
"#;

// User Pokémon queries
const USER_POKEMON_COLUMNS: &str =
    "id, user_id, base_id, nickname, variant, level, xp, xp_to_next_level, obtained_at";

pub fn select_user_pokemon_by_id() -> String {
    format!("SELECT {USER_POKEMON_COLUMNS} FROM user_pokemon WHERE id = ?1")
}

pub fn select_user_pokemon_by_user() -> String {
    format!(
        "SELECT {USER_POKEMON_COLUMNS} FROM user_pokemon WHERE user_id = ?1 ORDER BY obtained_at ASC"
    )
}

pub const INSERT_USER_POKEMON: &str = r#"
INSERT INTO user_pokemon (id, user_id, base_id, nickname, variant, level, xp, xp_to_next_level, obtained_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub const UPDATE_USER_POKEMON: &str = r#"
UPDATE user_pokemon
SET base_id = ?2, nickname = ?3, variant = ?4, level = ?5, xp = ?6, xp_to_next_level = ?7
WHERE id = ?1
"#;

// Note queries
const NOTE_COLUMNS: &str = "id, user_id, title, content, tags, created_at, updated_at";

pub fn select_note_by_id() -> String {
    format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1")
}

pub fn select_notes_by_user() -> String {
    format!("SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = ?1 ORDER BY created_at DESC")
}

pub const INSERT_NOTE: &str = r#"
INSERT INTO notes (id, user_id, title, content, tags, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const UPDATE_NOTE: &str = r#"
UPDATE notes
SET title = ?2, content = ?3, tags = ?4, updated_at = ?5
WHERE id = ?1
"#;

pub const DELETE_NOTE: &str = "DELETE FROM notes WHERE id = ?1";

// Book note queries
const BOOK_NOTE_COLUMNS: &str =
    "id, user_id, book_id, kind, page_start, page_end, chapter, content, tags, created_at, updated_at";

pub fn select_book_note_by_id() -> String {
    format!("SELECT {BOOK_NOTE_COLUMNS} FROM book_notes WHERE id = ?1")
}

pub fn select_book_notes_by_book() -> String {
    format!("SELECT {BOOK_NOTE_COLUMNS} FROM book_notes WHERE book_id = ?1 ORDER BY created_at DESC")
}

pub const INSERT_BOOK_NOTE: &str = r#"
INSERT INTO book_notes (id, user_id, book_id, kind, page_start, page_end, chapter, content, tags,
    created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const UPDATE_BOOK_NOTE: &str = r#"
UPDATE book_notes
SET kind = ?2, page_start = ?3, page_end = ?4, chapter = ?5, content = ?6, tags = ?7,
    updated_at = ?8
WHERE id = ?1
"#;

pub const DELETE_BOOK_NOTE: &str = "DELETE FROM book_notes WHERE id = ?1";

// Workout queries
const WORKOUT_COLUMNS: &str = "id, user_id, date, workout_name, duration_session_minutes, \
     exercises, overall_feeling, notes_session, created_at, updated_at";

pub fn select_workout_by_id() -> String {
    format!("SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ?1")
}

pub fn select_workouts_by_user() -> String {
    format!(
        "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE user_id = ?1 \
         ORDER BY date DESC, created_at DESC"
    )
}

pub const INSERT_WORKOUT: &str = r#"
INSERT INTO workouts (id, user_id, date, workout_name, duration_session_minutes, exercises,
    overall_feeling, notes_session, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
"#;

pub const UPDATE_WORKOUT: &str = r#"
UPDATE workouts
SET date = ?2, workout_name = ?3, duration_session_minutes = ?4, exercises = ?5,
    overall_feeling = ?6, notes_session = ?7, updated_at = ?8
WHERE id = ?1
"#;

pub const DELETE_WORKOUT: &str = "DELETE FROM workouts WHERE id = ?1";

// Media queries
const MEDIA_COLUMNS: &str = "id, user_id, media_type, title, platform_or_network, \
     creator_or_developer, status, user_rating, notes, current_season, current_episode, \
     progress_notes, cover_image_url, genre, release_year, started_date, completed_date, \
     created_at, updated_at";

pub fn select_media_by_id() -> String {
    format!("SELECT {MEDIA_COLUMNS} FROM media WHERE id = ?1")
}

pub fn select_media_by_user() -> String {
    format!("SELECT {MEDIA_COLUMNS} FROM media WHERE user_id = ?1 ORDER BY created_at DESC")
}

pub const INSERT_MEDIA: &str = r#"
INSERT INTO media (id, user_id, media_type, title, platform_or_network, creator_or_developer,
    status, user_rating, notes, current_season, current_episode, progress_notes,
    cover_image_url, genre, release_year, started_date, completed_date, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)
"#;

pub const UPDATE_MEDIA: &str = r#"
UPDATE media
SET media_type = ?2, title = ?3, platform_or_network = ?4, creator_or_developer = ?5,
    status = ?6, user_rating = ?7, notes = ?8, current_season = ?9, current_episode = ?10,
    progress_notes = ?11, cover_image_url = ?12, genre = ?13, release_year = ?14,
    started_date = ?15, completed_date = ?16, updated_at = ?17
WHERE id = ?1
"#;

pub const DELETE_MEDIA: &str = "DELETE FROM media WHERE id = ?1";

// Task queries
const TASK_COLUMNS: &str = "id, user_id, title, description, status, priority, due_date, \
     completed_date, subtasks, created_at, updated_at";

pub fn select_task_by_id() -> String {
    format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1")
}

pub fn select_tasks_by_user() -> String {
    format!("SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = ?1")
}

pub const INSERT_TASK: &str = r#"
INSERT INTO tasks (id, user_id, title, description, status, priority, due_date, completed_date,
    subtasks, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const UPDATE_TASK: &str = r#"
UPDATE tasks
SET title = ?2, description = ?3, status = ?4, priority = ?5, due_date = ?6,
    completed_date = ?7, subtasks = ?8, updated_at = ?9
WHERE id = ?1
"#;

pub const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

// Collectible item queries
const ITEM_COLUMNS: &str =
    "id, category, key, name, description, image_url, rarity, series, created_at, updated_at";

pub fn select_item_by_id() -> String {
    format!("SELECT {ITEM_COLUMNS} FROM collectible_items WHERE id = ?1")
}

pub fn select_items_by_category() -> String {
    format!("SELECT {ITEM_COLUMNS} FROM collectible_items WHERE category = ?1 ORDER BY key ASC")
}

pub const INSERT_ITEM: &str = r#"
INSERT INTO collectible_items (id, category, key, name, description, image_url, rarity, series,
    created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
"#;

// User item queries
const USER_ITEM_COLUMNS: &str = "id, user_id, item_id, category, obtained_at";

pub fn select_user_items_by_user() -> String {
    format!("SELECT {USER_ITEM_COLUMNS} FROM user_items WHERE user_id = ?1 ORDER BY obtained_at ASC")
}

pub const INSERT_USER_ITEM: &str = r#"
INSERT INTO user_items (id, user_id, item_id, category, obtained_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;
