//! Reading notes and quotes attached to a book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::serde::{deserialize_optional_string, deserialize_tags, normalize_tags};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookNoteError {
    #[error("Note content is required")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookNoteKind {
    #[default]
    Note,
    Quote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookNote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub kind: BookNoteKind,
    pub page_start: Option<u32>,
    pub page_end: Option<u32>,
    pub chapter: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookNote {
    pub fn new(user_id: Uuid, book_id: Uuid, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            book_id,
            kind: BookNoteKind::default(),
            page_start: None,
            page_end: None,
            chapter: String::new(),
            content: content.into(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the page range, swapping the ends when given backwards.
    pub fn set_pages(&mut self, start: Option<u32>, end: Option<u32>) {
        (self.page_start, self.page_end) = match (start, end) {
            (Some(s), Some(e)) if s > e => (Some(e), Some(s)),
            range => range,
        };
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookNoteRequest {
    #[serde(default)]
    pub kind: Option<BookNoteKind>,
    #[serde(default)]
    pub page_start: Option<u32>,
    #[serde(default)]
    pub page_end: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub chapter: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl CreateBookNoteRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn into_note(self, user_id: Uuid, book_id: Uuid) -> Result<BookNote, BookNoteError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(BookNoteError::EmptyContent);
        }
        let mut note = BookNote::new(user_id, book_id, content);
        note.kind = self.kind.unwrap_or_default();
        note.set_pages(self.page_start, self.page_end);
        note.chapter = self.chapter.unwrap_or_default();
        note.tags = self.tags;
        Ok(note)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookNoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<BookNoteKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_end: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateBookNoteRequest {
    pub fn apply_to(self, note: &mut BookNote) -> Result<(), BookNoteError> {
        let content = match self.content {
            Some(content) if content.trim().is_empty() => return Err(BookNoteError::EmptyContent),
            Some(content) => Some(content.trim().to_string()),
            None => None,
        };
        if let Some(content) = content {
            note.content = content;
        }
        if let Some(kind) = self.kind {
            note.kind = kind;
        }
        let start = self.page_start.or(note.page_start);
        let end = self.page_end.or(note.page_end);
        note.set_pages(start, end);
        if let Some(chapter) = self.chapter {
            note.chapter = chapter.trim().to_string();
        }
        if let Some(tags) = self.tags {
            note.tags = normalize_tags(tags);
        }
        note.updated_at = Utc::now();
        Ok(())
    }
}
