use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::serde::{deserialize_optional_string, deserialize_tags, normalize_tags};

pub const DEFAULT_NOTE_TITLE: &str = "Untitled Note";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("Note content cannot be empty")]
    EmptyContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(user_id: Uuid, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: content.into(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.iter().any(|t| *t == tag)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl CreateNoteRequest {
    pub fn into_note(self, user_id: Uuid) -> Result<Note, NoteError> {
        if self.content.trim().is_empty() {
            return Err(NoteError::EmptyContent);
        }
        let mut note = Note::new(user_id, self.content);
        if let Some(title) = self.title {
            note.title = title;
        }
        note.tags = normalize_tags(self.tags);
        Ok(note)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateNoteRequest {
    pub fn apply_to(self, note: &mut Note) -> Result<(), NoteError> {
        if let Some(content) = &self.content {
            if content.trim().is_empty() {
                return Err(NoteError::EmptyContent);
            }
        }
        if let Some(title) = self.title {
            let title = title.trim();
            note.title = if title.is_empty() {
                DEFAULT_NOTE_TITLE.to_string()
            } else {
                title.to_string()
            };
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(tags) = self.tags {
            note.tags = normalize_tags(tags);
        }
        note.updated_at = Utc::now();
        Ok(())
    }
}

/// Query parameters for `GET /api/notes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tag: Option<String>,
}
