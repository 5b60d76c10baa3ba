//! Reading log.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::serde::{deserialize_optional_date, deserialize_optional_string};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Please provide the book title")]
    EmptyTitle,
    #[error("Please provide the book author(s)")]
    EmptyAuthor,
    #[error("Please provide the total number of pages")]
    InvalidTotalPages,
    #[error("Pages read cannot exceed total pages.")]
    PagesExceedTotal,
    #[error("Rating must be between 1 and 10, got {0}")]
    InvalidRating(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    /// Publication year.
    pub year: Option<i32>,
    pub total_pages: u32,
    pub pages_read: u32,
    pub is_finished: bool,
    pub is_owned: bool,
    pub cover_image_url: String,
    pub synopsis: String,
    pub user_rating: Option<u8>,
    pub notes: String,
    pub started_date: Option<NaiveDate>,
    pub finished_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        author: impl Into<String>,
        total_pages: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            author: author.into(),
            year: None,
            total_pages,
            pages_read: 0,
            is_finished: false,
            is_owned: true,
            cover_image_url: String::new(),
            synopsis: String::new(),
            user_rating: None,
            notes: String::new(),
            started_date: None,
            finished_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), BookError> {
        if self.title.trim().is_empty() {
            return Err(BookError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookError::EmptyAuthor);
        }
        if self.total_pages == 0 {
            return Err(BookError::InvalidTotalPages);
        }
        if self.pages_read > self.total_pages {
            return Err(BookError::PagesExceedTotal);
        }
        if let Some(rating) = self.user_rating {
            if !(1..=10).contains(&rating) {
                return Err(BookError::InvalidRating(rating));
            }
        }
        Ok(())
    }

    /// Marks the book finished once every page is read.
    ///
    /// Finishing is one-way: lowering `pages_read` afterwards leaves the book
    /// finished.
    pub fn sync_finished(&mut self, today: NaiveDate) {
        if !self.is_finished && self.total_pages > 0 && self.pages_read >= self.total_pages {
            self.is_finished = true;
            self.finished_date = Some(today);
        }
    }
}

/// Request payload for creating a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub pages_read: u32,
    #[serde(default)]
    pub is_owned: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub cover_image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub user_rating: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub started_date: Option<NaiveDate>,
}

impl CreateBookRequest {
    pub fn new(title: impl Into<String>, author: impl Into<String>, total_pages: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            total_pages,
            ..Self::default()
        }
    }

    /// Builds and validates the book. A book created fully read is finished
    /// immediately.
    pub fn into_book(self, user_id: Uuid, today: NaiveDate) -> Result<Book, BookError> {
        let mut book = Book::new(user_id, self.title.trim(), self.author.trim(), self.total_pages);
        book.year = self.year;
        book.pages_read = self.pages_read;
        book.is_owned = self.is_owned.unwrap_or(true);
        book.cover_image_url = self.cover_image_url.unwrap_or_default();
        book.synopsis = self.synopsis.unwrap_or_default();
        book.user_rating = self.user_rating;
        book.notes = self.notes.unwrap_or_default();
        book.started_date = self.started_date;
        book.validate()?;
        book.sync_finished(today);
        Ok(book)
    }
}

/// Request payload for updating a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_read: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_finished: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_owned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_date: Option<NaiveDate>,
}

impl UpdateBookRequest {
    pub fn with_pages_read(mut self, pages_read: u32) -> Self {
        self.pages_read = Some(pages_read);
        self
    }

    /// Applies the update and returns `true` when this update finished the book.
    ///
    /// On validation failure `book` is left untouched.
    pub fn apply_to(self, book: &mut Book, today: NaiveDate) -> Result<bool, BookError> {
        let was_finished = book.is_finished;
        let mut updated = book.clone();

        if let Some(title) = self.title {
            updated.title = title.trim().to_string();
        }
        if let Some(author) = self.author {
            updated.author = author.trim().to_string();
        }
        if self.year.is_some() {
            updated.year = self.year;
        }
        if let Some(total_pages) = self.total_pages {
            updated.total_pages = total_pages;
        }
        if let Some(pages_read) = self.pages_read {
            updated.pages_read = pages_read;
        }
        if let Some(is_owned) = self.is_owned {
            updated.is_owned = is_owned;
        }
        if let Some(url) = self.cover_image_url {
            updated.cover_image_url = url.trim().to_string();
        }
        if let Some(synopsis) = self.synopsis {
            updated.synopsis = synopsis.trim().to_string();
        }
        if self.user_rating.is_some() {
            updated.user_rating = self.user_rating;
        }
        if let Some(notes) = self.notes {
            updated.notes = notes.trim().to_string();
        }
        if self.started_date.is_some() {
            updated.started_date = self.started_date;
        }
        match self.is_finished {
            Some(true) if !updated.is_finished => {
                updated.is_finished = true;
                updated.finished_date = Some(today);
            }
            Some(false) => {
                updated.is_finished = false;
                updated.finished_date = None;
            }
            _ => {}
        }

        updated.validate()?;
        updated.sync_finished(today);
        updated.updated_at = Utc::now();

        let just_finished = updated.is_finished && !was_finished;
        *book = updated;
        Ok(just_finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn book() -> Book {
        CreateBookRequest::new("Dune", "Frank Herbert", 400)
            .into_book(Uuid::new_v4(), today())
            .unwrap()
    }

    #[test]
    fn test_create_validation() {
        let user = Uuid::new_v4();
        assert_eq!(
            CreateBookRequest::new(" ", "A", 10).into_book(user, today()),
            Err(BookError::EmptyTitle)
        );
        assert_eq!(
            CreateBookRequest::new("T", "", 10).into_book(user, today()),
            Err(BookError::EmptyAuthor)
        );
        assert_eq!(
            CreateBookRequest::new("T", "A", 0).into_book(user, today()),
            Err(BookError::InvalidTotalPages)
        );

        let mut req = CreateBookRequest::new("T", "A", 10);
        req.pages_read = 11;
        assert_eq!(req.into_book(user, today()), Err(BookError::PagesExceedTotal));

        let mut req = CreateBookRequest::new("T", "A", 10);
        req.user_rating = Some(11);
        assert_eq!(req.into_book(user, today()), Err(BookError::InvalidRating(11)));
    }

    #[test]
    fn test_create_defaults() {
        let book = book();
        assert!(book.is_owned);
        assert!(!book.is_finished);
        assert_eq!(book.pages_read, 0);
    }

    #[test]
    fn test_reading_all_pages_finishes_book() {
        let mut book = book();
        let finished = UpdateBookRequest::default()
            .with_pages_read(400)
            .apply_to(&mut book, today())
            .unwrap();

        assert!(finished);
        assert!(book.is_finished);
        assert_eq!(book.finished_date, Some(today()));
    }

    #[test]
    fn test_finishing_reports_only_once() {
        let mut book = book();
        UpdateBookRequest::default()
            .with_pages_read(400)
            .apply_to(&mut book, today())
            .unwrap();
        let again = UpdateBookRequest::default()
            .with_pages_read(400)
            .apply_to(&mut book, today())
            .unwrap();

        assert!(!again);
        assert!(book.is_finished);
    }

    #[test]
    fn test_partial_progress_does_not_finish() {
        let mut book = book();
        let finished = UpdateBookRequest::default()
            .with_pages_read(120)
            .apply_to(&mut book, today())
            .unwrap();

        assert!(!finished);
        assert_eq!(book.pages_read, 120);
        assert_eq!(book.finished_date, None);
    }

    #[test]
    fn test_invalid_update_leaves_book_untouched() {
        let mut book = book();
        let result = UpdateBookRequest::default()
            .with_pages_read(401)
            .apply_to(&mut book, today());

        assert_eq!(result, Err(BookError::PagesExceedTotal));
        assert_eq!(book.pages_read, 0);
    }

    #[test]
    fn test_manual_finish_flag() {
        let mut book = book();
        let req = UpdateBookRequest {
            is_finished: Some(true),
            ..UpdateBookRequest::default()
        };
        assert!(req.apply_to(&mut book, today()).unwrap());
        assert_eq!(book.finished_date, Some(today()));
    }

    #[test]
    fn test_book_created_fully_read_is_finished() {
        let mut req = CreateBookRequest::new("Short", "Anon", 10);
        req.pages_read = 10;
        let book = req.into_book(Uuid::new_v4(), today()).unwrap();
        assert!(book.is_finished);
    }
}
