//! Shows, movies and games on the watch/play list.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::serde::{deserialize_optional_date, deserialize_optional_string};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("Please provide the title")]
    EmptyTitle,
    #[error("Please provide the media type (show, movie or game)")]
    MissingMediaType,
    #[error("Rating must be between 1 and 10, got {0}")]
    InvalidRating(u8),
    #[error("{0} must be at least 1")]
    InvalidProgress(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Show,
    Movie,
    Game,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaStatus {
    #[default]
    Backlog,
    Watching,
    Playing,
    OnHold,
    Dropped,
    Completed,
    Watched,
}

impl MediaStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, MediaStatus::Completed | MediaStatus::Watched)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub media_type: MediaType,
    pub title: String,
    pub platform_or_network: String,
    pub creator_or_developer: String,
    pub status: MediaStatus,
    pub user_rating: Option<u8>,
    pub notes: String,
    pub current_season: Option<u32>,
    pub current_episode: Option<u32>,
    pub progress_notes: String,
    pub cover_image_url: String,
    pub genre: Vec<String>,
    pub release_year: Option<i32>,
    pub started_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MediaItem {
    pub fn new(user_id: Uuid, media_type: MediaType, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            media_type,
            title: title.into(),
            platform_or_network: String::new(),
            creator_or_developer: String::new(),
            status: MediaStatus::default(),
            user_rating: None,
            notes: String::new(),
            current_season: None,
            current_episode: None,
            progress_notes: String::new(),
            cover_image_url: String::new(),
            genre: Vec::new(),
            release_year: None,
            started_date: None,
            completed_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), MediaError> {
        if self.title.trim().is_empty() {
            return Err(MediaError::EmptyTitle);
        }
        if let Some(rating) = self.user_rating {
            if !(1..=10).contains(&rating) {
                return Err(MediaError::InvalidRating(rating));
            }
        }
        if self.current_season == Some(0) {
            return Err(MediaError::InvalidProgress("Season"));
        }
        if self.current_episode == Some(0) {
            return Err(MediaError::InvalidProgress("Episode"));
        }
        Ok(())
    }

    /// Moves to `status`. Entering a done status stamps `completed_date`
    /// unless one is already set; leaving it clears the date.
    pub fn set_status(&mut self, status: MediaStatus, today: NaiveDate) {
        if status.is_done() {
            self.completed_date.get_or_insert(today);
        } else {
            self.completed_date = None;
        }
        self.status = status;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaRequest {
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub platform_or_network: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub creator_or_developer: Option<String>,
    #[serde(default)]
    pub status: Option<MediaStatus>,
    #[serde(default)]
    pub user_rating: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes: Option<String>,
    #[serde(default)]
    pub current_season: Option<u32>,
    #[serde(default)]
    pub current_episode: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub progress_notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub started_date: Option<NaiveDate>,
}

impl CreateMediaRequest {
    pub fn new(media_type: MediaType, title: impl Into<String>) -> Self {
        Self {
            media_type: Some(media_type),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn into_media(self, user_id: Uuid, today: NaiveDate) -> Result<MediaItem, MediaError> {
        let media_type = self.media_type.ok_or(MediaError::MissingMediaType)?;
        let mut item = MediaItem::new(user_id, media_type, self.title.trim());
        item.platform_or_network = self.platform_or_network.unwrap_or_default();
        item.creator_or_developer = self.creator_or_developer.unwrap_or_default();
        item.user_rating = self.user_rating;
        item.notes = self.notes.unwrap_or_default();
        item.current_season = self.current_season;
        item.current_episode = self.current_episode;
        item.progress_notes = self.progress_notes.unwrap_or_default();
        item.cover_image_url = self.cover_image_url.unwrap_or_default();
        item.genre = clean_genres(self.genre);
        item.release_year = self.release_year;
        item.started_date = self.started_date;
        item.set_status(self.status.unwrap_or_default(), today);
        item.validate()?;
        Ok(item)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_or_network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_or_developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MediaStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_season: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_episode: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_date: Option<NaiveDate>,
}

impl UpdateMediaRequest {
    pub fn with_status(mut self, status: MediaStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// On validation failure `item` is left untouched.
    pub fn apply_to(self, item: &mut MediaItem, today: NaiveDate) -> Result<(), MediaError> {
        let mut updated = item.clone();
        if let Some(media_type) = self.media_type {
            updated.media_type = media_type;
        }
        if let Some(title) = self.title {
            updated.title = title.trim().to_string();
        }
        if let Some(platform) = self.platform_or_network {
            updated.platform_or_network = platform.trim().to_string();
        }
        if let Some(creator) = self.creator_or_developer {
            updated.creator_or_developer = creator.trim().to_string();
        }
        if self.user_rating.is_some() {
            updated.user_rating = self.user_rating;
        }
        if let Some(notes) = self.notes {
            updated.notes = notes.trim().to_string();
        }
        if self.current_season.is_some() {
            updated.current_season = self.current_season;
        }
        if self.current_episode.is_some() {
            updated.current_episode = self.current_episode;
        }
        if let Some(progress) = self.progress_notes {
            updated.progress_notes = progress;
        }
        if let Some(url) = self.cover_image_url {
            updated.cover_image_url = url.trim().to_string();
        }
        if let Some(genre) = self.genre {
            updated.genre = clean_genres(genre);
        }
        if self.release_year.is_some() {
            updated.release_year = self.release_year;
        }
        if self.started_date.is_some() {
            updated.started_date = self.started_date;
        }
        if let Some(status) = self.status {
            if status != updated.status {
                updated.set_status(status, today);
            }
        }
        updated.validate()?;
        updated.updated_at = Utc::now();
        *item = updated;
        Ok(())
    }
}

/// Query parameters for `GET /api/media`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaQuery {
    #[serde(default, rename = "type")]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub status: Option<MediaStatus>,
}

impl MediaQuery {
    pub fn matches(&self, item: &MediaItem) -> bool {
        self.media_type.is_none_or(|t| t == item.media_type)
            && self.status.is_none_or(|s| s == item.status)
    }
}

/// Genres keep their case; only blanks and exact repeats are dropped.
fn clean_genres(genres: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for genre in genres {
        let genre = genre.trim().to_string();
        if !genre.is_empty() && !out.contains(&genre) {
            out.push(genre);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    fn show() -> MediaItem {
        CreateMediaRequest::new(MediaType::Show, "Severance")
            .into_media(Uuid::new_v4(), today())
            .unwrap()
    }

    #[test]
    fn test_create_validation() {
        let user = Uuid::new_v4();
        assert_eq!(
            CreateMediaRequest::new(MediaType::Movie, " ").into_media(user, today()),
            Err(MediaError::EmptyTitle)
        );
        assert_eq!(
            CreateMediaRequest::default().into_media(user, today()),
            Err(MediaError::MissingMediaType)
        );

        let mut req = CreateMediaRequest::new(MediaType::Show, "Lost");
        req.current_episode = Some(0);
        assert_eq!(
            req.into_media(user, today()),
            Err(MediaError::InvalidProgress("Episode"))
        );

        let mut req = CreateMediaRequest::new(MediaType::Game, "Hades");
        req.user_rating = Some(0);
        assert_eq!(req.into_media(user, today()), Err(MediaError::InvalidRating(0)));
    }

    #[test]
    fn test_status_uses_kebab_case() {
        let req: CreateMediaRequest = serde_json::from_str(
            r#"{"mediaType": "game", "title": "Celeste", "status": "on-hold", "genre": ["Platformer", " ", "Platformer"]}"#,
        )
        .unwrap();
        let item = req.into_media(Uuid::new_v4(), today()).unwrap();

        assert_eq!(item.status, MediaStatus::OnHold);
        assert_eq!(item.genre, vec!["Platformer"]);
        assert_eq!(serde_json::to_value(item.status).unwrap(), "on-hold");
    }

    #[test]
    fn test_created_completed_gets_date() {
        let mut req = CreateMediaRequest::new(MediaType::Movie, "Heat");
        req.status = Some(MediaStatus::Watched);
        let item = req.into_media(Uuid::new_v4(), today()).unwrap();
        assert_eq!(item.completed_date, Some(today()));
    }

    #[test]
    fn test_completed_date_follows_status() {
        let mut item = show();
        UpdateMediaRequest::default()
            .with_status(MediaStatus::Completed)
            .apply_to(&mut item, today())
            .unwrap();
        assert_eq!(item.completed_date, Some(today()));

        // Switching between done statuses keeps the first date
        let later = today().succ_opt().unwrap();
        UpdateMediaRequest::default()
            .with_status(MediaStatus::Watched)
            .apply_to(&mut item, later)
            .unwrap();
        assert_eq!(item.completed_date, Some(today()));

        UpdateMediaRequest::default()
            .with_status(MediaStatus::Watching)
            .apply_to(&mut item, later)
            .unwrap();
        assert_eq!(item.completed_date, None);
    }

    #[test]
    fn test_invalid_update_leaves_item_untouched() {
        let mut item = show();
        let req = UpdateMediaRequest {
            title: Some("New".to_string()),
            user_rating: Some(11),
            ..UpdateMediaRequest::default()
        };
        assert_eq!(req.apply_to(&mut item, today()), Err(MediaError::InvalidRating(11)));
        assert_eq!(item.title, "Severance");
    }

    #[test]
    fn test_query_filters_by_type() {
        let item = show();
        let query: MediaQuery = serde_json::from_str(r#"{"type": "show"}"#).unwrap();
        assert!(query.matches(&item));

        let query: MediaQuery = serde_json::from_str(r#"{"type": "game"}"#).unwrap();
        assert!(!query.matches(&item));
        assert!(MediaQuery::default().matches(&item));
    }
}
