//! API request types for volume operations.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{parse_greentext, Blessing, Volume, VolumeError, VolumeStatus};

/// Request payload for creating (or dry-run parsing) a volume from raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolumeRequest {
    #[serde(default)]
    pub raw_pasted_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VolumeStatus>,
}

impl CreateVolumeRequest {
    pub fn new(raw_pasted_text: impl Into<String>) -> Self {
        Self {
            raw_pasted_text: raw_pasted_text.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: VolumeStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Parses the raw text into a new volume owned by `created_by`.
    pub fn into_volume(self, created_by: uuid::Uuid) -> Result<Volume, VolumeError> {
        if self.raw_pasted_text.trim().is_empty() {
            return Err(VolumeError::MissingRawText);
        }
        let parsed = parse_greentext(&self.raw_pasted_text);
        Volume::from_parsed(
            parsed,
            self.raw_pasted_text,
            self.status.unwrap_or_default(),
            created_by,
        )
    }
}

/// Request payload for updating a volume.
///
/// When `raw_pasted_text` is present the text is re-parsed and every parsed
/// field is replaced; the individual field patches are then ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolumeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_pasted_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_lines: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blessing_intro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blessings: Option<Vec<Blessing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dream: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VolumeStatus>,
}

impl UpdateVolumeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw_text(mut self, raw: impl Into<String>) -> Self {
        self.raw_pasted_text = Some(raw.into());
        self
    }

    pub fn with_status(mut self, status: VolumeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Apply updates to an existing volume.
    pub fn apply_to(self, volume: &mut Volume) -> Result<(), VolumeError> {
        match self.raw_pasted_text.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => {
                let parsed = parse_greentext(&raw);
                volume.apply_parsed(parsed, raw)?;
            }
            None => {
                if let Some(title) = self.title {
                    let title = title.trim().to_string();
                    if title.is_empty() {
                        return Err(VolumeError::EmptyTitle);
                    }
                    volume.title = title;
                }
                if let Some(number) = self.volume_number {
                    volume.volume_number = number;
                }
                if let Some(body_lines) = self.body_lines {
                    volume.body_lines = body_lines;
                }
                if let Some(intro) = self.blessing_intro {
                    volume.blessing_intro = intro.trim().to_string();
                }
                if let Some(blessings) = self.blessings {
                    volume.blessings = blessings;
                }
                if let Some(dream) = self.dream {
                    volume.dream = dream.trim().to_string();
                }
                if let Some(edition) = self.edition {
                    volume.edition = edition.trim().to_string();
                }
            }
        }
        if let Some(status) = self.status {
            volume.status = status;
        }
        volume.updated_at = Utc::now();
        Ok(())
    }
}

/// Request payload for `POST /api/public/volumes/id/{number}/rate`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateVolumeRequest {
    pub value: i64,
}

/// Query parameters for `GET /api/admin/volumes/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_create_request_requires_text() {
        let result = CreateVolumeRequest::new("  ").into_volume(Uuid::new_v4());
        assert_eq!(result.unwrap_err(), VolumeError::MissingRawText);
    }

    #[test]
    fn test_create_request_defaults_to_draft() {
        let volume = CreateVolumeRequest::new("Volume 9 – Nine")
            .into_volume(Uuid::new_v4())
            .unwrap();
        assert_eq!(volume.status, VolumeStatus::Draft);

        let published = CreateVolumeRequest::new("Volume 9 – Nine")
            .with_status(VolumeStatus::Published)
            .into_volume(Uuid::new_v4())
            .unwrap();
        assert!(published.is_published());
    }

    #[test]
    fn test_update_reparses_raw_text() {
        let mut volume = CreateVolumeRequest::new("Volume 1 – Old\n>old line")
            .into_volume(Uuid::new_v4())
            .unwrap();
        UpdateVolumeRequest::new()
            .with_raw_text("Volume 2 – New\n>new line")
            .with_title("ignored")
            .with_status(VolumeStatus::Published)
            .apply_to(&mut volume)
            .unwrap();

        assert_eq!(volume.volume_number, 2);
        assert_eq!(volume.title, "New");
        assert_eq!(volume.body_lines, vec![">new line"]);
        assert_eq!(volume.status, VolumeStatus::Published);
    }

    #[test]
    fn test_update_rejects_unparseable_raw_text() {
        let mut volume = CreateVolumeRequest::new("Volume 1 – Old")
            .into_volume(Uuid::new_v4())
            .unwrap();
        let result = UpdateVolumeRequest::new()
            .with_raw_text("no header here")
            .apply_to(&mut volume);

        assert_eq!(result, Err(VolumeError::MissingHeader));
        assert_eq!(volume.title, "Old");
    }

    #[test]
    fn test_update_patches_fields() {
        let mut volume = CreateVolumeRequest::new("Volume 1 – Old")
            .into_volume(Uuid::new_v4())
            .unwrap();
        UpdateVolumeRequest::new()
            .with_title("  Fresh ")
            .apply_to(&mut volume)
            .unwrap();
        assert_eq!(volume.title, "Fresh");
        assert_eq!(volume.edition, "Old Edition");

        let result = UpdateVolumeRequest::new()
            .with_title("   ")
            .apply_to(&mut volume);
        assert_eq!(result, Err(VolumeError::EmptyTitle));
    }
}
