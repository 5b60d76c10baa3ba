use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ParsedVolume, VolumeError};

/// Publication state of a volume. Only published volumes are public.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl VolumeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeStatus::Draft => "draft",
            VolumeStatus::Published => "published",
            VolumeStatus::Archived => "archived",
        }
    }
}

impl FromStr for VolumeStatus {
    type Err = VolumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(VolumeStatus::Draft),
            "published" => Ok(VolumeStatus::Published),
            "archived" => Ok(VolumeStatus::Archived),
            other => Err(VolumeError::InvalidStatus(other.to_string())),
        }
    }
}

/// One line of the "Life is" list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blessing {
    pub item: String,
    #[serde(default)]
    pub description: String,
    /// Free-form lore notes kept alongside the blessing.
    #[serde(default)]
    pub context: String,
}

impl Blessing {
    pub fn new(item: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            description: description.into(),
            context: String::new(),
        }
    }
}

/// A single public rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub value: u8,
    pub rated_at: DateTime<Utc>,
}

/// A stored greentext volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: Uuid,
    pub volume_number: u32,
    pub title: String,
    pub body_lines: Vec<String>,
    pub blessing_intro: String,
    pub blessings: Vec<Blessing>,
    pub dream: String,
    pub edition: String,
    pub raw_pasted_text: String,
    pub status: VolumeStatus,
    pub created_by: Uuid,
    pub favorite_count: u64,
    pub ratings: Vec<Rating>,
    pub average_rating: f64,
    pub rating_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Volume {
    /// Builds a volume from parser output.
    ///
    /// Fails with [`VolumeError::MissingHeader`] when the header line did not
    /// yield both a number and a title.
    pub fn from_parsed(
        parsed: ParsedVolume,
        raw_pasted_text: impl Into<String>,
        status: VolumeStatus,
        created_by: Uuid,
    ) -> Result<Self, VolumeError> {
        let volume_number = match parsed.volume_number {
            Some(n) if !parsed.title.is_empty() => n,
            _ => return Err(VolumeError::MissingHeader),
        };
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            volume_number,
            title: parsed.title,
            body_lines: parsed.body_lines,
            blessing_intro: parsed.blessing_intro,
            blessings: parsed.blessings,
            dream: parsed.dream,
            edition: parsed.edition,
            raw_pasted_text: raw_pasted_text.into(),
            status,
            created_by,
            favorite_count: 0,
            ratings: Vec::new(),
            average_rating: 0.0,
            rating_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces every parsed field, keeping identity, status and counters.
    pub fn apply_parsed(
        &mut self,
        parsed: ParsedVolume,
        raw_pasted_text: impl Into<String>,
    ) -> Result<(), VolumeError> {
        let volume_number = match parsed.volume_number {
            Some(n) if !parsed.title.is_empty() => n,
            _ => return Err(VolumeError::MissingHeader),
        };
        self.volume_number = volume_number;
        self.title = parsed.title;
        self.body_lines = parsed.body_lines;
        self.blessing_intro = parsed.blessing_intro;
        self.blessings = parsed.blessings;
        self.dream = parsed.dream;
        self.edition = parsed.edition;
        self.raw_pasted_text = raw_pasted_text.into();
        Ok(())
    }

    pub fn is_published(&self) -> bool {
        self.status == VolumeStatus::Published
    }

    /// Records a 1..=5 rating and recomputes the average.
    pub fn rate(&mut self, value: i64, now: DateTime<Utc>) -> Result<(), VolumeError> {
        if !(1..=5).contains(&value) {
            return Err(VolumeError::InvalidRating(value));
        }
        self.ratings.push(Rating {
            value: value as u8,
            rated_at: now,
        });
        let total: u64 = self.ratings.iter().map(|r| u64::from(r.value)).sum();
        self.rating_count = self.ratings.len() as u64;
        self.average_rating = total as f64 / self.rating_count as f64;
        self.updated_at = now;
        Ok(())
    }

    pub fn favorite(&mut self, now: DateTime<Utc>) {
        self.favorite_count += 1;
        self.updated_at = now;
    }

    pub fn catalogue_entry(&self) -> CatalogueEntry {
        CatalogueEntry {
            id: self.id,
            volume_number: self.volume_number,
            title: self.title.clone(),
        }
    }
}

/// Number and title of a published volume, for the public index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueEntry {
    pub id: Uuid,
    pub volume_number: u32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::parse_greentext;

    fn sample() -> Volume {
        let raw = "Volume 3 – Spring\n>be me\nLife is good\nSun (warm)";
        Volume::from_parsed(
            parse_greentext(raw),
            raw,
            VolumeStatus::Draft,
            Uuid::new_v4(),
        )
        .unwrap()
    }

    #[test]
    fn test_from_parsed_copies_fields() {
        let volume = sample();
        assert_eq!(volume.volume_number, 3);
        assert_eq!(volume.title, "Spring");
        assert_eq!(volume.edition, "Spring Edition");
        assert_eq!(volume.body_lines, vec![">be me"]);
        assert_eq!(volume.blessings, vec![Blessing::new("Sun", "warm")]);
        assert_eq!(volume.rating_count, 0);
        assert!(!volume.is_published());
    }

    #[test]
    fn test_from_parsed_requires_header() {
        let raw = ">be me\n>no header";
        let result = Volume::from_parsed(
            parse_greentext(raw),
            raw,
            VolumeStatus::Draft,
            Uuid::new_v4(),
        );
        assert_eq!(result, Err(VolumeError::MissingHeader));
    }

    #[test]
    fn test_apply_parsed_keeps_counters() {
        let mut volume = sample();
        volume.favorite(Utc::now());
        let raw = "Volume 4 – Summer\n>be hot";
        volume.apply_parsed(parse_greentext(raw), raw).unwrap();

        assert_eq!(volume.volume_number, 4);
        assert_eq!(volume.title, "Summer");
        assert!(volume.blessings.is_empty());
        assert_eq!(volume.favorite_count, 1);
        assert_eq!(volume.raw_pasted_text, raw);
    }

    #[test]
    fn test_rate_recomputes_average() {
        let mut volume = sample();
        volume.rate(4, Utc::now()).unwrap();
        volume.rate(5, Utc::now()).unwrap();

        assert_eq!(volume.rating_count, 2);
        assert_eq!(volume.average_rating, 4.5);
    }

    #[test]
    fn test_rate_rejects_out_of_range() {
        let mut volume = sample();
        assert_eq!(
            volume.rate(0, Utc::now()),
            Err(VolumeError::InvalidRating(0))
        );
        assert_eq!(
            volume.rate(6, Utc::now()),
            Err(VolumeError::InvalidRating(6))
        );
        assert!(volume.ratings.is_empty());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "published".parse::<VolumeStatus>().unwrap(),
            VolumeStatus::Published
        );
        assert!("live".parse::<VolumeStatus>().is_err());
    }

    #[test]
    fn test_volume_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["volumeNumber"], 3);
        assert_eq!(json["status"], "draft");
        assert_eq!(json["blessingIntro"], "Life is good");
    }
}
