//! Non-Pokémon collectibles: trading cards, Snoopy art, Habbo rares and
//! Abel personas. They share one catalogue shape, keyed per category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::deserialize_optional_string;

use super::{CollectibleError, GachaCategory};

/// Rarity tiers across all item categories. Cards use the `*-rare` tiers,
/// Snoopy art tops out at `legendary`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    SuperRare,
    UltraRare,
    SecretRare,
    UltimateRare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectibleItem {
    pub id: Uuid,
    pub category: GachaCategory,
    /// External identifier, unique within the category (card database id,
    /// Snoopy number, persona slug).
    pub key: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub rarity: Rarity,
    pub series: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CollectibleItem {
    pub fn new(
        category: GachaCategory,
        key: impl Into<String>,
        name: impl Into<String>,
        rarity: Rarity,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            category,
            key: key.into(),
            name: name.into(),
            description: String::new(),
            image_url: String::new(),
            rarity,
            series: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = series.into();
        self
    }
}

/// One pulled copy of a catalogue item. Duplicates are allowed except for
/// personas, which unlock once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub category: GachaCategory,
    pub obtained_at: DateTime<Utc>,
}

impl UserItem {
    pub fn new(user_id: Uuid, item: &CollectibleItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            item_id: item.id,
            category: item.category,
            obtained_at: Utc::now(),
        }
    }
}

/// A user item joined with its catalogue entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedItem {
    #[serde(flatten)]
    pub owned: UserItem,
    pub item: CollectibleItem,
}

/// Admin payload for adding a catalogue item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(default)]
    pub category: Option<GachaCategory>,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rarity: Option<Rarity>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub series: Option<String>,
}

impl CreateItemRequest {
    pub fn into_item(self) -> Result<CollectibleItem, CollectibleError> {
        let category = self.category.ok_or(CollectibleError::MissingCategory)?;
        if category == GachaCategory::Pokemon {
            return Err(CollectibleError::NotAnItemCategory);
        }
        let key = self.key.trim();
        if key.is_empty() {
            return Err(CollectibleError::EmptyItemKey);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CollectibleError::EmptyItemName);
        }
        let mut item = CollectibleItem::new(category, key, name, self.rarity.unwrap_or_default());
        item.description = self.description.unwrap_or_default();
        item.image_url = self.image_url.unwrap_or_default();
        item.series = self.series.unwrap_or_default();
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_item_request() {
        let req: CreateItemRequest = serde_json::from_str(
            r#"{"category": "yugioh", "key": "89631139", "name": " Blue-Eyes White Dragon ", "rarity": "ultra-rare"}"#,
        )
        .unwrap();
        let item = req.into_item().unwrap();

        assert_eq!(item.category, GachaCategory::Yugioh);
        assert_eq!(item.name, "Blue-Eyes White Dragon");
        assert_eq!(item.rarity, Rarity::UltraRare);
    }

    #[test]
    fn test_create_item_rejects_pokemon_and_blanks() {
        let req = CreateItemRequest {
            category: Some(GachaCategory::Pokemon),
            key: "25".to_string(),
            name: "Pikachu".to_string(),
            ..CreateItemRequest::default()
        };
        assert_eq!(req.into_item(), Err(CollectibleError::NotAnItemCategory));

        let req = CreateItemRequest {
            category: Some(GachaCategory::Snoopy),
            key: "  ".to_string(),
            name: "Joe Cool".to_string(),
            ..CreateItemRequest::default()
        };
        assert_eq!(req.into_item(), Err(CollectibleError::EmptyItemKey));
    }
}
