use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progression::{next_threshold, MAX_LEVEL};

/// XP an owned Pokémon needs to go from level 1 to level 2.
pub const POKEMON_BASE_XP_TO_NEXT_LEVEL: u64 = 50;

/// One visual form of a species, including the default one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonForm {
    pub form_name: String,
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_gen5_animated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_gen6_animated: Option<String>,
}

impl PokemonForm {
    pub fn new(form_name: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            form_name: form_name.into(),
            types,
            sprite_gen5_animated: None,
            sprite_gen6_animated: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvolutionMethod {
    LevelUp,
    UseItem,
    Trade,
    LevelUpWithHighFriendship,
    #[serde(other)]
    Other,
}

/// Method parameter: a level for level-ups, an item or condition otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvolutionDetail {
    Level(u32),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionPath {
    pub to_species_id: u32,
    pub method: EvolutionMethod,
    pub detail: EvolutionDetail,
}

impl EvolutionPath {
    pub fn level_up(to_species_id: u32, level: u32) -> Self {
        Self {
            to_species_id,
            method: EvolutionMethod::LevelUp,
            detail: EvolutionDetail::Level(level),
        }
    }

    pub fn use_item(to_species_id: u32, item: impl Into<String>) -> Self {
        Self {
            to_species_id,
            method: EvolutionMethod::UseItem,
            detail: EvolutionDetail::Text(item.into()),
        }
    }

    /// Required level, for level-up paths only.
    pub fn level_requirement(&self) -> Option<u32> {
        match (&self.method, &self.detail) {
            (EvolutionMethod::LevelUp, EvolutionDetail::Level(level)) => Some(*level),
            _ => None,
        }
    }
}

/// Canonical definition of a species, shared by every owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonBase {
    pub id: Uuid,
    pub species_id: u32,
    pub name: String,
    pub generation: u32,
    pub base_types: Vec<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub is_starter: bool,
    pub description: String,
    pub forms: Vec<PokemonForm>,
    pub evolution_paths: Vec<EvolutionPath>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PokemonBase {
    /// Creates a species with a single default form.
    pub fn new(species_id: u32, name: impl Into<String>, generation: u32, types: &[&str]) -> Self {
        let now = Utc::now();
        let base_types: Vec<String> = types.iter().map(|t| t.to_string()).collect();
        Self {
            id: Uuid::new_v4(),
            species_id,
            name: name.into(),
            generation,
            forms: vec![PokemonForm::new("Default", base_types.clone())],
            base_types,
            is_legendary: false,
            is_mythical: false,
            is_starter: false,
            description: String::new(),
            evolution_paths: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_evolution(mut self, path: EvolutionPath) -> Self {
        self.evolution_paths.push(path);
        self
    }

    pub fn starter(mut self) -> Self {
        self.is_starter = true;
        self
    }

    pub fn legendary(mut self) -> Self {
        self.is_legendary = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    Normal,
    Shiny,
    Dark,
    Steel,
    Mystic,
    Shadow,
}

/// A user's copy of a base Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPokemon {
    pub id: Uuid,
    pub user_id: Uuid,
    pub base_id: Uuid,
    pub nickname: Option<String>,
    pub variant: Variant,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub obtained_at: DateTime<Utc>,
}

impl UserPokemon {
    pub fn new(user_id: Uuid, base_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            base_id,
            nickname: None,
            variant: Variant::Normal,
            level: 1,
            xp: 0,
            xp_to_next_level: POKEMON_BASE_XP_TO_NEXT_LEVEL,
            obtained_at: Utc::now(),
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Adds training XP and returns the number of levels gained.
    pub fn train(&mut self, xp: u64) -> u32 {
        self.xp = self.xp.saturating_add(xp);
        let mut gained = 0;
        while self.level < MAX_LEVEL && self.xp >= self.xp_to_next_level {
            self.xp -= self.xp_to_next_level;
            self.level += 1;
            self.xp_to_next_level = next_threshold(self.xp_to_next_level);
            gained += 1;
        }
        gained
    }
}

/// An owned Pokémon joined with its base species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    #[serde(flatten)]
    pub pokemon: UserPokemon,
    pub base_pokemon: PokemonBase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evolution_path_json_shape() {
        let path = EvolutionPath::level_up(2, 16);
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"toSpeciesId": 2, "method": "level-up", "detail": 16})
        );

        let item: EvolutionPath = serde_json::from_str(
            r#"{"toSpeciesId": 26, "method": "use-item", "detail": "thunder-stone"}"#,
        )
        .unwrap();
        assert_eq!(item, EvolutionPath::use_item(26, "thunder-stone"));
        assert_eq!(item.level_requirement(), None);
    }

    #[test]
    fn test_unknown_method_deserializes_as_other() {
        let path: EvolutionPath = serde_json::from_str(
            r#"{"toSpeciesId": 196, "method": "spin-around", "detail": "day"}"#,
        )
        .unwrap();
        assert_eq!(path.method, EvolutionMethod::Other);
    }

    #[test]
    fn test_new_user_pokemon_defaults() {
        let p = UserPokemon::new(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(p.level, 1);
        assert_eq!(p.xp, 0);
        assert_eq!(p.xp_to_next_level, 50);
        assert_eq!(p.variant, Variant::Normal);
    }

    #[test]
    fn test_train_levels_up_on_pokemon_curve() {
        let mut p = UserPokemon::new(Uuid::new_v4(), Uuid::new_v4());
        // 50 + 62 = 112 XP for two levels.
        let gained = p.train(120);

        assert_eq!(gained, 2);
        assert_eq!(p.level, 3);
        assert_eq!(p.xp, 8);
        assert_eq!(p.xp_to_next_level, 77);
    }

    #[test]
    fn test_collection_entry_flattens_pokemon() {
        let base = PokemonBase::new(25, "Pikachu", 1, &["electric"]);
        let entry = CollectionEntry {
            pokemon: UserPokemon::new(Uuid::new_v4(), base.id),
            base_pokemon: base,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["variant"], "Normal");
        assert_eq!(json["basePokemon"]["name"], "Pikachu");
    }
}
