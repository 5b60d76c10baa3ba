//! API request types for the Pokémon endpoints.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{CollectibleError, EvolutionPath, PokemonBase, PokemonForm};

/// Request payload for `POST /api/admin/pokemon`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePokemonBaseRequest {
    pub species_id: u32,
    pub name: String,
    pub generation: u32,
    pub base_types: Vec<String>,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub forms: Vec<PokemonForm>,
    #[serde(default)]
    pub evolution_paths: Vec<EvolutionPath>,
}

impl CreatePokemonBaseRequest {
    /// Builds the base record. Without explicit forms a single "Default"
    /// form with the base types is created.
    pub fn into_base(self) -> Result<PokemonBase, CollectibleError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CollectibleError::EmptyName);
        }
        if self.species_id == 0 {
            return Err(CollectibleError::InvalidSpeciesId);
        }
        let types: Vec<&str> = self.base_types.iter().map(String::as_str).collect();
        let mut base = PokemonBase::new(self.species_id, name, self.generation, &types);
        base.is_legendary = self.is_legendary;
        base.is_mythical = self.is_mythical;
        base.is_starter = self.is_starter;
        base.description = self.description;
        if !self.forms.is_empty() {
            base.forms = self.forms;
        }
        base.evolution_paths = self.evolution_paths;
        Ok(base)
    }
}

/// Request payload for `PUT /api/admin/pokemon/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePokemonBaseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_legendary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mythical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_starter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forms: Option<Vec<PokemonForm>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution_paths: Option<Vec<EvolutionPath>>,
}

impl UpdatePokemonBaseRequest {
    pub fn apply_to(self, base: &mut PokemonBase) -> Result<(), CollectibleError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(CollectibleError::EmptyName);
            }
        }
        if self.species_id == Some(0) {
            return Err(CollectibleError::InvalidSpeciesId);
        }
        if matches!(&self.forms, Some(forms) if forms.is_empty()) {
            return Err(CollectibleError::MissingForms);
        }

        if let Some(species_id) = self.species_id {
            base.species_id = species_id;
        }
        if let Some(name) = self.name {
            base.name = name.trim().to_string();
        }
        if let Some(generation) = self.generation {
            base.generation = generation;
        }
        if let Some(types) = self.base_types {
            base.base_types = types;
        }
        if let Some(v) = self.is_legendary {
            base.is_legendary = v;
        }
        if let Some(v) = self.is_mythical {
            base.is_mythical = v;
        }
        if let Some(v) = self.is_starter {
            base.is_starter = v;
        }
        if let Some(description) = self.description {
            base.description = description;
        }
        if let Some(forms) = self.forms {
            base.forms = forms;
        }
        if let Some(paths) = self.evolution_paths {
            base.evolution_paths = paths;
        }
        base.updated_at = Utc::now();
        Ok(())
    }
}

/// Request payload for `POST /api/pokemon/{id}/train`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainRequest {
    pub xp: u64,
}

impl TrainRequest {
    pub fn validate(&self) -> Result<(), CollectibleError> {
        if self.xp == 0 {
            return Err(CollectibleError::InvalidTrainingXp);
        }
        Ok(())
    }
}
