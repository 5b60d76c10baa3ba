//! Pokémon catalogue, training and evolution.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use uuid::Uuid;

use lifequest_core::collectible::{
    evolution_chain, plan_evolution, CollectibleError, CollectionEntry, CreatePokemonBaseRequest,
    PokemonBase, TrainRequest, UpdatePokemonBaseRequest, UserPokemon,
};

use super::{ApiJson, ApiResponse, AppError};
use crate::{
    auth::{AdminUser, CurrentUser},
    state::AppState,
};

async fn owned_pokemon(state: &AppState, user_id: Uuid, id: Uuid) -> Result<UserPokemon, AppError> {
    state
        .collections
        .get_user_pokemon(id)
        .await?
        .filter(|pokemon| pokemon.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Pokémon not found in your collection"))
}

async fn base_of(state: &AppState, pokemon: &UserPokemon) -> Result<PokemonBase, AppError> {
    state
        .pokemon_bases
        .get_base(pokemon.base_id)
        .await?
        .ok_or_else(|| AppError::not_found("Base Pokémon not found"))
}

// ============================================================================
// Catalogue
// ============================================================================

/// The base catalogue by species id (GET /api/pokemon/base).
pub async fn list_bases(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<PokemonBase>>, AppError> {
    Ok(ApiResponse::list(state.pokemon_bases.list_bases().await?))
}

/// One species (GET /api/pokemon/base/{species_id}).
pub async fn get_base(
    State(state): State<AppState>,
    Path(species_id): Path<u32>,
) -> Result<ApiResponse<PokemonBase>, AppError> {
    let base = state
        .pokemon_bases
        .get_base_by_species(species_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Species {species_id} not found")))?;
    Ok(ApiResponse::ok(base))
}

/// The evolution family of a species, root first
/// (GET /api/pokemon/base/{species_id}/chain).
pub async fn get_chain(
    State(state): State<AppState>,
    Path(species_id): Path<u32>,
) -> Result<ApiResponse<Vec<PokemonBase>>, AppError> {
    let catalogue = state.pokemon_bases.list_bases().await?;
    let chain = evolution_chain(&catalogue, species_id)
        .ok_or_else(|| AppError::not_found(format!("Species {species_id} not found")))?;

    // Stages missing from the catalogue are skipped.
    let stages = chain
        .iter()
        .filter_map(|id| catalogue.iter().find(|base| base.species_id == *id))
        .cloned()
        .collect();

    Ok(ApiResponse::list(stages))
}

/// Add a species to the catalogue (POST /api/admin/pokemon).
pub async fn create_base(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ApiJson(req): ApiJson<CreatePokemonBaseRequest>,
) -> Result<(StatusCode, ApiResponse<PokemonBase>), AppError> {
    let base = req.into_base()?;
    state.pokemon_bases.create_base(&base).await?;

    tracing::info!(base_id = %base.id, species_id = base.species_id, name = %base.name, "Created base Pokémon");

    Ok((StatusCode::CREATED, ApiResponse::ok(base)))
}

/// Edit a catalogue entry (PUT /api/admin/pokemon/{id}).
pub async fn update_base(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdatePokemonBaseRequest>,
) -> Result<ApiResponse<PokemonBase>, AppError> {
    let mut base = state
        .pokemon_bases
        .get_base(id)
        .await?
        .ok_or_else(|| AppError::not_found("Base Pokémon not found"))?;
    req.apply_to(&mut base)?;
    state.pokemon_bases.update_base(&base).await?;

    tracing::info!(base_id = %id, species_id = base.species_id, "Updated base Pokémon");

    Ok(ApiResponse::ok(base))
}

// ============================================================================
// Owned Pokémon
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPayload {
    pub pokemon: CollectionEntry,
    pub levels_gained: u32,
}

/// Give training XP to an owned Pokémon (POST /api/pokemon/{id}/train).
pub async fn train(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<TrainRequest>,
) -> Result<ApiResponse<TrainingPayload>, AppError> {
    req.validate()?;

    let mut pokemon = owned_pokemon(&state, user.id, id).await?;
    let base_pokemon = base_of(&state, &pokemon).await?;

    let levels_gained = pokemon.train(req.xp);
    state.collections.update_user_pokemon(&pokemon).await?;

    tracing::info!(pokemon_id = %id, xp = req.xp, level = pokemon.level, "Trained Pokémon");

    Ok(ApiResponse::ok(TrainingPayload {
        pokemon: CollectionEntry {
            pokemon,
            base_pokemon,
        },
        levels_gained,
    }))
}

/// Evolve an owned Pokémon along its first satisfied level-up path
/// (POST /api/pokemon/{id}/evolve).
pub async fn evolve(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<CollectionEntry>, AppError> {
    let mut pokemon = owned_pokemon(&state, user.id, id).await?;
    let base = base_of(&state, &pokemon).await?;

    let target_species = plan_evolution(&base, pokemon.level)?;
    let target = state
        .pokemon_bases
        .get_base_by_species(target_species)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Species {target_species} not found")))?;

    let already_owned = state
        .collections
        .list_user_pokemon(user.id)
        .await?
        .iter()
        .any(|owned| owned.base_id == target.id);
    if already_owned {
        return Err(CollectibleError::AlreadyOwned.into());
    }

    pokemon.base_id = target.id;
    state.collections.update_user_pokemon(&pokemon).await?;

    tracing::info!(
        pokemon_id = %id,
        from = %base.name,
        to = %target.name,
        "Evolved Pokémon"
    );

    let message = format!("{} evolved into {}!", base.name, target.name);
    Ok(ApiResponse::ok(CollectionEntry {
        pokemon,
        base_pokemon: target,
    })
    .with_message(message))
}
