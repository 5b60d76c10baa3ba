//! Profile collection and display settings.

use std::collections::HashMap;

use axum::extract::State;
use chrono::Utc;
use uuid::Uuid;

use lifequest_core::account::{validate_display_update, DisplayUpdateRequest, PublicUser};
use lifequest_core::collectible::{CollectionEntry, PokemonBase};

use super::{ApiJson, ApiResponse, AppError};
use crate::{auth::CurrentUser, state::AppState};

/// Joins a user's Pokémon with their base species, in acquisition order.
pub(crate) async fn collection_for(
    state: &AppState,
    user_id: Uuid,
) -> Result<Vec<CollectionEntry>, AppError> {
    let bases: HashMap<Uuid, PokemonBase> = state
        .pokemon_bases
        .list_bases()
        .await?
        .into_iter()
        .map(|base| (base.id, base))
        .collect();

    let owned = state.collections.list_user_pokemon(user_id).await?;
    let mut entries = Vec::with_capacity(owned.len());
    for pokemon in owned {
        match bases.get(&pokemon.base_id) {
            Some(base) => entries.push(CollectionEntry {
                base_pokemon: base.clone(),
                pokemon,
            }),
            None => {
                tracing::warn!(pokemon_id = %pokemon.id, base_id = %pokemon.base_id, "Owned Pokémon references a missing base");
            }
        }
    }
    Ok(entries)
}

/// List the user's Pokémon (GET /api/users/me/collection/pokemon).
pub async fn list_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiResponse<Vec<CollectionEntry>>, AppError> {
    let entries = collection_for(&state, user.id).await?;
    Ok(ApiResponse::list(entries))
}

/// Choose the Pokémon shown on the profile (PUT /api/users/me/profile/display).
pub async fn update_display(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    ApiJson(req): ApiJson<DisplayUpdateRequest>,
) -> Result<ApiResponse<PublicUser>, AppError> {
    let owned: Vec<Uuid> = state
        .collections
        .list_user_pokemon(user.id)
        .await?
        .into_iter()
        .map(|pokemon| pokemon.id)
        .collect();

    validate_display_update(&req, &owned)?;

    user.displayed_pokemon = req.items;
    user.updated_at = Utc::now();
    state.users.update_user(&user).await?;

    tracing::info!(user_id = %user.id, count = user.displayed_pokemon.len(), "Updated profile display");

    Ok(ApiResponse::ok(user.to_public()).with_message("Profile display updated"))
}
