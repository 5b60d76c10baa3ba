//! Item catalogues and the gacha shop.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use lifequest_core::account::{PublicUser, User};
use lifequest_core::collectible::{
    open_card_pack, pick_any, pick_unowned, CollectibleError, CollectibleItem, CollectionEntry,
    CreateItemRequest, GachaCategory, OwnedItem, PullKind, UserItem, UserPokemon,
};

use super::{ApiJson, ApiResponse, AppError};
use crate::{
    auth::{AdminUser, CurrentUser},
    state::AppState,
};

fn item_category(category: &str) -> Result<GachaCategory, AppError> {
    match category.parse::<GachaCategory>()? {
        GachaCategory::Pokemon => Err(CollectibleError::NotAnItemCategory.into()),
        category => Ok(category),
    }
}

/// One category's catalogue, ordered by key (GET /api/collectibles/{category}).
pub async fn list_items(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<ApiResponse<Vec<CollectibleItem>>, AppError> {
    let category = item_category(&category)?;
    Ok(ApiResponse::list(state.items.list_items(category).await?))
}

/// Add a catalogue item (POST /api/admin/collectibles).
pub async fn create_item(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ApiJson(req): ApiJson<CreateItemRequest>,
) -> Result<(StatusCode, ApiResponse<CollectibleItem>), AppError> {
    let item = req.into_item()?;
    state.items.create_item(&item).await?;

    tracing::info!(
        item_id = %item.id,
        category = item.category.as_str(),
        key = %item.key,
        "Created collectible item"
    );

    Ok((StatusCode::CREATED, ApiResponse::ok(item)))
}

/// Joins a user's items in one category with their catalogue entries.
async fn owned_items_for(
    state: &AppState,
    user_id: Uuid,
    category: GachaCategory,
) -> Result<Vec<OwnedItem>, AppError> {
    let catalogue: HashMap<Uuid, CollectibleItem> = state
        .items
        .list_items(category)
        .await?
        .into_iter()
        .map(|item| (item.id, item))
        .collect();

    let owned = state
        .user_items
        .list_user_items(user_id)
        .await?
        .into_iter()
        .filter(|owned| owned.category == category);

    let mut entries = Vec::new();
    for owned in owned {
        match catalogue.get(&owned.item_id) {
            Some(item) => entries.push(OwnedItem {
                item: item.clone(),
                owned,
            }),
            None => {
                tracing::warn!(user_item_id = %owned.id, item_id = %owned.item_id, "Owned item references a missing catalogue entry");
            }
        }
    }
    Ok(entries)
}

/// The user's items in one category (GET /api/users/me/collection/{category}).
pub async fn list_owned_items(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category): Path<String>,
) -> Result<ApiResponse<Vec<OwnedItem>>, AppError> {
    let category = item_category(&category)?;
    Ok(ApiResponse::list(owned_items_for(&state, user.id, category).await?))
}

// ============================================================================
// Shop
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PullPayload {
    Pokemon {
        pokemon: CollectionEntry,
        user: PublicUser,
    },
    Items {
        items: Vec<CollectibleItem>,
        user: PublicUser,
    },
}

/// Spend currency on a pull (POST /api/shop/pull/{category}).
///
/// The price is charged once per pull: a Yu-Gi-Oh! pull opens a whole pack.
pub async fn pull(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    Path(category): Path<String>,
) -> Result<(StatusCode, ApiResponse<PullPayload>), AppError> {
    let category: GachaCategory = category.parse()?;

    user.progression
        .spend(category.currency(), category.cost())?;

    let (payload, message) = match category.pull_kind() {
        PullKind::UnownedPokemon => pull_pokemon(&state, &mut user).await?,
        kind => pull_items(&state, &mut user, category, kind).await?,
    };

    tracing::info!(
        user_id = %user.id,
        category = category.as_str(),
        cost = category.cost(),
        "Gacha pull"
    );

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(payload).with_message(message),
    ))
}

async fn save_wallet(state: &AppState, user: &mut User) -> Result<(), AppError> {
    user.updated_at = Utc::now();
    state.users.update_user(user).await?;
    Ok(())
}

async fn pull_pokemon(
    state: &AppState,
    user: &mut User,
) -> Result<(PullPayload, String), AppError> {
    let catalogue = state.pokemon_bases.list_bases().await?;
    let owned: Vec<Uuid> = state
        .collections
        .list_user_pokemon(user.id)
        .await?
        .into_iter()
        .map(|pokemon| pokemon.base_id)
        .collect();

    let base = {
        let mut rng = rand::rng();
        pick_unowned(&catalogue, &owned, &mut rng)?.clone()
    };

    let pokemon = UserPokemon::new(user.id, base.id);
    state.collections.create_user_pokemon(&pokemon).await?;
    save_wallet(state, user).await?;

    tracing::debug!(species_id = base.species_id, "Pulled Pokémon");

    let message = format!("You got {}!", base.name);
    let payload = PullPayload::Pokemon {
        pokemon: CollectionEntry {
            pokemon,
            base_pokemon: base,
        },
        user: user.to_public(),
    };
    Ok((payload, message))
}

async fn pull_items(
    state: &AppState,
    user: &mut User,
    category: GachaCategory,
    kind: PullKind,
) -> Result<(PullPayload, String), AppError> {
    let catalogue = state.items.list_items(category).await?;
    let owned: Vec<Uuid> = if kind == PullKind::DirectUnlock {
        state
            .user_items
            .list_user_items(user.id)
            .await?
            .into_iter()
            .filter(|owned| owned.category == category)
            .map(|owned| owned.item_id)
            .collect()
    } else {
        Vec::new()
    };

    let pulled: Vec<CollectibleItem> = {
        let mut rng = rand::rng();
        match kind {
            PullKind::CardPack => open_card_pack(&catalogue, &mut rng)?
                .into_iter()
                .cloned()
                .collect(),
            PullKind::DirectUnlock => vec![pick_unowned(&catalogue, &owned, &mut rng)?.clone()],
            PullKind::Single | PullKind::UnownedPokemon => {
                vec![pick_any(&catalogue, &mut rng)?.clone()]
            }
        }
    };

    let records: Vec<UserItem> = pulled
        .iter()
        .map(|item| UserItem::new(user.id, item))
        .collect();
    state.user_items.create_user_items(&records).await?;
    save_wallet(state, user).await?;

    let message = match pulled.as_slice() {
        [item] => format!("You got {}!", item.name),
        items => format!("You opened a pack of {} cards!", items.len()),
    };
    let payload = PullPayload::Items {
        items: pulled,
        user: user.to_public(),
    };
    Ok((payload, message))
}
