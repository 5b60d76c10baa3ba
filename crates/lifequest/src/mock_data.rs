//! Demo data: an admin account, the Kanto starter families, a small item
//! catalogue per gacha category and one volume.
//!
//! Seeding is idempotent; records that already exist are left alone.

use anyhow::Result;

use lifequest_core::account::{normalize_email, Role, User};
use lifequest_core::collectible::{
    CollectibleItem, EvolutionPath, GachaCategory, PokemonBase, Rarity,
};
use lifequest_core::volume::{CreateVolumeRequest, VolumeStatus};

use crate::{auth::hash_password, state::AppState};

const SAMPLE_VOLUME: &str = "Volume 1 – Beginnings
>be me
>wake up before the alarm
>make coffee, actually drink it warm

Life is a list of small wins
Coffee (still warm)
Sunlight – through the kitchen window
Clean desk

The dream of finishing the whole list.";

/// The three Kanto starter families, each evolving by level.
pub fn starter_catalogue() -> Vec<PokemonBase> {
    vec![
        PokemonBase::new(1, "Bulbasaur", 1, &["grass", "poison"])
            .starter()
            .with_evolution(EvolutionPath::level_up(2, 16)),
        PokemonBase::new(2, "Ivysaur", 1, &["grass", "poison"])
            .with_evolution(EvolutionPath::level_up(3, 32)),
        PokemonBase::new(3, "Venusaur", 1, &["grass", "poison"]),
        PokemonBase::new(4, "Charmander", 1, &["fire"])
            .starter()
            .with_evolution(EvolutionPath::level_up(5, 16)),
        PokemonBase::new(5, "Charmeleon", 1, &["fire"])
            .with_evolution(EvolutionPath::level_up(6, 36)),
        PokemonBase::new(6, "Charizard", 1, &["fire", "flying"]),
        PokemonBase::new(7, "Squirtle", 1, &["water"])
            .starter()
            .with_evolution(EvolutionPath::level_up(8, 16)),
        PokemonBase::new(8, "Wartortle", 1, &["water"])
            .with_evolution(EvolutionPath::level_up(9, 36)),
        PokemonBase::new(9, "Blastoise", 1, &["water"]),
    ]
}

/// Enough items per category for every pull kind to succeed.
pub fn demo_items() -> Vec<CollectibleItem> {
    use GachaCategory::{AbelPersona, Habbo, Snoopy, Yugioh};

    vec![
        CollectibleItem::new(Yugioh, "LOB-001", "Blue-Eyes White Dragon", Rarity::UltraRare)
            .with_series("Legend of Blue Eyes"),
        CollectibleItem::new(Yugioh, "LOB-005", "Dark Magician", Rarity::UltraRare)
            .with_series("Legend of Blue Eyes"),
        CollectibleItem::new(Yugioh, "LOB-020", "Kuriboh", Rarity::Rare)
            .with_series("Legend of Blue Eyes"),
        CollectibleItem::new(Yugioh, "LOB-033", "Celtic Guardian", Rarity::SuperRare)
            .with_series("Legend of Blue Eyes"),
        CollectibleItem::new(Yugioh, "LOB-047", "Mystical Elf", Rarity::Common)
            .with_series("Legend of Blue Eyes"),
        CollectibleItem::new(Yugioh, "LOB-061", "Giant Soldier of Stone", Rarity::Common)
            .with_series("Legend of Blue Eyes"),
        CollectibleItem::new(Snoopy, "001", "Joe Cool", Rarity::Common),
        CollectibleItem::new(Snoopy, "002", "The Flying Ace", Rarity::Rare),
        CollectibleItem::new(Snoopy, "003", "Doghouse Novelist", Rarity::Legendary)
            .with_description("It was a dark and stormy night."),
        CollectibleItem::new(Habbo, "throne", "Throne", Rarity::Legendary),
        CollectibleItem::new(Habbo, "dragon_lamp", "Dragon Lamp", Rarity::Epic),
        CollectibleItem::new(Habbo, "ice_cream_machine", "Ice Cream Machine", Rarity::Common),
        CollectibleItem::new(AbelPersona, "sunrise", "Sunrise", Rarity::Common)
            .with_description("Warm oranges for early mornings."),
        CollectibleItem::new(AbelPersona, "midnight", "Midnight", Rarity::Rare)
            .with_description("Deep blues for late reading."),
    ]
}

/// Seeds the demo records into `state`.
pub async fn seed(state: &AppState) -> Result<()> {
    let email = normalize_email(&state.config.admin_email);
    let admin = match state.users.get_user_by_email(&email).await? {
        Some(existing) => existing,
        None => {
            let hash = hash_password(&state.config.admin_password).await?;
            let admin = User::new(email, "admin", hash).with_role(Role::Admin);
            state.users.create_user(&admin).await?;
            tracing::info!(email = %admin.email, "Seeded admin account");
            admin
        }
    };

    let mut created = 0;
    for base in starter_catalogue() {
        if state
            .pokemon_bases
            .get_base_by_species(base.species_id)
            .await?
            .is_none()
        {
            state.pokemon_bases.create_base(&base).await?;
            created += 1;
        }
    }
    tracing::info!(created, "Seeded starter catalogue");

    let mut created = 0;
    for item in demo_items() {
        let exists = state
            .items
            .list_items(item.category)
            .await?
            .iter()
            .any(|existing| existing.key == item.key);
        if !exists {
            state.items.create_item(&item).await?;
            created += 1;
        }
    }
    tracing::info!(created, "Seeded item catalogues");

    let volume = CreateVolumeRequest::new(SAMPLE_VOLUME)
        .with_status(VolumeStatus::Published)
        .into_volume(admin.id)?;
    if state
        .volumes
        .get_volume_by_number(volume.volume_number)
        .await?
        .is_none()
    {
        state.volumes.create_volume(&volume).await?;
        tracing::info!(volume_number = volume.volume_number, "Seeded sample volume");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifequest_core::collectible::evolution_chain;

    #[test]
    fn test_starter_families_chain_by_level() {
        let catalogue = starter_catalogue();

        assert_eq!(evolution_chain(&catalogue, 5), Some(vec![4, 5, 6]));
        assert_eq!(catalogue.iter().filter(|b| b.is_starter).count(), 3);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let state = AppState::default();

        seed(&state).await.unwrap();
        seed(&state).await.unwrap();

        assert_eq!(state.pokemon_bases.list_bases().await.unwrap().len(), 9);
        assert_eq!(state.items.list_items(GachaCategory::Yugioh).await.unwrap().len(), 6);
        assert_eq!(
            state.items.list_items(GachaCategory::AbelPersona).await.unwrap().len(),
            2
        );
        assert_eq!(state.volumes.list_published_volumes().await.unwrap().len(), 1);
        let admin = state
            .users
            .get_user_by_email("admin@lifequest.local")
            .await
            .unwrap()
            .unwrap();
        assert!(admin.role.is_admin());
    }
}
