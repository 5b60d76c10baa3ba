use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progression::Currency;

use super::{CollectibleError, CollectibleItem, PokemonBase, Rarity};

/// Cards in one trading-card pack.
pub const CARD_PACK_SIZE: usize = 6;

/// Rarity roll for each card slot, in percent. Sums to 100.
pub const CARD_RARITY_WEIGHTS: [(Rarity, u32); 6] = [
    (Rarity::Common, 50),
    (Rarity::Rare, 30),
    (Rarity::SuperRare, 10),
    (Rarity::UltraRare, 5),
    (Rarity::SecretRare, 3),
    (Rarity::UltimateRare, 2),
];

/// Collections that can be pulled from the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GachaCategory {
    Pokemon,
    Yugioh,
    Snoopy,
    Habbo,
    AbelPersona,
}

/// How a category hands out what was pulled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullKind {
    /// One species the user does not own yet.
    UnownedPokemon,
    /// A pack of cards rolled by rarity; duplicates allowed.
    CardPack,
    /// One uniformly random item; duplicates allowed.
    Single,
    /// Unlocks one item the user does not own yet.
    DirectUnlock,
}

impl GachaCategory {
    pub const ALL: [GachaCategory; 5] = [
        GachaCategory::Pokemon,
        GachaCategory::Yugioh,
        GachaCategory::Snoopy,
        GachaCategory::Habbo,
        GachaCategory::AbelPersona,
    ];

    pub fn cost(&self) -> u64 {
        match self {
            GachaCategory::Pokemon | GachaCategory::Yugioh => 5,
            GachaCategory::Snoopy | GachaCategory::Habbo => 20,
            GachaCategory::AbelPersona => 10,
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            GachaCategory::Pokemon | GachaCategory::Yugioh => Currency::TemuTokens,
            GachaCategory::Snoopy | GachaCategory::Habbo => Currency::GatillaGold,
            GachaCategory::AbelPersona => Currency::WendyHearts,
        }
    }

    pub fn pull_kind(&self) -> PullKind {
        match self {
            GachaCategory::Pokemon => PullKind::UnownedPokemon,
            GachaCategory::Yugioh => PullKind::CardPack,
            GachaCategory::Snoopy | GachaCategory::Habbo => PullKind::Single,
            GachaCategory::AbelPersona => PullKind::DirectUnlock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GachaCategory::Pokemon => "pokemon",
            GachaCategory::Yugioh => "yugioh",
            GachaCategory::Snoopy => "snoopy",
            GachaCategory::Habbo => "habbo",
            GachaCategory::AbelPersona => "abelpersona",
        }
    }
}

impl FromStr for GachaCategory {
    type Err = CollectibleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        GachaCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| CollectibleError::UnknownCategory(s.to_string()))
    }
}

/// Anything with a catalogue id that a user can own.
pub trait Collectible {
    fn catalogue_id(&self) -> Uuid;
}

impl Collectible for PokemonBase {
    fn catalogue_id(&self) -> Uuid {
        self.id
    }
}

impl Collectible for CollectibleItem {
    fn catalogue_id(&self) -> Uuid {
        self.id
    }
}

/// Picks a uniformly random catalogue entry the user does not own yet.
pub fn pick_unowned<'a, T, R>(
    catalogue: &'a [T],
    owned_ids: &[Uuid],
    rng: &mut R,
) -> Result<&'a T, CollectibleError>
where
    T: Collectible,
    R: Rng + ?Sized,
{
    if catalogue.is_empty() {
        return Err(CollectibleError::EmptyCatalogue);
    }
    let candidates: Vec<&T> = catalogue
        .iter()
        .filter(|entry| !owned_ids.contains(&entry.catalogue_id()))
        .collect();
    if candidates.is_empty() {
        return Err(CollectibleError::CollectionComplete);
    }
    Ok(candidates[rng.random_range(0..candidates.len())])
}

/// Picks any catalogue entry, owned or not.
pub fn pick_any<'a, T, R>(catalogue: &'a [T], rng: &mut R) -> Result<&'a T, CollectibleError>
where
    R: Rng + ?Sized,
{
    if catalogue.is_empty() {
        return Err(CollectibleError::EmptyCatalogue);
    }
    Ok(&catalogue[rng.random_range(0..catalogue.len())])
}

/// Rolls a rarity tier from [`CARD_RARITY_WEIGHTS`].
pub fn roll_card_rarity<R>(rng: &mut R) -> Rarity
where
    R: Rng + ?Sized,
{
    let total: u32 = CARD_RARITY_WEIGHTS.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.random_range(0..total);
    for (rarity, weight) in CARD_RARITY_WEIGHTS {
        if roll < weight {
            return rarity;
        }
        roll -= weight;
    }
    Rarity::Common
}

/// Opens a card pack: each slot rolls a rarity and draws from that pool.
///
/// An empty pool falls back to the common pool, and an empty common pool
/// to the whole catalogue, so a non-empty catalogue always fills the pack.
pub fn open_card_pack<'a, R>(
    catalogue: &'a [CollectibleItem],
    rng: &mut R,
) -> Result<Vec<&'a CollectibleItem>, CollectibleError>
where
    R: Rng + ?Sized,
{
    if catalogue.is_empty() {
        return Err(CollectibleError::EmptyCatalogue);
    }
    let pool_of = |rarity: Rarity| -> Vec<&'a CollectibleItem> {
        catalogue.iter().filter(|card| card.rarity == rarity).collect()
    };
    let common = pool_of(Rarity::Common);

    let mut pack = Vec::with_capacity(CARD_PACK_SIZE);
    for _ in 0..CARD_PACK_SIZE {
        let rolled = pool_of(roll_card_rarity(rng));
        let card = if !rolled.is_empty() {
            rolled[rng.random_range(0..rolled.len())]
        } else if !common.is_empty() {
            common[rng.random_range(0..common.len())]
        } else {
            pick_any(catalogue, rng)?
        };
        pack.push(card);
    }
    Ok(pack)
}
