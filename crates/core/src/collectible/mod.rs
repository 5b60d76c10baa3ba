//! Collectibles: the shared Pokémon catalogue with evolution lookups, the
//! item catalogues for the other gacha categories, per-user ownership
//! records and the pull logic.

mod error;
mod evolution;
mod gacha;
mod items;
mod requests;
mod types;

pub use error::CollectibleError;
pub use evolution::{available_evolution, evolution_chain, plan_evolution};
pub use gacha::{
    open_card_pack, pick_any, pick_unowned, roll_card_rarity, Collectible, GachaCategory,
    PullKind, CARD_PACK_SIZE, CARD_RARITY_WEIGHTS,
};
pub use items::{CollectibleItem, CreateItemRequest, OwnedItem, Rarity, UserItem};
pub use requests::{CreatePokemonBaseRequest, TrainRequest, UpdatePokemonBaseRequest};
pub use types::{
    CollectionEntry, EvolutionDetail, EvolutionMethod, EvolutionPath, PokemonBase, PokemonForm,
    UserPokemon, Variant, POKEMON_BASE_XP_TO_NEXT_LEVEL,
};
