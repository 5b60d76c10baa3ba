use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectibleError {
    #[error("Gacha category not found.")]
    UnknownCategory(String),
    #[error("There are no items available to pull.")]
    EmptyCatalogue,
    #[error("You already own every item in this collection.")]
    CollectionComplete,
    #[error("This Pokémon cannot evolve yet.")]
    NotEligibleToEvolve,
    #[error("You already own the evolved form of this Pokémon.")]
    AlreadyOwned,
    #[error("Pokémon name cannot be empty")]
    EmptyName,
    #[error("Species id must be positive")]
    InvalidSpeciesId,
    #[error("A Pokémon needs at least one form")]
    MissingForms,
    #[error("Training XP must be positive")]
    InvalidTrainingXp,
    #[error("Please choose a collectible category")]
    MissingCategory,
    #[error("Pokémon are managed through the Pokémon catalogue")]
    NotAnItemCategory,
    #[error("Item key cannot be empty")]
    EmptyItemKey,
    #[error("Item name cannot be empty")]
    EmptyItemName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collectible_error_display() {
        assert_eq!(
            CollectibleError::UnknownCategory("tamagotchi".to_string()).to_string(),
            "Gacha category not found."
        );
        assert_eq!(
            CollectibleError::NotEligibleToEvolve.to_string(),
            "This Pokémon cannot evolve yet."
        );
    }
}
