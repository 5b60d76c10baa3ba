use super::{CollectibleError, EvolutionPath, PokemonBase};

fn find_species(catalogue: &[PokemonBase], species_id: u32) -> Option<&PokemonBase> {
    catalogue.iter().find(|base| base.species_id == species_id)
}

fn find_parent(catalogue: &[PokemonBase], species_id: u32) -> Option<&PokemonBase> {
    catalogue.iter().find(|base| {
        base.evolution_paths
            .iter()
            .any(|path| path.to_species_id == species_id)
    })
}

/// Ordered species ids of the family containing `species_id`.
///
/// Walks back to the root of the family, then forward along the first
/// evolution path of each stage. Branching families (e.g. Eevee) follow only
/// their first branch. Returns `None` when the species is not catalogued.
pub fn evolution_chain(catalogue: &[PokemonBase], species_id: u32) -> Option<Vec<u32>> {
    find_species(catalogue, species_id)?;

    let mut root = species_id;
    let mut seen = vec![root];
    while let Some(parent) = find_parent(catalogue, root) {
        if seen.contains(&parent.species_id) {
            break;
        }
        root = parent.species_id;
        seen.push(root);
    }

    let mut chain = vec![root];
    let mut current = find_species(catalogue, root);
    while let Some(base) = current {
        let Some(next) = base.evolution_paths.first().map(|p| p.to_species_id) else {
            break;
        };
        if chain.contains(&next) {
            break;
        }
        chain.push(next);
        current = find_species(catalogue, next);
    }
    Some(chain)
}

/// First level-up path whose level requirement is met.
pub fn available_evolution(base: &PokemonBase, level: u32) -> Option<&EvolutionPath> {
    base.evolution_paths
        .iter()
        .find(|path| path.level_requirement().is_some_and(|required| level >= required))
}

/// Target species id for evolving a Pokémon of `base` at `level`.
pub fn plan_evolution(base: &PokemonBase, level: u32) -> Result<u32, CollectibleError> {
    available_evolution(base, level)
        .map(|path| path.to_species_id)
        .ok_or(CollectibleError::NotEligibleToEvolve)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<PokemonBase> {
        vec![
            PokemonBase::new(1, "Bulbasaur", 1, &["grass", "poison"])
                .with_evolution(EvolutionPath::level_up(2, 16)),
            PokemonBase::new(2, "Ivysaur", 1, &["grass", "poison"])
                .with_evolution(EvolutionPath::level_up(3, 32)),
            PokemonBase::new(3, "Venusaur", 1, &["grass", "poison"]),
            PokemonBase::new(133, "Eevee", 1, &["normal"])
                .with_evolution(EvolutionPath::use_item(134, "water-stone"))
                .with_evolution(EvolutionPath::use_item(135, "thunder-stone")),
            PokemonBase::new(134, "Vaporeon", 1, &["water"]),
            PokemonBase::new(135, "Jolteon", 1, &["electric"]),
        ]
    }

    #[test]
    fn test_chain_from_any_stage() {
        let catalogue = catalogue();
        for species in [1, 2, 3] {
            assert_eq!(evolution_chain(&catalogue, species), Some(vec![1, 2, 3]));
        }
    }

    #[test]
    fn test_chain_follows_first_branch() {
        let catalogue = catalogue();
        assert_eq!(evolution_chain(&catalogue, 135), Some(vec![133, 134]));
    }

    #[test]
    fn test_chain_unknown_species() {
        assert_eq!(evolution_chain(&catalogue(), 999), None);
    }

    #[test]
    fn test_chain_survives_cycles() {
        let catalogue = vec![
            PokemonBase::new(10, "A", 1, &["bug"]).with_evolution(EvolutionPath::level_up(11, 5)),
            PokemonBase::new(11, "B", 1, &["bug"]).with_evolution(EvolutionPath::level_up(10, 5)),
        ];
        let chain = evolution_chain(&catalogue, 10).unwrap();
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_available_evolution_respects_level() {
        let bulbasaur = &catalogue()[0];
        assert_eq!(available_evolution(bulbasaur, 15), None);
        assert_eq!(
            available_evolution(bulbasaur, 16).map(|p| p.to_species_id),
            Some(2)
        );
    }

    #[test]
    fn test_item_evolutions_are_not_level_based() {
        let eevee = &catalogue()[3];
        assert_eq!(
            plan_evolution(eevee, 100),
            Err(CollectibleError::NotEligibleToEvolve)
        );
    }
}
