use crate::dex::{to_id, Dex};
use crate::errors::{LookupError, SearchError, SearchResult};
use crate::search::filters::QueryFilters;
use schema::{SpeciesData, Tier};

/// Compute the catalog subset satisfying the AND of every populated category.
///
/// The working set starts as the full catalog minus `Illegal` species and
/// minus `CAP` species unless `cap` was explicitly requested as a tier.
/// Each populated category is applied exactly once, in fixed order, and only
/// ever narrows the set. Results come back in pokedex order.
pub fn evaluate<'d>(dex: &'d Dex, filters: &QueryFilters) -> SearchResult<Vec<&'d SpeciesData>> {
    // Resolve requested moves before any narrowing; an unknown move aborts
    // the whole query rather than silently matching nothing.
    for move_id in filters.moves.members() {
        if dex.get_move(move_id).is_none() {
            return Err(LookupError::UnknownMove(move_id.clone()).into());
        }
    }

    let cap_requested = filters.tiers.contains(&Tier::Cap);
    let mut working: Vec<&SpeciesData> = dex
        .catalog()
        .filter(|species| species.tier != Tier::Illegal)
        .filter(|species| cap_requested || species.tier != Tier::Cap)
        .collect();

    // Fixed category priority: type, tier, ability, colour, move, generation.
    match filters.types.members() {
        [] => {}
        [only] => working.retain(|species| species.has_type(*only)),
        [first, second] => {
            working.retain(|species| species.has_type(*first) && species.has_type(*second))
        }
        _ => {
            return Err(SearchError::Inconsistency(
                "type filter holds more than two members".to_string(),
            ))
        }
    }

    if !filters.tiers.is_empty() {
        working.retain(|species| filters.tiers.contains(&species.tier));
    }

    if let [ability_id] = filters.ability.members() {
        working.retain(|species| {
            species
                .abilities
                .iter()
                .any(|ability| to_id(ability) == *ability_id)
        });
    }

    if !filters.colors.is_empty() {
        working.retain(|species| filters.colors.contains(&species.color));
    }

    if !filters.moves.is_empty() {
        working.retain(|species| {
            filters
                .moves
                .members()
                .iter()
                .all(|move_id| dex.check_learnset(move_id, species).is_legal())
        });
    }

    if !filters.gens.is_empty() {
        working.retain(|species| filters.gens.contains(&species.gen));
    }

    Ok(working)
}
