use crate::dex::Dex;
use crate::errors::{LookupError, ParseError, SearchResult};
use crate::markup::bold;
use schema::{IntoEnumIterator, PokemonType};

/// Answer a weakness query for a species name or a 1-2 type combination.
///
/// Lists every attacking type with a positive effectiveness exponent against
/// the defender's type slots; a double weakness is marked `(x4)`. Types the
/// defender is immune to never appear.
pub fn run_weakness(dex: &Dex, target: &str) -> SearchResult<String> {
    let (label, defender_types) = resolve_target(dex, target)?;

    let mut weaknesses: Vec<String> = Vec::new();
    for attacking in PokemonType::iter() {
        if dex.type_immunity(attacking, &defender_types) {
            continue;
        }
        let exponent = dex.type_effectiveness(attacking, &defender_types);
        if exponent >= 2 {
            weaknesses.push(format!("{} (x4)", attacking));
        } else if exponent == 1 {
            weaknesses.push(attacking.to_string());
        }
    }

    if weaknesses.is_empty() {
        Ok(format!("{} has no weaknesses.", bold(&label)))
    } else {
        Ok(format!(
            "{} is weak to: {}.",
            bold(&label),
            weaknesses.join(", ")
        ))
    }
}

/// A weakness target is either a known species or a list of type names
/// separated by commas or slashes.
fn resolve_target(dex: &Dex, target: &str) -> SearchResult<(String, Vec<PokemonType>)> {
    if let Some(species) = dex.species(target.trim()) {
        let slots = species
            .types
            .iter()
            .map(PokemonType::to_string)
            .collect::<Vec<_>>()
            .join("/");
        return Ok((format!("{} ({})", species.name, slots), species.types.clone()));
    }

    let mut types: Vec<PokemonType> = Vec::new();
    for part in target.split(|c| c == ',' || c == '/') {
        let part = part.trim();
        let type_ = dex
            .get_type(part)
            .ok_or_else(|| LookupError::UnknownType(part.to_string()))?;
        if !types.contains(&type_) {
            types.push(type_);
        }
    }
    if types.len() > 2 {
        return Err(ParseError::TypeLimitExceeded.into());
    }

    let label = types
        .iter()
        .map(PokemonType::to_string)
        .collect::<Vec<_>>()
        .join("/");
    Ok((label, types))
}
