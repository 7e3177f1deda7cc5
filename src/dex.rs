use schema::{AbilityData, MoveData, MoveSource, PokemonType, SpeciesData};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Normalize a display name into a dex id: lowercase, alphanumerics only.
/// "Thunder Wave" and "thunderwave" resolve to the same entry.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Outcome of a learnset legality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnCheck<'a> {
    /// The species can learn the move; the slice lists its provenance.
    Legal(&'a [MoveSource]),
    Illegal,
}

impl LearnCheck<'_> {
    pub fn is_legal(&self) -> bool {
        matches!(self, LearnCheck::Legal(_))
    }
}

/// Read-only facade over the species, move, and ability tables.
///
/// A `Dex` is immutable once built. Callers that need to replace the catalog
/// wholesale swap in a new `Arc<Dex>` between invocations; an in-flight query
/// keeps its own clone of the old `Arc` and never observes mixed data.
#[derive(Debug, Clone, Default)]
pub struct Dex {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
    abilities: HashMap<String, AbilityData>,
    // Species ids in pokedex order, so catalog traversal is stable.
    dex_order: Vec<String>,
}

impl Dex {
    /// Build a dex from loose record lists, keying every table by normalized id.
    pub fn from_parts(
        species: Vec<SpeciesData>,
        moves: Vec<MoveData>,
        abilities: Vec<AbilityData>,
    ) -> Self {
        let mut dex = Dex::default();

        let mut numbered: Vec<(u16, String)> = Vec::with_capacity(species.len());
        for record in species {
            let id = to_id(&record.name);
            numbered.push((record.pokedex_number, id.clone()));
            dex.species.insert(id, record);
        }
        numbered.sort_by_key(|(number, _)| *number);
        dex.dex_order = numbered.into_iter().map(|(_, id)| id).collect();

        for record in moves {
            dex.moves.insert(to_id(&record.name), record);
        }
        for record in abilities {
            dex.abilities.insert(to_id(&record.name), record);
        }

        dex
    }

    /// Load a dex from a data directory: one RON file per species under
    /// `pokemon/`, plus `moves.ron` and `abilities.ron` record lists.
    pub fn load(data_path: &Path) -> Result<Dex, Box<dyn std::error::Error>> {
        let pokemon_dir = data_path.join("pokemon");

        if !pokemon_dir.exists() {
            return Err(format!(
                "Pokemon data directory not found: {}",
                pokemon_dir.display()
            )
            .into());
        }

        let mut species = Vec::new();
        for entry in fs::read_dir(&pokemon_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                let content = fs::read_to_string(&path)?;
                let record: SpeciesData = ron::from_str(&content)?;
                species.push(record);
            }
        }

        let moves: Vec<MoveData> = ron::from_str(&fs::read_to_string(data_path.join("moves.ron"))?)?;
        let abilities: Vec<AbilityData> =
            ron::from_str(&fs::read_to_string(data_path.join("abilities.ron"))?)?;

        Ok(Dex::from_parts(species, moves, abilities))
    }

    /// Iterate every species record in pokedex order.
    pub fn catalog(&self) -> impl Iterator<Item = &SpeciesData> {
        self.dex_order.iter().filter_map(|id| self.species.get(id))
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn species(&self, name: &str) -> Option<&SpeciesData> {
        self.species.get(&to_id(name))
    }

    pub fn get_move(&self, name: &str) -> Option<&MoveData> {
        self.moves.get(&to_id(name))
    }

    pub fn get_ability(&self, name: &str) -> Option<&AbilityData> {
        self.abilities.get(&to_id(name))
    }

    pub fn get_type(&self, name: &str) -> Option<PokemonType> {
        PokemonType::from_str(name.trim()).ok()
    }

    /// Check whether a species can legally learn a move.
    pub fn check_learnset<'a>(&self, move_id: &str, species: &'a SpeciesData) -> LearnCheck<'a> {
        match species.learnset.sources_for(move_id) {
            Some(sources) => LearnCheck::Legal(sources),
            None => LearnCheck::Illegal,
        }
    }

    /// Summed effectiveness exponent of an attacking type against a defender's
    /// type slots: +1 per super-effective slot, -1 per resisted slot. Immunity
    /// is reported separately by [`Dex::type_immunity`].
    pub fn type_effectiveness(&self, attacking: PokemonType, defending: &[PokemonType]) -> i8 {
        let mut exponent = 0;
        for &slot in defending {
            let multiplier = PokemonType::type_effectiveness(attacking, slot);
            if multiplier == 2.0 {
                exponent += 1;
            } else if multiplier == 0.5 {
                exponent -= 1;
            }
        }
        exponent
    }

    pub fn type_immunity(&self, attacking: PokemonType, defending: &[PokemonType]) -> bool {
        defending
            .iter()
            .any(|&slot| PokemonType::is_immune(attacking, slot))
    }
}
