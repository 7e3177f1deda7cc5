use crate::{PokemonColor, PokemonType, Tier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// How a species acquires a move in a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Tutor,
    Egg,
    Event,
    DreamWorld,
}

impl LearnMethod {
    /// Single-character code used in the compact source notation (e.g. "5L31").
    pub fn code(&self) -> char {
        match self {
            LearnMethod::LevelUp => 'L',
            LearnMethod::Machine => 'M',
            LearnMethod::Tutor => 'T',
            LearnMethod::Egg => 'E',
            LearnMethod::Event => 'S',
            LearnMethod::DreamWorld => 'D',
        }
    }

    /// Human-readable label for reply text.
    pub fn label(&self) -> &'static str {
        match self {
            LearnMethod::LevelUp => "Level up",
            LearnMethod::Machine => "TM/HM",
            LearnMethod::Tutor => "Tutor",
            LearnMethod::Egg => "Egg",
            LearnMethod::Event => "Event",
            LearnMethod::DreamWorld => "Dream World",
        }
    }
}

/// One provenance entry for a legal move: the generation it is obtained in,
/// the acquisition method, and an optional method-specific detail such as the
/// level for a level-up move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSource {
    pub gen: u8,
    pub method: LearnMethod,
    pub detail: Option<String>,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.gen, self.method.code())?;
        if let Some(detail) = &self.detail {
            write!(f, "{}", detail)?;
        }
        Ok(())
    }
}

/// All moves a species can legally know, keyed by move id.
///
/// Each entry lists its sources in the order the dex data records them,
/// newest generation first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learnset {
    pub sources: HashMap<String, Vec<MoveSource>>,
}

impl Learnset {
    pub fn can_learn_move(&self, move_id: &str) -> bool {
        self.sources.contains_key(move_id)
    }

    pub fn sources_for(&self, move_id: &str) -> Option<&[MoveSource]> {
        self.sources.get(move_id).map(Vec::as_slice)
    }
}

/// Static catalog record for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub pokedex_number: u16,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub tier: Tier,
    pub color: PokemonColor,
    pub abilities: Vec<String>,
    pub gen: u8,
    pub learnset: Learnset,
}

impl SpeciesData {
    pub fn has_type(&self, type_: PokemonType) -> bool {
        self.types.contains(&type_)
    }
}
