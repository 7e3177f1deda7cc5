use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumString;

/// The ten Pokedex colour groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PokemonColor {
    Red,
    Blue,
    Yellow,
    Green,
    Black,
    Brown,
    Purple,
    Gray,
    White,
    Pink,
}

impl fmt::Display for PokemonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
