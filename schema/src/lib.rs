// Dexsearch Schema - Shared type definitions
// This crate contains the core enums and data structs that are shared between
// the dexsearch engine and whatever loads the dex data, keeping the pure data
// model free of any query logic.

// Re-export the main types
pub use strum::IntoEnumIterator;

pub use colors::*;
pub use move_data::*;
pub use pokemon_types::*;
pub use species_data::*;
pub use tiers::*;

pub mod colors;
pub mod move_data;
pub mod pokemon_types;
pub mod species_data;
pub mod tiers;
