// In: src/lib.rs

//! Dexsearch Query Engine
//!
//! A multi-criteria species search engine for a chat command processor:
//! free-text tokens are classified into typed filter categories, intersected
//! across categories against a read-only dex snapshot, and rendered as one
//! bounded reply line. The same dex facade backs the learnset and
//! type-weakness lookup commands.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod commands;
pub mod dex;
pub mod errors;
pub mod learnset;
pub mod markup;
pub mod search;
pub mod weakness;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `dexsearch` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{
    AbilityData,
    LearnMethod,
    Learnset,
    MoveCategory,
    MoveData,
    MoveSource,
    PokemonColor,
    PokemonType,
    SpeciesData,
    Tier,
};

// --- From this crate's modules (`src/`) ---

// The dex facade and its lookup results.
pub use dex::{to_id, Dex, LearnCheck};

// The query engine: parsing, evaluation, and result rendering.
pub use search::{format_results, DexQuery, SampleRng, MAX_DISPLAYED};

// Secondary lookup commands sharing the facade.
pub use learnset::run_learn;
pub use weakness::run_weakness;

// Command dispatch for embedding in a text-command processor.
pub use commands::{CommandHandler, Reply};

// Crate-specific error and result types.
pub use errors::{LookupError, ParseError, SearchError, SearchResult};
