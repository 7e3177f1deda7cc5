use crate::dex::{to_id, Dex};
use crate::search::SampleRng;
use schema::{
    AbilityData, LearnMethod, Learnset, MoveCategory, MoveData, MoveSource, PokemonColor,
    PokemonType, SpeciesData, Tier,
};

/// A builder for creating test species records with common defaults.
///
/// # Example
/// ```
/// let species = TestSpeciesBuilder::new("Flareon", 136)
///     .with_types(vec![PokemonType::Fire])
///     .with_tier(Tier::NU)
///     .build();
/// ```
pub struct TestSpeciesBuilder {
    record: SpeciesData,
}

impl TestSpeciesBuilder {
    /// Creates a builder for a species with neutral defaults: Normal type,
    /// OU tier, Gray colour, generation 1, empty learnset.
    pub fn new(name: &str, pokedex_number: u16) -> Self {
        Self {
            record: SpeciesData {
                pokedex_number,
                name: name.to_string(),
                types: vec![PokemonType::Normal],
                tier: Tier::OU,
                color: PokemonColor::Gray,
                abilities: Vec::new(),
                gen: 1,
                learnset: Learnset::default(),
            },
        }
    }

    pub fn with_types(mut self, types: Vec<PokemonType>) -> Self {
        self.record.types = types;
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.record.tier = tier;
        self
    }

    pub fn with_color(mut self, color: PokemonColor) -> Self {
        self.record.color = color;
        self
    }

    pub fn with_gen(mut self, gen: u8) -> Self {
        self.record.gen = gen;
        self
    }

    pub fn with_ability(mut self, ability: &str) -> Self {
        self.record.abilities.push(ability.to_string());
        self
    }

    /// Adds a legal move to the learnset, keyed by normalized move id.
    pub fn learns(mut self, move_name: &str, sources: Vec<MoveSource>) -> Self {
        self.record
            .learnset
            .sources
            .insert(to_id(move_name), sources);
        self
    }

    pub fn build(self) -> SpeciesData {
        self.record
    }
}

pub fn machine_source(gen: u8) -> MoveSource {
    MoveSource {
        gen,
        method: LearnMethod::Machine,
        detail: None,
    }
}

pub fn level_source(gen: u8, level: u8) -> MoveSource {
    MoveSource {
        gen,
        method: LearnMethod::LevelUp,
        detail: Some(level.to_string()),
    }
}

pub fn event_source(gen: u8) -> MoveSource {
    MoveSource {
        gen,
        method: LearnMethod::Event,
        detail: None,
    }
}

fn test_move(name: &str, move_type: PokemonType, category: MoveCategory) -> MoveData {
    MoveData {
        name: name.to_string(),
        move_type,
        category,
        base_power: 90,
        accuracy: 100,
        max_pp: 15,
    }
}

fn test_ability(name: &str) -> AbilityData {
    AbilityData {
        name: name.to_string(),
        description: String::new(),
    }
}

/// A fixed seed keeps sampled renderings reproducible across test runs.
pub fn seeded_rng() -> SampleRng {
    SampleRng::from_seed(0x5EED)
}

/// A small but representative catalog: fire species across several tiers,
/// dual types in both slot orders, a CAP species, and an Illegal record.
pub fn sample_dex() -> Dex {
    let species = vec![
        TestSpeciesBuilder::new("Charizard", 6)
            .with_types(vec![PokemonType::Fire, PokemonType::Flying])
            .with_tier(Tier::NU)
            .with_color(PokemonColor::Red)
            .with_ability("Blaze")
            .learns("Flamethrower", vec![level_source(5, 47), machine_source(5)])
            .learns("Earthquake", vec![machine_source(5)])
            .learns("Fly", vec![machine_source(5)])
            .build(),
        TestSpeciesBuilder::new("Pikachu", 25)
            .with_types(vec![PokemonType::Electric])
            .with_tier(Tier::NFE)
            .with_color(PokemonColor::Yellow)
            .with_ability("Static")
            .learns("Thunderbolt", vec![level_source(5, 29), machine_source(5)])
            .learns("Surf", vec![event_source(5)])
            .build(),
        TestSpeciesBuilder::new("Gyarados", 130)
            .with_types(vec![PokemonType::Water, PokemonType::Flying])
            .with_tier(Tier::OU)
            .with_color(PokemonColor::Blue)
            .with_ability("Intimidate")
            .learns("Surf", vec![machine_source(5)])
            .learns("Earthquake", vec![machine_source(5)])
            .build(),
        TestSpeciesBuilder::new("Vaporeon", 134)
            .with_types(vec![PokemonType::Water])
            .with_tier(Tier::UU)
            .with_color(PokemonColor::Blue)
            .with_ability("Water Absorb")
            .learns("Surf", vec![machine_source(5)])
            .build(),
        TestSpeciesBuilder::new("Flareon", 136)
            .with_types(vec![PokemonType::Fire])
            .with_tier(Tier::NU)
            .with_color(PokemonColor::Red)
            .with_ability("Flash Fire")
            .learns("Flamethrower", vec![level_source(5, 37), machine_source(5)])
            .build(),
        // Type slots deliberately reversed relative to Charizard.
        TestSpeciesBuilder::new("Moltres", 146)
            .with_types(vec![PokemonType::Flying, PokemonType::Fire])
            .with_tier(Tier::UU)
            .with_color(PokemonColor::Yellow)
            .with_ability("Pressure")
            .learns("Flamethrower", vec![level_source(5, 36)])
            .learns("Fly", vec![machine_source(5)])
            .build(),
        TestSpeciesBuilder::new("Volcarona", 637)
            .with_types(vec![PokemonType::Bug, PokemonType::Fire])
            .with_tier(Tier::OU)
            .with_color(PokemonColor::White)
            .with_ability("Flame Body")
            .with_gen(5)
            .learns("Flamethrower", vec![level_source(5, 100), machine_source(5)])
            .learns("Quiver Dance", vec![level_source(5, 59)])
            .build(),
        TestSpeciesBuilder::new("Necturna", 2001)
            .with_types(vec![PokemonType::Grass, PokemonType::Ghost])
            .with_tier(Tier::Cap)
            .with_color(PokemonColor::Black)
            .with_gen(5)
            .build(),
        TestSpeciesBuilder::new("Missingno", 0)
            .with_types(vec![PokemonType::Normal])
            .with_tier(Tier::Illegal)
            .build(),
    ];

    let moves = vec![
        test_move("Surf", PokemonType::Water, MoveCategory::Special),
        test_move("Thunderbolt", PokemonType::Electric, MoveCategory::Special),
        test_move("Earthquake", PokemonType::Ground, MoveCategory::Physical),
        test_move("Flamethrower", PokemonType::Fire, MoveCategory::Special),
        test_move("Quiver Dance", PokemonType::Bug, MoveCategory::Status),
        test_move("Fly", PokemonType::Flying, MoveCategory::Physical),
    ];

    let abilities = vec![
        test_ability("Blaze"),
        test_ability("Static"),
        test_ability("Intimidate"),
        test_ability("Water Absorb"),
        test_ability("Flash Fire"),
        test_ability("Pressure"),
        test_ability("Flame Body"),
    ];

    Dex::from_parts(species, moves, abilities)
}
