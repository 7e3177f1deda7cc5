use crate::errors::{ParseError, SearchError};
use crate::search::classifier::Token;
use schema::{PokemonColor, PokemonType, Tier};

pub const MAX_MOVE_FILTERS: usize = 4;
pub const MAX_ABILITY_FILTERS: usize = 1;
pub const MAX_TYPE_FILTERS: usize = 2;

/// Membership set for one filter category, paired with an explicit count.
///
/// The count always equals the number of members; the pair is kept explicit
/// so the bookkeeping invariant can be checked rather than assumed.
#[derive(Debug, Clone)]
pub struct CategoryMembers<T> {
    members: Vec<T>,
    count: usize,
}

impl<T> Default for CategoryMembers<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            count: 0,
        }
    }
}

impl<T: PartialEq> CategoryMembers<T> {

    /// Insert a member, unioning duplicates. Returns `Err(())` when a new
    /// distinct member would exceed the cap.
    pub fn insert(&mut self, value: T, cap: usize) -> Result<(), ()> {
        if !self.members.contains(&value) && self.count >= cap {
            return Err(());
        }
        self.insert_uncapped(value);
        Ok(())
    }

    /// Insert a member of an uncapped category, unioning duplicates.
    pub fn insert_uncapped(&mut self, value: T) {
        if self.members.contains(&value) {
            return;
        }
        self.members.push(value);
        self.count += 1;
    }

    pub fn members(&self) -> &[T] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    fn check_consistency(&self, kind: &str) -> Result<(), SearchError> {
        if self.count != self.members.len() {
            return Err(SearchError::Inconsistency(format!(
                "{} filter count {} does not match its {} members",
                kind,
                self.count,
                self.members.len()
            )));
        }
        Ok(())
    }
}

/// The accumulated filter categories of one query, at most one per kind.
#[derive(Debug, Clone, Default)]
pub struct QueryFilters {
    pub types: CategoryMembers<PokemonType>,
    pub tiers: CategoryMembers<Tier>,
    pub ability: CategoryMembers<String>,
    pub colors: CategoryMembers<PokemonColor>,
    pub moves: CategoryMembers<String>,
    pub gens: CategoryMembers<u8>,
    pub all: bool,
}

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified token into its category, enforcing the per-kind
    /// cardinality caps as the token arrives.
    pub fn accumulate(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::Move(id) => self
                .moves
                .insert(id, MAX_MOVE_FILTERS)
                .map_err(|_| ParseError::MoveLimitExceeded),
            Token::Ability(id) => self
                .ability
                .insert(id, MAX_ABILITY_FILTERS)
                .map_err(|_| ParseError::AbilityLimitExceeded),
            Token::Type(type_) => self
                .types
                .insert(type_, MAX_TYPE_FILTERS)
                .map_err(|_| ParseError::TypeLimitExceeded),
            Token::Tier(tier) => {
                self.tiers.insert_uncapped(tier);
                Ok(())
            }
            Token::Color(color) => {
                self.colors.insert_uncapped(color);
                Ok(())
            }
            Token::Generation(gen) => {
                self.gens.insert_uncapped(gen);
                Ok(())
            }
            Token::All => {
                self.all = true;
                Ok(())
            }
        }
    }

    /// Number of populated (non-flag) categories.
    pub fn populated_count(&self) -> usize {
        [
            !self.types.is_empty(),
            !self.tiers.is_empty(),
            !self.ability.is_empty(),
            !self.colors.is_empty(),
            !self.moves.is_empty(),
            !self.gens.is_empty(),
        ]
        .iter()
        .filter(|populated| **populated)
        .count()
    }

    /// Validate the finished accumulation before evaluation.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.types.check_consistency("type")?;
        self.tiers.check_consistency("tier")?;
        self.ability.check_consistency("ability")?;
        self.colors.check_consistency("color")?;
        self.moves.check_consistency("move")?;
        self.gens.check_consistency("generation")?;

        if self.all && self.populated_count() == 0 {
            return Err(ParseError::EmptyQueryWithAllFlag.into());
        }
        Ok(())
    }
}
